//! Restaurant and Menu Models

use serde::{Deserialize, Serialize};

/// Restaurant entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub cuisine: Option<String>,
    pub is_open: bool,
    /// Delivery fee in currency unit
    #[serde(default)]
    pub delivery_fee: f64,
    pub image_url: Option<String>,
}

/// Modifier option (a customization with an optional surcharge)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModifierOption {
    pub id: String,
    pub name: String,
    /// Surcharge in currency unit
    #[serde(default)]
    pub surcharge: f64,
}

/// Modifier group on a menu item (e.g. "Size", "Extras")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModifierGroup {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub options: Vec<ModifierOption>,
    /// Maximum number of selectable options, unlimited when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_selections: Option<i32>,
}

/// Menu item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub restaurant_id: String,
    pub name: String,
    pub description: Option<String>,
    /// Base price in currency unit
    pub price: f64,
    #[serde(default)]
    pub modifier_groups: Vec<ModifierGroup>,
    pub image_url: Option<String>,
}
