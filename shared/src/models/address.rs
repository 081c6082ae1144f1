//! Address Model

use serde::{Deserialize, Serialize};

/// Delivery address entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub id: String,
    /// User-facing label (e.g. "Home", "Work")
    pub label: Option<String>,
    pub street: String,
    pub city: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// Create address payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressCreate {
    pub label: Option<String>,
    pub street: String,
    pub city: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}
