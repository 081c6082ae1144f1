//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order status as reported by the backend.
///
/// Transitions originate on the backend only; the client applies them
/// verbatim. The allowed transitions are:
/// `pending_approval -> {approved, canceled}`,
/// `approved -> {assigned, picked_up, canceled}`,
/// `assigned -> {picked_up, canceled}`,
/// `picked_up -> delivered`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    PendingApproval,
    Approved,
    Assigned,
    PickedUp,
    Delivered,
    Canceled,
}

impl OrderStatus {
    /// Whether no further transition can occur from this status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Canceled)
    }

    /// Whether the backend may move an order from `self` to `next`.
    ///
    /// Used for UI affordances (which action buttons to show) — never to
    /// compute a transition client-side.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        match self {
            PendingApproval => matches!(next, Approved | Canceled),
            Approved => matches!(next, Assigned | PickedUp | Canceled),
            Assigned => matches!(next, PickedUp | Canceled),
            PickedUp => matches!(next, Delivered),
            Delivered | Canceled => false,
        }
    }
}

/// How the order reaches the customer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Fulfillment {
    #[default]
    Delivery,
    Pickup,
}

/// Selected modifier on an order line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItemModifier {
    /// Modifier option reference (String ID)
    pub option_id: String,
    pub name: String,
    /// Surcharge in currency unit
    pub surcharge: f64,
    pub count: i32,
}

/// Order line item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    /// Menu item reference (String ID)
    pub menu_item_id: String,
    pub name: String,
    /// Unit price in currency unit, modifier surcharges included
    pub price: f64,
    pub quantity: i32,
    #[serde(default)]
    pub modifiers: Vec<OrderItemModifier>,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Server-assigned identifier
    pub id: String,
    pub status: OrderStatus,
    /// Restaurant reference (String ID)
    pub restaurant_id: String,
    pub restaurant_name: Option<String>,
    pub items: Vec<OrderItem>,
    /// Total in currency unit
    pub total: f64,
    pub fulfillment: Fulfillment,
    /// Delivery address reference, absent for pickup orders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Update status payload (`PATCH orders/:id/update_status`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderUpdateStatus {
    pub status: OrderStatus,
}
