//! Client-related types shared between backend and client
//!
//! Common request/response types used in API communication.

use serde::{Deserialize, Serialize};

use crate::models::order::{Fulfillment, OrderItem};
use crate::models::session::Role;

// Re-export ApiResponse from response module
pub use crate::response::ApiResponse;

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Register request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Login/register response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// User information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub partner_active: bool,
}

// =============================================================================
// Order API DTOs
// =============================================================================

/// Checkout submission payload (`POST orders/create_order`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub restaurant_id: String,
    pub items: Vec<OrderItem>,
    pub fulfillment: Fulfillment,
    /// Required for delivery orders, absent for pickup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_id: Option<String>,
}
