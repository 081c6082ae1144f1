//! Order endpoints

use crate::{ClientError, ClientResult, HttpClient};
use shared::client::{ApiResponse, CreateOrderRequest};
use shared::models::order::{Order, OrderStatus, OrderUpdateStatus};
use shared::models::session::Role;

/// Order endpoints, bound to the caller's role
///
/// Role-gated fetches return an empty list locally instead of calling an
/// endpoint the backend would reject.
#[derive(Debug, Clone)]
pub struct OrderService {
    http: HttpClient,
    role: Role,
}

impl OrderService {
    pub fn new(http: HttpClient, role: Role) -> Self {
        Self { http, role }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Order history for the signed-in user
    pub async fn list_orders(&self) -> ClientResult<Vec<Order>> {
        if !self.role.is_authenticated() {
            return Ok(Vec::new());
        }

        Ok(self
            .http
            .get::<ApiResponse<Vec<Order>>>("api/orders")
            .await?
            .data
            .unwrap_or_default())
    }

    /// Unassigned orders available to delivery partners
    pub async fn partner_pending_orders(&self) -> ClientResult<Vec<Order>> {
        if !self.role.is_partner() {
            return Ok(Vec::new());
        }

        Ok(self
            .http
            .get::<ApiResponse<Vec<Order>>>("api/orders/partner_pending_orders")
            .await?
            .data
            .unwrap_or_default())
    }

    /// Incoming orders for the owner's restaurant
    pub async fn new_restaurant_orders(&self) -> ClientResult<Vec<Order>> {
        if !self.role.is_restaurant_owner() {
            return Ok(Vec::new());
        }

        Ok(self
            .http
            .get::<ApiResponse<Vec<Order>>>("api/orders/new_restaurant_orders")
            .await?
            .data
            .unwrap_or_default())
    }

    /// Submit a checkout
    pub async fn create_order(&self, request: &CreateOrderRequest) -> ClientResult<Order> {
        self.http
            .post::<ApiResponse<Order>, _>("api/orders/create_order", request)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing order data".to_string()))
    }

    /// Request a status transition; the backend validates and returns the
    /// updated order
    pub async fn update_status(&self, order_id: &str, status: OrderStatus) -> ClientResult<Order> {
        let path = format!("api/orders/{}/update_status", order_id);
        self.http
            .patch::<ApiResponse<Order>, _>(&path, &OrderUpdateStatus { status })
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing order data".to_string()))
    }
}
