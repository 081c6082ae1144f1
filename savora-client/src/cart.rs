//! Cart state container
//!
//! In-memory, restaurant-scoped cart. The scope guard lives here rather
//! than at call sites: adding an item from a different restaurant clears
//! the existing cart first.

use shared::client::CreateOrderRequest;
use shared::models::order::{Fulfillment, OrderItem};

/// In-memory cart, scoped to a single restaurant
#[derive(Debug, Clone, Default)]
pub struct Cart {
    restaurant_id: Option<String>,
    items: Vec<OrderItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line item for the given restaurant.
    ///
    /// Switching restaurants clears the cart and adopts the new scope.
    /// Identical items stay as separate lines (no merge). A zero quantity
    /// means the caller did not specify one and defaults to 1.
    pub fn add_item(&mut self, restaurant_id: &str, mut item: OrderItem) {
        if self.restaurant_id.as_deref() != Some(restaurant_id) {
            if self.restaurant_id.is_some() {
                tracing::debug!(
                    restaurant_id = %restaurant_id,
                    "Cart scope changed, clearing existing items"
                );
            }
            self.items.clear();
            self.restaurant_id = Some(restaurant_id.to_string());
        }

        if item.quantity == 0 {
            item.quantity = 1;
        }
        self.items.push(item);
    }

    /// Remove every line matching the menu item id
    pub fn remove_item(&mut self, menu_item_id: &str) {
        self.items.retain(|line| line.menu_item_id != menu_item_id);
    }

    /// Set the quantity on every line matching the menu item id.
    ///
    /// The container does not clamp; callers keep quantities >= 1.
    pub fn set_quantity(&mut self, menu_item_id: &str, quantity: i32) {
        for line in self
            .items
            .iter_mut()
            .filter(|line| line.menu_item_id == menu_item_id)
        {
            line.quantity = quantity;
        }
    }

    /// Empty the cart and unset the restaurant scope
    pub fn clear(&mut self) {
        self.items.clear();
        self.restaurant_id = None;
    }

    /// Restaurant the cart is currently scoped to
    pub fn restaurant_id(&self) -> Option<&str> {
        self.restaurant_id.as_deref()
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Cart total in currency unit (unit prices already include modifier
    /// surcharges)
    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .map(|line| line.price * line.quantity as f64)
            .sum()
    }

    /// Build the checkout payload, or `None` for an empty/unscoped cart
    pub fn checkout_request(
        &self,
        fulfillment: Fulfillment,
        address_id: Option<String>,
    ) -> Option<CreateOrderRequest> {
        let restaurant_id = self.restaurant_id.clone()?;
        if self.items.is_empty() {
            return None;
        }

        Some(CreateOrderRequest {
            restaurant_id,
            items: self.items.clone(),
            fulfillment,
            address_id,
        })
    }
}
