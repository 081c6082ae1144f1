//! Restaurant and menu endpoints

use crate::{ClientResult, HttpClient};
use shared::client::ApiResponse;
use shared::models::restaurant::{MenuItem, Restaurant};

/// Restaurant browsing endpoints (no role gating, reachable as guest)
#[derive(Debug, Clone)]
pub struct RestaurantService {
    http: HttpClient,
}

impl RestaurantService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn list_restaurants(&self) -> ClientResult<Vec<Restaurant>> {
        Ok(self
            .http
            .get::<ApiResponse<Vec<Restaurant>>>("api/restaurants")
            .await?
            .data
            .unwrap_or_default())
    }

    pub async fn menu_items(&self, restaurant_id: &str) -> ClientResult<Vec<MenuItem>> {
        let path = format!("api/restaurants/{}/menu_items", restaurant_id);
        Ok(self
            .http
            .get::<ApiResponse<Vec<MenuItem>>>(&path)
            .await?
            .data
            .unwrap_or_default())
    }
}
