//! Address endpoints

use crate::{ClientError, ClientResult, HttpClient};
use shared::client::ApiResponse;
use shared::models::address::{Address, AddressCreate};
use shared::models::session::Role;

/// Saved delivery addresses for the signed-in user
#[derive(Debug, Clone)]
pub struct LocationService {
    http: HttpClient,
    role: Role,
}

impl LocationService {
    pub fn new(http: HttpClient, role: Role) -> Self {
        Self { http, role }
    }

    pub async fn list_addresses(&self) -> ClientResult<Vec<Address>> {
        if !self.role.is_authenticated() {
            return Ok(Vec::new());
        }

        Ok(self
            .http
            .get::<ApiResponse<Vec<Address>>>("api/addresses")
            .await?
            .data
            .unwrap_or_default())
    }

    pub async fn create_address(&self, request: &AddressCreate) -> ClientResult<Address> {
        self.http
            .post::<ApiResponse<Address>, _>("api/addresses", request)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing address data".to_string()))
    }
}
