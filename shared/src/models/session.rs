//! Session Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// User role, determines which services and channels are reachable
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Guest,
    Customer,
    /// Delivery driver
    Partner,
    RestaurantOwner,
    Admin,
}

impl Role {
    /// Whether this role receives the partner order queue.
    pub fn is_partner(&self) -> bool {
        matches!(self, Role::Partner)
    }

    /// Whether this role receives incoming restaurant orders.
    pub fn is_restaurant_owner(&self) -> bool {
        matches!(self, Role::RestaurantOwner)
    }

    /// Whether this role is authenticated at all.
    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Role::Guest)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Guest => write!(f, "guest"),
            Role::Customer => write!(f, "customer"),
            Role::Partner => write!(f, "partner"),
            Role::RestaurantOwner => write!(f, "restaurant_owner"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

/// Client session state, persisted between launches
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    /// Bearer token, absent in guest mode
    pub token: Option<String>,
    pub role: Role,
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    /// Partner availability toggle (delivery drivers only)
    #[serde(default)]
    pub partner_active: bool,
    /// Whether the onboarding flow has been completed
    #[serde(default)]
    pub onboarded: bool,
    /// Last selected delivery location label
    pub selected_location: Option<String>,
}

impl Session {
    /// Default guest session — no token, no identity.
    pub fn guest() -> Self {
        Self {
            token: None,
            role: Role::Guest,
            user_id: None,
            name: None,
            email: None,
            partner_active: false,
            onboarded: false,
            selected_location: None,
        }
    }

    /// Whether a token is present.
    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::guest()
    }
}
