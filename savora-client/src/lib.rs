//! Savora Client - client SDK for the Savora delivery platform
//!
//! Provides session persistence, authenticated HTTP calls to the backend
//! API, the cart container, real-time channel subscriptions, and the
//! poll+push order feed.

pub mod cart;
pub mod channel;
pub mod config;
pub mod error;
pub mod feed;
pub mod http;
pub mod services;
pub mod session;

pub use cart::Cart;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use session::{SessionPatch, SessionStore};

// Re-export shared types for convenience
pub use shared::client::{ApiResponse, CreateOrderRequest, LoginResponse, UserInfo};
pub use shared::models::{Order, OrderStatus, Role, Session};

// Channel types and clients
pub use channel::{ChannelClient, ChannelConfig, ChannelError, ConnectionStatus, SubscriptionHandle};
pub use shared::channel::{ChannelFrame, ChannelKind, PushEvent};

// Order feed and polling
pub use feed::{OrderFeed, OrderPoller, OrderSource, PollerHandle};
