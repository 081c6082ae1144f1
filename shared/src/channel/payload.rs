use serde::{Deserialize, Serialize};

use crate::models::conversation::ChatMessage;
use crate::models::order::{Order, OrderStatus};

/// Push event payload, discriminated by the `event` field
///
/// The source payloads were duck-typed JSON interpreted per channel
/// (`{order: ...}`, `{new_order: ...}`); here every shape carries an
/// explicit discriminator and is validated on receipt. Frames that do
/// not parse are dropped by the dispatch loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PushEvent {
    /// A newly created order (RestaurantChannel / PartnerChannel)
    NewOrder { order: Order },

    /// Status change for an existing order (OrderChannel / PartnerChannel)
    StatusUpdate {
        order_id: String,
        status: OrderStatus,
    },

    /// Incoming chat message (ChatChannel)
    ChatMessage { message: ChatMessage },

    /// Driver position update while an order is out for delivery (OrderChannel)
    PartnerLocation {
        order_id: String,
        lat: f64,
        lng: f64,
    },
}
