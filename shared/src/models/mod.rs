//! Domain models shared between the backend API and the client SDK

pub mod address;
pub mod conversation;
pub mod order;
pub mod restaurant;
pub mod session;

pub use address::Address;
pub use conversation::{ChatMessage, Conversation, MessageSide};
pub use order::{Fulfillment, Order, OrderItem, OrderItemModifier, OrderStatus};
pub use restaurant::{MenuItem, ModifierGroup, ModifierOption, Restaurant};
pub use session::{Role, Session};
