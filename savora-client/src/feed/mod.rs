//! Order feed
//!
//! Merges polled order lists and channel push events into one
//! deduplicated, in-memory order list per role.
//!
//! Reconciliation rules:
//! 1. A poll result is authoritative for full order records - same-id
//!    entries are overwritten in place, unseen ids are appended.
//! 2. A pushed new order is prepended when its id is absent, ignored
//!    when present (the next poll refreshes it).
//! 3. A pushed status update touches only the status of a matching id;
//!    unknown ids are ignored until a poll picks them up.

mod poller;

pub use poller::{OrderPoller, OrderSource, PollerHandle};

use shared::channel::PushEvent;
use shared::models::order::Order;
use std::sync::{Arc, Mutex};

/// Shared, id-deduplicated order list
///
/// Cheaply cloneable; clones share the same underlying list.
#[derive(Debug, Clone, Default)]
pub struct OrderFeed {
    inner: Arc<Mutex<Vec<Order>>>,
}

impl OrderFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a poll result. Idempotent: applying the same result twice
    /// leaves the list unchanged.
    pub fn apply_poll(&self, fetched: Vec<Order>) {
        let mut orders = self.inner.lock().unwrap();
        for order in fetched {
            match orders.iter().position(|o| o.id == order.id) {
                Some(pos) => orders[pos] = order,
                None => orders.push(order),
            }
        }
    }

    /// Apply one push event. Events that do not concern the order list
    /// (chat, driver location) are ignored.
    pub fn apply_push(&self, event: &PushEvent) {
        match event {
            PushEvent::NewOrder { order } => {
                let mut orders = self.inner.lock().unwrap();
                if orders.iter().any(|o| o.id == order.id) {
                    // Already known; the next poll carries the full record
                    tracing::debug!(order_id = %order.id, "Pushed order already in feed");
                } else {
                    orders.insert(0, order.clone());
                }
            }
            PushEvent::StatusUpdate { order_id, status } => {
                let mut orders = self.inner.lock().unwrap();
                match orders.iter_mut().find(|o| o.id == *order_id) {
                    Some(order) => order.status = *status,
                    None => {
                        tracing::debug!(
                            order_id = %order_id,
                            "Status update for unknown order, waiting for poll"
                        );
                    }
                }
            }
            PushEvent::ChatMessage { .. } | PushEvent::PartnerLocation { .. } => {}
        }
    }

    /// Snapshot of the current list
    pub fn orders(&self) -> Vec<Order> {
        self.inner.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().is_empty()
    }
}
