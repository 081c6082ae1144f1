//! Cancellable order polling
//!
//! The polling loop is bound to a cancellation token owned by whoever
//! spawned it; tearing down a screen cancels the token and the loop
//! terminates. No interval ids or task handles live in globals.

use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::feed::OrderFeed;
use crate::services::OrderService;
use crate::{ClientResult, Role};
use shared::models::order::Order;

/// Source of polled order lists
#[async_trait]
pub trait OrderSource: Send + Sync {
    async fn fetch_orders(&self) -> ClientResult<Vec<Order>>;
}

#[async_trait]
impl OrderSource for OrderService {
    /// Fetch the order list appropriate to the bound role
    async fn fetch_orders(&self) -> ClientResult<Vec<Order>> {
        match self.role() {
            Role::Partner => self.partner_pending_orders().await,
            Role::RestaurantOwner => self.new_restaurant_orders().await,
            _ => self.list_orders().await,
        }
    }
}

/// Spawns and owns the polling loop
pub struct OrderPoller;

impl OrderPoller {
    /// Start polling `source` into `feed` every `interval`.
    ///
    /// The loop checks `cancel` before each iteration; a failed poll
    /// leaves the feed untouched, publishes the error on the handle's
    /// watch channel, and the loop keeps going.
    pub fn spawn<S>(
        source: S,
        feed: OrderFeed,
        interval: Duration,
        cancel: CancellationToken,
    ) -> PollerHandle
    where
        S: OrderSource + 'static,
    {
        let (error_tx, error_rx) = watch::channel(None);
        let token = cancel.clone();

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);

            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => {}
                }

                match source.fetch_orders().await {
                    Ok(orders) => {
                        feed.apply_poll(orders);
                        error_tx.send_replace(None);
                    }
                    Err(e) => {
                        // Keep the existing list; the error is retryable
                        tracing::warn!("Order poll failed: {}", e);
                        error_tx.send_replace(Some(e.to_string()));
                    }
                }
            }

            tracing::debug!("Order polling stopped");
        });

        PollerHandle {
            cancel,
            task,
            error_rx,
        }
    }
}

/// Handle to a running polling loop
pub struct PollerHandle {
    cancel: CancellationToken,
    task: JoinHandle<()>,
    error_rx: watch::Receiver<Option<String>>,
}

impl PollerHandle {
    /// Watch the most recent poll error; `None` after a successful poll
    pub fn last_error(&self) -> watch::Receiver<Option<String>> {
        self.error_rx.clone()
    }

    /// Cancel the loop and wait for it to finish
    pub async fn stop(self) {
        self.cancel.cancel();
        let _ = self.task.await;
    }
}
