//! Order Feed Example
//!
//! Demonstrates the poll + push coordination flow against an in-process
//! gateway: a poller fills the feed, push events update it, and the
//! reconciliation rules keep the list deduplicated.
//!
//! Run: cargo run --example order_feed

use async_trait::async_trait;
use savora_client::{ChannelClient, ClientResult, OrderFeed, OrderPoller, OrderSource};
use shared::channel::{ChannelFrame, ChannelKind, PushEvent};
use shared::models::order::{Fulfillment, Order, OrderStatus};
use std::time::Duration;
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;

struct DemoBackend;

#[async_trait]
impl OrderSource for DemoBackend {
    async fn fetch_orders(&self) -> ClientResult<Vec<Order>> {
        Ok(vec![Order {
            id: "order-42".to_string(),
            status: OrderStatus::Approved,
            restaurant_id: "rest-1".to_string(),
            restaurant_name: Some("Casa Lupe".to_string()),
            items: vec![],
            total: 23.5,
            fulfillment: Fulfillment::Delivery,
            address_id: Some("addr-1".to_string()),
            created_at: None,
            updated_at: None,
        }])
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // In-process gateway standing in for the backend push service
    let (gateway_tx, _keep) = broadcast::channel(16);
    let (command_tx, mut command_rx) = broadcast::channel(16);
    let client = ChannelClient::memory(&gateway_tx, &command_tx);

    let feed = OrderFeed::new();

    // Push events flow straight into the feed
    let push_feed = feed.clone();
    let subscription = client
        .subscribe(ChannelKind::Order, "order-42", move |event| {
            push_feed.apply_push(&event)
        })
        .await?;
    println!("Subscribed: {:?}", command_rx.recv().await?);

    // Polling fills the feed with the authoritative list
    let cancel = CancellationToken::new();
    let poller = OrderPoller::spawn(
        DemoBackend,
        feed.clone(),
        Duration::from_secs(1),
        cancel.clone(),
    );

    tokio::time::sleep(Duration::from_millis(300)).await;
    println!("After poll: {:?}", feed.orders());

    // The driver picks the order up - pushed status lands immediately
    gateway_tx.send(ChannelFrame::new(
        ChannelKind::Order,
        "order-42",
        PushEvent::StatusUpdate {
            order_id: "order-42".to_string(),
            status: OrderStatus::PickedUp,
        },
    ))?;

    tokio::time::sleep(Duration::from_millis(100)).await;
    println!(
        "After push: {:?}",
        feed.orders().first().map(|o| o.status)
    );

    // Screen teardown: stop polling, drop the subscription
    poller.stop().await;
    subscription.unsubscribe();
    client.close().await?;

    Ok(())
}
