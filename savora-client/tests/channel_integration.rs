// savora-client/tests/channel_integration.rs
// Channel client against in-memory and TCP transports

use savora_client::{ChannelClient, ChannelConfig, ConnectionStatus};
use shared::channel::{ChannelCommand, ChannelFrame, ChannelKind, PushEvent};
use shared::models::order::{Fulfillment, Order, OrderStatus};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::broadcast;

fn order(id: &str, status: OrderStatus) -> Order {
    Order {
        id: id.to_string(),
        status,
        restaurant_id: "rest-1".to_string(),
        restaurant_name: None,
        items: vec![],
        total: 10.0,
        fulfillment: Fulfillment::Delivery,
        address_id: None,
        created_at: None,
        updated_at: None,
    }
}

fn status_frame(scope: &str, order_id: &str, status: OrderStatus) -> ChannelFrame {
    ChannelFrame::new(
        ChannelKind::Order,
        scope,
        PushEvent::StatusUpdate {
            order_id: order_id.to_string(),
            status,
        },
    )
}

#[tokio::test]
async fn test_memory_subscribe_and_dispatch() {
    let (gateway_tx, _keep) = broadcast::channel(16);
    let (command_tx, mut command_rx) = broadcast::channel(16);
    let client = ChannelClient::memory(&gateway_tx, &command_tx);

    let received = Arc::new(Mutex::new(Vec::new()));
    let sink = received.clone();
    let _handle = client
        .subscribe(ChannelKind::Order, "order-1", move |event| {
            sink.lock().unwrap().push(event);
        })
        .await
        .unwrap();

    // The gateway was told about the subscription
    let cmd = command_rx.recv().await.unwrap();
    assert_eq!(
        cmd,
        ChannelCommand::Subscribe {
            channel: ChannelKind::Order,
            scope: "order-1".to_string(),
        }
    );

    // Matching frame is delivered, non-matching scope is filtered out
    gateway_tx
        .send(status_frame("order-1", "order-1", OrderStatus::Approved))
        .unwrap();
    gateway_tx
        .send(status_frame("order-2", "order-2", OrderStatus::Canceled))
        .unwrap();

    tokio::time::sleep(Duration::from_millis(50)).await;

    let events = received.lock().unwrap().clone();
    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0],
        PushEvent::StatusUpdate {
            order_id: "order-1".to_string(),
            status: OrderStatus::Approved,
        }
    );
}

#[tokio::test]
async fn test_memory_delivery_preserves_arrival_order() {
    let (gateway_tx, _keep) = broadcast::channel(16);
    let (command_tx, _command_rx) = broadcast::channel(16);
    let client = ChannelClient::memory(&gateway_tx, &command_tx);

    let received = Arc::new(Mutex::new(Vec::new()));
    let sink = received.clone();
    let _handle = client
        .subscribe(ChannelKind::Order, "order-1", move |event| {
            sink.lock().unwrap().push(event);
        })
        .await
        .unwrap();

    for status in [
        OrderStatus::Approved,
        OrderStatus::PickedUp,
        OrderStatus::Delivered,
    ] {
        gateway_tx
            .send(status_frame("order-1", "order-1", status))
            .unwrap();
    }

    tokio::time::sleep(Duration::from_millis(50)).await;

    let statuses: Vec<OrderStatus> = received
        .lock()
        .unwrap()
        .iter()
        .map(|event| match event {
            PushEvent::StatusUpdate { status, .. } => *status,
            other => panic!("unexpected event: {:?}", other),
        })
        .collect();
    assert_eq!(
        statuses,
        vec![
            OrderStatus::Approved,
            OrderStatus::PickedUp,
            OrderStatus::Delivered
        ]
    );
}

#[tokio::test]
async fn test_unsubscribe_stops_delivery() {
    let (gateway_tx, _keep) = broadcast::channel(16);
    let (command_tx, mut command_rx) = broadcast::channel(16);
    let client = ChannelClient::memory(&gateway_tx, &command_tx);

    let received = Arc::new(Mutex::new(Vec::new()));
    let sink = received.clone();
    let handle = client
        .subscribe(ChannelKind::Restaurant, "rest-1", move |event| {
            sink.lock().unwrap().push(event);
        })
        .await
        .unwrap();
    assert_eq!(client.subscription_count(), 1);

    handle.unsubscribe();
    assert_eq!(client.subscription_count(), 0);

    gateway_tx
        .send(ChannelFrame::new(
            ChannelKind::Restaurant,
            "rest-1",
            PushEvent::NewOrder {
                order: order("10", OrderStatus::PendingApproval),
            },
        ))
        .unwrap();

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(received.lock().unwrap().is_empty());

    // Subscribe then unsubscribe both reached the gateway
    let first = command_rx.recv().await.unwrap();
    assert!(matches!(first, ChannelCommand::Subscribe { .. }));
    let second = command_rx.recv().await.unwrap();
    assert_eq!(
        second,
        ChannelCommand::Unsubscribe {
            channel: ChannelKind::Restaurant,
            scope: "rest-1".to_string(),
        }
    );
}

#[tokio::test]
async fn test_dropping_handle_stops_delivery() {
    let (gateway_tx, _keep) = broadcast::channel(16);
    let (command_tx, _command_rx) = broadcast::channel(16);
    let client = ChannelClient::memory(&gateway_tx, &command_tx);

    let handle = client
        .subscribe(ChannelKind::Partner, "user-1", |_event| {})
        .await
        .unwrap();
    assert_eq!(client.subscription_count(), 1);

    drop(handle);
    assert_eq!(client.subscription_count(), 0);
}

async fn write_raw(sock: &mut tokio::net::TcpStream, payload: &[u8]) {
    sock.write_all(&(payload.len() as u32).to_le_bytes())
        .await
        .unwrap();
    sock.write_all(payload).await.unwrap();
}

#[tokio::test]
async fn test_tcp_malformed_frame_is_dropped_not_fatal() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = tokio::spawn(async move {
        let (mut sock, _) = listener.accept().await.unwrap();

        // Consume the subscribe command
        let mut len_buf = [0u8; 4];
        sock.read_exact(&mut len_buf).await.unwrap();
        let mut buf = vec![0u8; u32::from_le_bytes(len_buf) as usize];
        sock.read_exact(&mut buf).await.unwrap();
        let cmd = ChannelCommand::from_bytes(&buf).unwrap();
        assert!(matches!(cmd, ChannelCommand::Subscribe { .. }));

        // A frame that does not parse, followed by a valid one
        write_raw(&mut sock, br#"{"not":"a frame"}"#).await;
        let valid = status_frame("order-1", "order-1", OrderStatus::Delivered)
            .to_bytes()
            .unwrap();
        write_raw(&mut sock, &valid).await;

        // Keep the connection open until the client has dispatched
        tokio::time::sleep(Duration::from_millis(300)).await;
    });

    let client = ChannelClient::connect(&addr.to_string()).await.unwrap();
    let received = Arc::new(Mutex::new(Vec::new()));
    let sink = received.clone();
    let _handle = client
        .subscribe(ChannelKind::Order, "order-1", move |event| {
            sink.lock().unwrap().push(event);
        })
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(150)).await;

    // The malformed frame was skipped and the valid one still arrived
    let events = received.lock().unwrap().clone();
    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0],
        PushEvent::StatusUpdate {
            order_id: "order-1".to_string(),
            status: OrderStatus::Delivered,
        }
    );

    server.await.unwrap();
}

#[tokio::test]
async fn test_tcp_reconnects_after_drop() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = tokio::spawn(async move {
        // First connection is dropped immediately
        let (sock, _) = listener.accept().await.unwrap();
        drop(sock);

        // The client comes back after its fixed delay
        let (sock2, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_millis(300)).await;
        drop(sock2);
    });

    let config = ChannelConfig::new()
        .with_reconnect_delay(Duration::from_millis(30))
        .with_max_reconnect_attempts(3);
    let client = ChannelClient::connect_with_config(&addr.to_string(), config)
        .await
        .unwrap();

    let mut status = client.status();
    tokio::time::timeout(Duration::from_secs(2), async {
        loop {
            status.changed().await.unwrap();
            if *status.borrow() == ConnectionStatus::Connected {
                break;
            }
        }
    })
    .await
    .expect("client never reconnected");

    server.await.unwrap();
}

#[tokio::test]
async fn test_tcp_gives_up_after_max_attempts() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let config = ChannelConfig::new()
        .with_reconnect_delay(Duration::from_millis(10))
        .with_max_reconnect_attempts(1);
    let client = ChannelClient::connect_with_config(&addr.to_string(), config)
        .await
        .unwrap();

    // Drop the accepted connection and stop listening entirely
    let (sock, _) = listener.accept().await.unwrap();
    drop(sock);
    drop(listener);

    let mut status = client.status();
    tokio::time::timeout(Duration::from_secs(2), async {
        loop {
            status.changed().await.unwrap();
            if *status.borrow() == ConnectionStatus::Disconnected {
                break;
            }
        }
    })
    .await
    .expect("client never gave up");
}
