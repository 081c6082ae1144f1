use crate::channel::transport::{MemoryTransport, TcpTransport, Transport};
use crate::channel::{ChannelConfig, ChannelError, ConnectionStatus};
use shared::channel::{ChannelCommand, ChannelFrame, ChannelKind, PushEvent};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::{RwLock, broadcast, watch};
use uuid::Uuid;

type Handler = Arc<dyn Fn(PushEvent) + Send + Sync>;

struct SubscriptionEntry {
    channel: ChannelKind,
    scope: String,
    handler: Handler,
}

type SubscriptionMap = Arc<Mutex<HashMap<Uuid, SubscriptionEntry>>>;

#[derive(Debug, Clone)]
enum ClientTransport {
    Tcp(TcpTransport),
    Memory(MemoryTransport),
}

impl ClientTransport {
    async fn read_frame(&self) -> Result<ChannelFrame, ChannelError> {
        match self {
            ClientTransport::Tcp(t) => t.read_frame().await,
            ClientTransport::Memory(t) => t.read_frame().await,
        }
    }

    async fn write_command(&self, cmd: &ChannelCommand) -> Result<(), ChannelError> {
        match self {
            ClientTransport::Tcp(t) => t.write_command(cmd).await,
            ClientTransport::Memory(t) => t.write_command(cmd).await,
        }
    }

    async fn close(&self) -> Result<(), ChannelError> {
        match self {
            ClientTransport::Tcp(t) => t.close().await,
            ClientTransport::Memory(t) => t.close().await,
        }
    }
}

/// Channel Client
///
/// One connection to the push gateway shared by every subscription.
/// A background task reads frames and delivers each one, in arrival
/// order, to the handlers whose channel + scope match.
///
/// On transport drop the client retries the connection with a fixed
/// delay (TCP only). Subscriptions are not replayed on reconnect -
/// callers watch [`ConnectionStatus`] and re-subscribe.
#[derive(Clone)]
pub struct ChannelClient {
    transport: Arc<RwLock<ClientTransport>>,
    subscriptions: SubscriptionMap,
    status_rx: watch::Receiver<ConnectionStatus>,
}

impl ChannelClient {
    /// Connect to the push gateway over TCP
    pub async fn connect(addr: &str) -> Result<Self, ChannelError> {
        Self::connect_with_config(addr, ChannelConfig::default()).await
    }

    /// Connect over TCP with explicit reconnect settings
    pub async fn connect_with_config(
        addr: &str,
        config: ChannelConfig,
    ) -> Result<Self, ChannelError> {
        let transport = TcpTransport::connect(addr).await?;
        Ok(Self::new(
            ClientTransport::Tcp(transport),
            Some(addr.to_string()),
            config,
        ))
    }

    /// Create an in-process client (for tests)
    pub fn memory(
        gateway_tx: &broadcast::Sender<ChannelFrame>,
        command_tx: &broadcast::Sender<ChannelCommand>,
    ) -> Self {
        let transport = MemoryTransport::new(gateway_tx, command_tx);
        Self::new(
            ClientTransport::Memory(transport),
            None,
            ChannelConfig::default(),
        )
    }

    fn new(
        transport: ClientTransport,
        reconnect_addr: Option<String>,
        config: ChannelConfig,
    ) -> Self {
        let (status_tx, status_rx) = watch::channel(ConnectionStatus::Connected);
        let transport = Arc::new(RwLock::new(transport));
        let subscriptions: SubscriptionMap = Arc::new(Mutex::new(HashMap::new()));

        let client = Self {
            transport: transport.clone(),
            subscriptions: subscriptions.clone(),
            status_rx,
        };

        // Background task: read frames and dispatch to matching handlers
        tokio::spawn(async move {
            loop {
                let current = transport.read().await.clone();
                match current.read_frame().await {
                    Ok(frame) => {
                        Self::dispatch(&subscriptions, frame);
                    }
                    Err(ChannelError::InvalidFrame(e)) => {
                        // Malformed pushes are dropped, never fatal
                        tracing::warn!("Dropping malformed frame: {}", e);
                    }
                    Err(e) => {
                        tracing::error!("Transport read error: {}", e);
                        let reconnected = match &reconnect_addr {
                            Some(addr) => {
                                Self::reconnect(addr, &config, &transport, &status_tx).await
                            }
                            None => false,
                        };
                        if !reconnected {
                            let _ = status_tx.send(ConnectionStatus::Disconnected);
                            break;
                        }
                    }
                }
            }
        });

        client
    }

    fn dispatch(subscriptions: &SubscriptionMap, frame: ChannelFrame) {
        let handlers: Vec<Handler> = {
            let subs = subscriptions.lock().unwrap();
            subs.values()
                .filter(|s| s.channel == frame.channel && s.scope == frame.scope)
                .map(|s| s.handler.clone())
                .collect()
        };

        if handlers.is_empty() {
            tracing::debug!(
                channel = %frame.channel,
                scope = %frame.scope,
                "No subscribers for frame"
            );
            return;
        }

        // Handlers run outside the registry lock so they may themselves
        // subscribe or unsubscribe
        for handler in handlers {
            handler(frame.event.clone());
        }
    }

    async fn reconnect(
        addr: &str,
        config: &ChannelConfig,
        transport: &Arc<RwLock<ClientTransport>>,
        status_tx: &watch::Sender<ConnectionStatus>,
    ) -> bool {
        for attempt in 1..=config.max_reconnect_attempts {
            let _ = status_tx.send(ConnectionStatus::Reconnecting { attempt });
            tracing::warn!(
                "Connection lost, reconnecting (attempt {}/{})",
                attempt,
                config.max_reconnect_attempts
            );

            tokio::time::sleep(config.reconnect_delay).await;

            match TcpTransport::connect(addr).await {
                Ok(t) => {
                    *transport.write().await = ClientTransport::Tcp(t);
                    let _ = status_tx.send(ConnectionStatus::Connected);
                    tracing::info!("Reconnected successfully");
                    return true;
                }
                Err(e) => {
                    tracing::error!("Reconnect failed: {}", e);
                }
            }
        }

        tracing::error!("Max reconnect attempts exceeded");
        false
    }

    /// Register a handler for every event on `channel` scoped by `scope`.
    ///
    /// Events are delivered in arrival order from the dispatch task. The
    /// returned handle stops delivery on [`SubscriptionHandle::unsubscribe`]
    /// or on drop.
    pub async fn subscribe<F>(
        &self,
        channel: ChannelKind,
        scope: impl Into<String>,
        handler: F,
    ) -> Result<SubscriptionHandle, ChannelError>
    where
        F: Fn(PushEvent) + Send + Sync + 'static,
    {
        let scope = scope.into();
        let id = Uuid::new_v4();

        {
            let mut subs = self.subscriptions.lock().unwrap();
            subs.insert(
                id,
                SubscriptionEntry {
                    channel,
                    scope: scope.clone(),
                    handler: Arc::new(handler),
                },
            );
        }

        // Tell the gateway; roll back the registration on failure
        let cmd = ChannelCommand::Subscribe {
            channel,
            scope: scope.clone(),
        };
        let current = self.transport.read().await.clone();
        if let Err(e) = current.write_command(&cmd).await {
            self.subscriptions.lock().unwrap().remove(&id);
            return Err(e);
        }

        Ok(SubscriptionHandle {
            id,
            channel,
            scope,
            subscriptions: self.subscriptions.clone(),
            transport: self.transport.clone(),
        })
    }

    /// Watch the connection state
    pub fn status(&self) -> watch::Receiver<ConnectionStatus> {
        self.status_rx.clone()
    }

    /// Number of live subscriptions
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.lock().unwrap().len()
    }

    /// Close the client connection
    pub async fn close(&self) -> Result<(), ChannelError> {
        let current = self.transport.read().await.clone();
        current.close().await
    }
}

/// Handle for one channel subscription
///
/// Owned by whoever created it; dropping it (or calling `unsubscribe`)
/// stops delivery immediately. Handles are never stored globally.
pub struct SubscriptionHandle {
    id: Uuid,
    channel: ChannelKind,
    scope: String,
    subscriptions: SubscriptionMap,
    transport: Arc<RwLock<ClientTransport>>,
}

impl SubscriptionHandle {
    pub fn channel(&self) -> ChannelKind {
        self.channel
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Stop delivery now and notify the gateway in the background
    pub fn unsubscribe(self) {
        self.subscriptions.lock().unwrap().remove(&self.id);

        let transport = self.transport.clone();
        let cmd = ChannelCommand::Unsubscribe {
            channel: self.channel,
            scope: self.scope.clone(),
        };
        tokio::spawn(async move {
            let current = transport.read().await.clone();
            if let Err(e) = current.write_command(&cmd).await {
                tracing::debug!("Unsubscribe notify failed: {}", e);
            }
        });
    }
}

impl Drop for SubscriptionHandle {
    fn drop(&mut self) {
        // Idempotent; also covers the tail end of an explicit unsubscribe
        self.subscriptions.lock().unwrap().remove(&self.id);
    }
}
