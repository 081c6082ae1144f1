use async_trait::async_trait;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::sync::{Mutex, broadcast};

use crate::channel::ChannelError;
use shared::channel::{ChannelCommand, ChannelFrame};

/// Transport abstraction for channel communication
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    async fn read_frame(&self) -> Result<ChannelFrame, ChannelError>;
    async fn write_command(&self, cmd: &ChannelCommand) -> Result<(), ChannelError>;
    async fn close(&self) -> Result<(), ChannelError>;
}

/// TCP Transport Implementation
///
/// Frames are length-prefixed JSON: 4-byte LE payload length followed by
/// the serialized frame, in both directions.
#[derive(Debug, Clone)]
pub struct TcpTransport {
    reader: Arc<Mutex<OwnedReadHalf>>,
    writer: Arc<Mutex<OwnedWriteHalf>>,
}

impl TcpTransport {
    pub async fn connect(addr: &str) -> Result<Self, ChannelError> {
        let stream = TcpStream::connect(addr)
            .await
            .map_err(|e| ChannelError::Connection(e.to_string()))?;
        let (reader, writer) = stream.into_split();
        Ok(Self {
            reader: Arc::new(Mutex::new(reader)),
            writer: Arc::new(Mutex::new(writer)),
        })
    }
}

#[async_trait]
impl Transport for TcpTransport {
    async fn read_frame(&self) -> Result<ChannelFrame, ChannelError> {
        let mut reader = self.reader.lock().await;

        // Read payload length (4 bytes)
        let mut len_buf = [0u8; 4];
        reader
            .read_exact(&mut len_buf)
            .await
            .map_err(ChannelError::Io)?;

        let len = u32::from_le_bytes(len_buf) as usize;

        // Read payload
        let mut payload = vec![0u8; len];
        reader
            .read_exact(&mut payload)
            .await
            .map_err(ChannelError::Io)?;

        ChannelFrame::from_bytes(&payload).map_err(|e| ChannelError::InvalidFrame(e.to_string()))
    }

    async fn write_command(&self, cmd: &ChannelCommand) -> Result<(), ChannelError> {
        let payload = cmd
            .to_bytes()
            .map_err(|e| ChannelError::InvalidFrame(e.to_string()))?;

        let mut writer = self.writer.lock().await;
        let mut data = Vec::with_capacity(4 + payload.len());
        data.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        data.extend_from_slice(&payload);

        writer.write_all(&data).await.map_err(ChannelError::Io)?;
        Ok(())
    }

    async fn close(&self) -> Result<(), ChannelError> {
        // Dropping the Arc references will eventually close the stream
        Ok(())
    }
}

/// Memory Transport Implementation (for in-process tests)
#[derive(Debug, Clone)]
pub struct MemoryTransport {
    /// Receiver for frames FROM the gateway
    rx: Arc<Mutex<broadcast::Receiver<ChannelFrame>>>,
    /// Sender for commands TO the gateway
    tx: broadcast::Sender<ChannelCommand>,
}

impl MemoryTransport {
    /// Create a new memory transport
    ///
    /// # Arguments
    /// * `gateway_tx` - The gateway's broadcast sender (to receive pushes)
    /// * `command_tx` - The channel carrying commands to the gateway
    pub fn new(
        gateway_tx: &broadcast::Sender<ChannelFrame>,
        command_tx: &broadcast::Sender<ChannelCommand>,
    ) -> Self {
        Self {
            rx: Arc::new(Mutex::new(gateway_tx.subscribe())),
            tx: command_tx.clone(),
        }
    }
}

#[async_trait]
impl Transport for MemoryTransport {
    async fn read_frame(&self) -> Result<ChannelFrame, ChannelError> {
        let mut rx = self.rx.lock().await;
        rx.recv()
            .await
            .map_err(|e| ChannelError::Connection(format!("Memory channel error: {}", e)))
    }

    async fn write_command(&self, cmd: &ChannelCommand) -> Result<(), ChannelError> {
        self.tx
            .send(cmd.clone())
            .map_err(|e| ChannelError::Connection(format!("Failed to send to gateway: {}", e)))?;
        Ok(())
    }

    async fn close(&self) -> Result<(), ChannelError> {
        Ok(())
    }
}
