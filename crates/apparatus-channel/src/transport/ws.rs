//! WebSocket transport over `tokio-tungstenite`

use async_trait::async_trait;
use futures::stream::{SplitSink, SplitStream};
use futures::{SinkExt, StreamExt};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::net::TcpStream;
use tokio::sync::Mutex;
use tokio_tungstenite::tungstenite::{Error as WsError, Message};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tracing::debug;
use url::Url;

use crate::error::TransportError;
use crate::transport::{Connector, SharedTransport, Transport};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Dials WebSocket endpoints
#[derive(Debug, Clone, Default)]
pub struct WsConnector;

#[async_trait]
impl Connector for WsConnector {
    async fn connect(&self, endpoint: &str) -> Result<SharedTransport, TransportError> {
        let url = Url::parse(endpoint)
            .map_err(|e| TransportError::ConnectionFailed(format!("invalid endpoint: {}", e)))?;

        debug!(endpoint = %url, "dialing websocket");
        let (stream, _response) = connect_async(url.as_str())
            .await
            .map_err(|e| TransportError::ConnectionFailed(e.to_string()))?;

        Ok(Arc::new(WsTransport::new(stream)))
    }
}

/// A connected WebSocket.
///
/// The sink and stream halves sit behind separate locks so a send and the
/// receive loop never contend; WebSocket framing guarantees a written
/// frame is delivered whole.
#[derive(Debug)]
pub struct WsTransport {
    writer: Mutex<SplitSink<WsStream, Message>>,
    reader: Mutex<SplitStream<WsStream>>,
    open: AtomicBool,
}

impl WsTransport {
    pub fn new(stream: WsStream) -> Self {
        let (writer, reader) = stream.split();
        Self {
            writer: Mutex::new(writer),
            reader: Mutex::new(reader),
            open: AtomicBool::new(true),
        }
    }

    fn map_ws_error(&self, error: WsError) -> TransportError {
        self.open.store(false, Ordering::SeqCst);
        match error {
            WsError::ConnectionClosed | WsError::AlreadyClosed => TransportError::Closed,
            WsError::Io(e) => TransportError::Io(e),
            other => TransportError::WebSocket(other.to_string()),
        }
    }
}

#[async_trait]
impl Transport for WsTransport {
    async fn send_frame(&self, frame: String) -> Result<(), TransportError> {
        let mut writer = self.writer.lock().await;
        writer
            .send(Message::text(frame))
            .await
            .map_err(|e| self.map_ws_error(e))
    }

    async fn next_frame(&self) -> Option<Result<String, TransportError>> {
        let mut reader = self.reader.lock().await;
        loop {
            match reader.next().await {
                Some(Ok(Message::Text(text))) => return Some(Ok(text.to_string())),
                Some(Ok(Message::Binary(bytes))) => match String::from_utf8(bytes.into()) {
                    Ok(text) => return Some(Ok(text)),
                    Err(e) => {
                        return Some(Err(TransportError::WebSocket(format!(
                            "non-UTF-8 binary frame: {}",
                            e
                        ))));
                    }
                },
                // Control frames are handled by tungstenite itself
                Some(Ok(Message::Ping(_) | Message::Pong(_) | Message::Frame(_))) => continue,
                Some(Ok(Message::Close(_))) => {
                    self.open.store(false, Ordering::SeqCst);
                    return Some(Err(TransportError::Closed));
                }
                Some(Err(e)) => return Some(Err(self.map_ws_error(e))),
                None => {
                    self.open.store(false, Ordering::SeqCst);
                    return None;
                }
            }
        }
    }

    async fn close(&self) -> Result<(), TransportError> {
        self.open.store(false, Ordering::SeqCst);
        let mut writer = self.writer.lock().await;
        match writer.close().await {
            Ok(()) | Err(WsError::ConnectionClosed) | Err(WsError::AlreadyClosed) => Ok(()),
            Err(e) => Err(TransportError::WebSocket(e.to_string())),
        }
    }

    fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }
}
