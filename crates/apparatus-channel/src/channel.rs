//! The resilient channel: one logical JSON-RPC session kept alive over a
//! transport that can fail or be severed at any time.
//!
//! A [`RpcChannel`] owns at most one transport. The supervisory loop
//! ([`RpcChannel::connect`]) dials, installs the transport, runs the
//! receive loop to completion, then retries after the configured delay,
//! indefinitely, until [`RpcChannel::close`] sets the stop flag. Reconnect
//! lives only in that loop; the receive loop never reconnects on its own,
//! so there is exactly one place a new connection can come from.
//!
//! The channel performs no request/response correlation. Inbound frames
//! are handed, raw and in wire order, to the registered handler; matching
//! a response to an outstanding request is a caller concern.

use async_trait::async_trait;
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;
use tokio::task::AbortHandle;
use tracing::{debug, error, info, warn};

use apparatus_json_rpc::is_well_formed;

use crate::config::ChannelConfig;
use crate::error::{ChannelError, ChannelResult};
use crate::transport::{Connector, SharedTransport, WsConnector};

/// Handles one inbound frame.
///
/// The frame is the raw text of one wire message, not yet parsed; parsing
/// (and classification) is the handler's responsibility. Errors are logged
/// at the delivery point and never unwind the receive loop.
#[async_trait]
pub trait MessageHandler: Send + Sync {
    async fn handle(&self, frame: String) -> anyhow::Result<()>;
}

#[async_trait]
impl<F, Fut> MessageHandler for F
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<()>> + Send,
{
    async fn handle(&self, frame: String) -> anyhow::Result<()> {
        (self)(frame).await
    }
}

/// Invoked once per successful (re)connection, before the receive loop
/// starts
#[async_trait]
pub trait ConnectHook: Send + Sync {
    async fn on_connect(&self) -> anyhow::Result<()>;
}

#[async_trait]
impl<F, Fut> ConnectHook for F
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<()>> + Send,
{
    async fn on_connect(&self) -> anyhow::Result<()> {
        (self)().await
    }
}

struct ChannelInner {
    config: ChannelConfig,
    endpoint: String,
    connector: Arc<dyn Connector>,
    handler: Option<Arc<dyn MessageHandler>>,
    on_connect: Option<Arc<dyn ConnectHook>>,
    // The transport slot is the single critical section shared by the
    // supervisory loop, the receive loop, send and close.
    transport: Mutex<Option<SharedTransport>>,
    listen_abort: Mutex<Option<AbortHandle>>,
    stopped: AtomicBool,
    connect_active: AtomicBool,
}

/// A resilient JSON-RPC channel. Cheap to clone; clones share one session.
#[derive(Clone)]
pub struct RpcChannel {
    inner: Arc<ChannelInner>,
}

/// Builder for [`RpcChannel`]
pub struct RpcChannelBuilder {
    config: ChannelConfig,
    connector: Arc<dyn Connector>,
    handler: Option<Arc<dyn MessageHandler>>,
    on_connect: Option<Arc<dyn ConnectHook>>,
}

impl Default for RpcChannelBuilder {
    fn default() -> Self {
        Self {
            config: ChannelConfig::default(),
            connector: Arc::new(WsConnector),
            handler: None,
            on_connect: None,
        }
    }
}

impl RpcChannelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: ChannelConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_connector(mut self, connector: Arc<dyn Connector>) -> Self {
        self.connector = connector;
        self
    }

    pub fn with_handler(mut self, handler: impl MessageHandler + 'static) -> Self {
        self.handler = Some(Arc::new(handler));
        self
    }

    pub fn with_on_connect(mut self, hook: impl ConnectHook + 'static) -> Self {
        self.on_connect = Some(Arc::new(hook));
        self
    }

    pub fn build(self) -> RpcChannel {
        let endpoint = self.config.endpoint();
        RpcChannel {
            inner: Arc::new(ChannelInner {
                config: self.config,
                endpoint,
                connector: self.connector,
                handler: self.handler,
                on_connect: self.on_connect,
                transport: Mutex::new(None),
                listen_abort: Mutex::new(None),
                stopped: AtomicBool::new(false),
                connect_active: AtomicBool::new(false),
            }),
        }
    }
}

impl RpcChannel {
    pub fn builder() -> RpcChannelBuilder {
        RpcChannelBuilder::new()
    }

    /// Channel for the given configuration with the default WebSocket
    /// connector and no handler
    pub fn new(config: ChannelConfig) -> Self {
        Self::builder().with_config(config).build()
    }

    pub fn config(&self) -> &ChannelConfig {
        &self.inner.config
    }

    pub fn endpoint(&self) -> &str {
        &self.inner.endpoint
    }

    fn is_stopped(&self) -> bool {
        self.inner.stopped.load(Ordering::SeqCst)
    }

    /// Whether a live transport is currently installed
    pub async fn is_connected(&self) -> bool {
        self.inner
            .transport
            .lock()
            .await
            .as_ref()
            .is_some_and(|t| t.is_open())
    }

    /// Supervisory loop: dial, run the session, retry after the fixed
    /// delay on any loss, until the channel is closed.
    ///
    /// This call lasts the session lifetime and is expected to be spawned
    /// as its own task. A second concurrent call is a no-op, which is what
    /// keeps `send`-triggered and external reconnects from racing each
    /// other.
    pub async fn connect(&self) {
        if self.inner.connect_active.swap(true, Ordering::SeqCst) {
            debug!("connect loop already running");
            return;
        }

        loop {
            while !self.is_stopped() {
                self.run_session().await;
            }

            self.inner.connect_active.store(false, Ordering::SeqCst);
            // A reconnect() that raced this shutdown has already cleared
            // the stop flag; pick that restart up instead of dropping it.
            if self.is_stopped() || self.inner.connect_active.swap(true, Ordering::SeqCst) {
                break;
            }
        }
        debug!("connect loop stopped");
    }

    /// One dial-and-session cycle of the supervisory loop, ending with the
    /// reconnect-delay sleep unless the channel stopped meanwhile
    async fn run_session(&self) {
        match self.inner.connector.connect(&self.inner.endpoint).await {
            Ok(transport) => {
                if self.is_stopped() {
                    // close() won the race while the dial was in flight
                    transport.close().await.ok();
                    return;
                }
                info!(endpoint = %self.inner.endpoint, "connected");
                *self.inner.transport.lock().await = Some(Arc::clone(&transport));

                if let Some(hook) = &self.inner.on_connect {
                    if let Err(e) = hook.on_connect().await {
                        error!(error = %e, "on-connect hook failed");
                    }
                }

                let mut listen_task =
                    tokio::spawn(Self::listen(transport, self.inner.handler.clone()));
                *self.inner.listen_abort.lock().await = Some(listen_task.abort_handle());

                // Wait until the receive loop ends (peer closed, transport
                // error, or aborted by close/reconnect)
                let _ = (&mut listen_task).await;
                self.inner.listen_abort.lock().await.take();
                self.inner.transport.lock().await.take();

                if self.is_stopped() {
                    return;
                }
                warn!(
                    delay_secs = self.inner.config.reconnect_delay.as_secs_f64(),
                    "connection lost, reconnecting"
                );
                tokio::time::sleep(self.inner.config.reconnect_delay).await;
            }
            Err(e) => {
                error!(
                    error = %e,
                    delay_secs = self.inner.config.reconnect_delay.as_secs_f64(),
                    "connection attempt failed, retrying"
                );
                tokio::time::sleep(self.inner.config.reconnect_delay).await;
            }
        }
    }

    /// Receive loop: deliver inbound frames to the handler in wire order.
    ///
    /// Ends on peer closure or transport error without reconnecting;
    /// reconnect belongs solely to the supervisory loop.
    async fn listen(transport: SharedTransport, handler: Option<Arc<dyn MessageHandler>>) {
        while let Some(frame) = transport.next_frame().await {
            match frame {
                Ok(frame) => {
                    let Some(handler) = &handler else { continue };
                    if let Err(e) = handler.handle(frame).await {
                        error!(error = %e, "message handler failed");
                    }
                }
                Err(e) if e.is_clean_close() => {
                    warn!("connection closed by peer");
                    break;
                }
                Err(e) => {
                    error!(error = %e, "receive loop transport error");
                    break;
                }
            }
        }
    }

    /// Send one JSON-RPC message as a single frame.
    ///
    /// A message without a valid envelope is rejected synchronously. While
    /// the transport is down this call blocks, nudging the supervisory
    /// loop awake and polling at the reconnect-delay interval, rather than
    /// dropping the message; it returns `ChannelError::Closed` once the
    /// stop flag is observed.
    pub async fn send(&self, message: &Value) -> ChannelResult<()> {
        if !is_well_formed(message) {
            return Err(ChannelError::InvalidMessage(
                "message must carry a \"jsonrpc\": \"2.0\" envelope".to_string(),
            ));
        }
        let frame = serde_json::to_string(message)?;

        loop {
            if self.is_stopped() {
                return Err(ChannelError::Closed);
            }
            if let Some(transport) = self.live_transport().await {
                transport.send_frame(frame).await?;
                return Ok(());
            }
            warn!("transport not connected, waiting to send");
            self.spawn_connect_loop();
            tokio::time::sleep(self.inner.config.reconnect_delay).await;
        }
    }

    /// Explicit recovery hook: tear down whatever is left of the current
    /// session, re-arm a stopped channel, and restart the supervisory
    /// loop in the background. Safe to call while a loop is running.
    pub async fn reconnect(&self) {
        info!("reconnect requested");
        self.teardown().await;
        self.inner.stopped.store(false, Ordering::SeqCst);
        self.spawn_connect_loop();
    }

    /// Orderly shutdown: set the stop flag, close the transport, cancel
    /// the receive loop. Idempotent, callable from any task and any
    /// state; a `send` parked on reconnection observes the flag and
    /// returns.
    pub async fn close(&self) {
        self.inner.stopped.store(true, Ordering::SeqCst);
        self.teardown().await;
        info!("channel closed");
    }

    async fn teardown(&self) {
        if let Some(transport) = self.inner.transport.lock().await.take() {
            if let Err(e) = transport.close().await {
                debug!(error = %e, "transport close failed");
            }
        }
        if let Some(abort) = self.inner.listen_abort.lock().await.take() {
            abort.abort();
        }
    }

    async fn live_transport(&self) -> Option<SharedTransport> {
        self.inner
            .transport
            .lock()
            .await
            .as_ref()
            .filter(|t| t.is_open())
            .cloned()
    }

    fn spawn_connect_loop(&self) {
        // connect() itself holds the single-instance guard; worst case
        // this spawns a task that immediately returns
        if self.inner.connect_active.load(Ordering::SeqCst) {
            return;
        }
        let channel = self.clone();
        tokio::spawn(async move { channel.connect().await });
    }
}
