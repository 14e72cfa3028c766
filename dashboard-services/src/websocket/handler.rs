//! Price channel connection handler
//!
//! Drives a single `/ws/price` connection: registers it, relays every
//! received text frame, and unregisters it once the peer goes away.

use dashboard_core::{broadcast_text, ChannelMode, EchoReply};
use futures_util::{pin_mut, Sink, SinkExt, Stream, StreamExt};
use std::fmt::Display;
use std::sync::Arc;
use tracing::{debug, error, info};

use super::registry::{ConnectionId, ConnectionRegistry, Outbound};

/// Inbound frame, independent of the WebSocket library in use
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Text(String),
    Binary(Vec<u8>),
    /// Ping or pong, answered by the transport
    Control,
    Close,
}

/// Shared state for price channel connections
#[derive(Clone)]
pub struct PriceChannel {
    registry: Arc<ConnectionRegistry>,
    mode: ChannelMode,
}

impl PriceChannel {
    pub fn new(registry: Arc<ConnectionRegistry>, mode: ChannelMode) -> Self {
        Self { registry, mode }
    }

    pub fn registry(&self) -> &Arc<ConnectionRegistry> {
        &self.registry
    }

    /// Handle an established connection until it closes
    ///
    /// `sink` receives every outbound text message; `stream` yields the
    /// peer's frames. Returns once the connection is unregistered and its
    /// outbound queue has been flushed.
    pub async fn serve<Tx, Rx, E>(&self, sink: Tx, stream: Rx)
    where
        Tx: Sink<String> + Send + 'static,
        Tx::Error: Display,
        Rx: Stream<Item = Result<Frame, E>>,
        E: Display,
    {
        let (id, outbound) = self.registry.register();
        info!("Price channel opened: {} (mode: {})", id, self.mode);

        let mut send_task = tokio::spawn(Self::write_loop(id, sink, outbound));

        let writer_done = tokio::select! {
            _ = &mut send_task => true,
            _ = self.read_loop(id, stream) => false,
        };

        self.registry.unregister(id);

        // The registry held the only sender, so the writer drains and exits
        if !writer_done {
            let _ = send_task.await;
        }

        info!("Price channel closed: {}", id);
    }

    /// Relay one received text frame according to the channel mode
    pub fn relay(&self, id: ConnectionId, text: &str) {
        match self.mode {
            ChannelMode::Broadcast => {
                self.registry.broadcast(&broadcast_text(text));
            }
            ChannelMode::Echo => {
                let reply = match serde_json::to_string(&EchoReply::for_text(text)) {
                    Ok(json) => json,
                    Err(e) => {
                        error!("Failed to serialize echo reply: {}", e);
                        return;
                    }
                };
                self.registry.send_to(id, reply);
            }
        }
    }

    async fn read_loop<Rx, E>(&self, id: ConnectionId, stream: Rx)
    where
        Rx: Stream<Item = Result<Frame, E>>,
        E: Display,
    {
        pin_mut!(stream);

        while let Some(result) = stream.next().await {
            match result {
                Ok(Frame::Text(text)) => {
                    debug!("{} sent {} bytes", id, text.len());
                    self.relay(id, &text);
                }
                Ok(Frame::Binary(data)) => {
                    debug!("Ignoring {} byte binary frame from {}", data.len(), id);
                }
                Ok(Frame::Control) => {}
                Ok(Frame::Close) => {
                    debug!("Received close from {}", id);
                    break;
                }
                Err(e) => {
                    debug!("WebSocket error for {}: {}", id, e);
                    break;
                }
            }
        }
    }

    async fn write_loop<Tx>(id: ConnectionId, sink: Tx, mut outbound: Outbound)
    where
        Tx: Sink<String>,
        Tx::Error: Display,
    {
        pin_mut!(sink);

        while let Some(message) = outbound.recv().await {
            if let Err(e) = sink.send(message).await {
                debug!("Send to {} failed: {}", id, e);
                return;
            }
        }

        let _ = sink.close().await;
    }
}

impl std::fmt::Debug for PriceChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriceChannel")
            .field("registry", &self.registry)
            .field("mode", &self.mode)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::stream;
    use parking_lot::Mutex;
    use std::convert::Infallible;
    use std::pin::Pin;
    use std::task::{Context, Poll};

    /// Sink that records everything written to it
    #[derive(Clone, Default)]
    struct RecordingSink {
        sent: Arc<Mutex<Vec<String>>>,
        closed: Arc<Mutex<bool>>,
    }

    impl Sink<String> for RecordingSink {
        type Error = Infallible;

        fn poll_ready(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }

        fn start_send(self: Pin<&mut Self>, item: String) -> Result<(), Self::Error> {
            self.sent.lock().push(item);
            Ok(())
        }

        fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }

        fn poll_close(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            *self.closed.lock() = true;
            Poll::Ready(Ok(()))
        }
    }

    fn frames(items: Vec<Frame>) -> impl Stream<Item = Result<Frame, Infallible>> {
        stream::iter(items.into_iter().map(Ok))
    }

    #[tokio::test]
    async fn test_broadcast_mode_reaches_all_connections() {
        let registry = Arc::new(ConnectionRegistry::new());
        let channel = PriceChannel::new(registry.clone(), ChannelMode::Broadcast);
        let (_other, mut other_rx) = registry.register();

        let sink = RecordingSink::default();
        channel
            .serve(sink.clone(), frames(vec![Frame::Text("hello".to_string())]))
            .await;

        assert_eq!(*sink.sent.lock(), vec!["Received: hello".to_string()]);
        assert_eq!(other_rx.try_recv().unwrap(), "Received: hello");
        assert_eq!(registry.len(), 1);
    }

    #[tokio::test]
    async fn test_echo_mode_replies_to_sender_only() {
        let registry = Arc::new(ConnectionRegistry::new());
        let channel = PriceChannel::new(registry.clone(), ChannelMode::Echo);
        let (_other, mut other_rx) = registry.register();

        let sink = RecordingSink::default();
        channel
            .serve(sink.clone(), frames(vec![Frame::Text("hi".to_string())]))
            .await;

        assert_eq!(*sink.sent.lock(), vec![r#"{"message":"Echo: hi"}"#.to_string()]);
        assert!(other_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_close_frame_stops_reading_and_unregisters() {
        let registry = Arc::new(ConnectionRegistry::new());
        let channel = PriceChannel::new(registry.clone(), ChannelMode::Broadcast);

        let sink = RecordingSink::default();
        channel
            .serve(
                sink.clone(),
                frames(vec![
                    Frame::Binary(vec![1, 2, 3]),
                    Frame::Control,
                    Frame::Close,
                    Frame::Text("after close".to_string()),
                ]),
            )
            .await;

        assert!(sink.sent.lock().is_empty());
        assert!(*sink.closed.lock());
        assert!(registry.is_empty());
    }

    #[tokio::test]
    async fn test_stream_error_ends_connection() {
        let registry = Arc::new(ConnectionRegistry::new());
        let channel = PriceChannel::new(registry.clone(), ChannelMode::Broadcast);

        let stream = stream::iter(vec![
            Err("connection reset".to_string()),
            Ok(Frame::Text("never relayed".to_string())),
        ]);
        let sink = RecordingSink::default();
        channel.serve(sink.clone(), stream).await;

        assert!(sink.sent.lock().is_empty());
        assert!(registry.is_empty());
    }
}
