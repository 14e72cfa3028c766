//! Connection registry for the price channel
//!
//! Tracks every open WebSocket connection and fans messages out to them.
//! Each connection is represented by the sending half of its outbound
//! queue; the connection's writer task owns the receiving half.

use indexmap::IndexMap;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{debug, info, warn};

/// Unique identifier for a WebSocket connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(pub u64);

impl std::fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "conn-{}", self.0)
    }
}

/// Messages queued per connection before it is treated as a slow consumer
pub const OUTBOUND_CAPACITY: usize = 100;

/// Receiving end of a connection's outbound queue
pub type Outbound = mpsc::Receiver<String>;

/// In-memory set of open connections, in insertion order
pub struct ConnectionRegistry {
    /// Next connection ID to assign
    next_id: AtomicU64,
    /// Connection ID -> outbound queue
    connections: Mutex<IndexMap<ConnectionId, mpsc::Sender<String>>>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            connections: Mutex::new(IndexMap::new()),
        }
    }

    /// Add a freshly accepted connection
    ///
    /// Returns its id and the queue the connection's writer should drain.
    pub fn register(&self) -> (ConnectionId, Outbound) {
        let id = ConnectionId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let (tx, rx) = mpsc::channel(OUTBOUND_CAPACITY);

        let total = {
            let mut connections = self.connections.lock();
            connections.insert(id, tx);
            connections.len()
        };

        debug!("Registered {} ({} open)", id, total);
        (id, rx)
    }

    /// Remove a connection. Unknown ids are ignored.
    pub fn unregister(&self, id: ConnectionId) -> bool {
        let (removed, total) = {
            let mut connections = self.connections.lock();
            let removed = connections.shift_remove(&id).is_some();
            (removed, connections.len())
        };

        if removed {
            debug!("Unregistered {} ({} open)", id, total);
        }
        removed
    }

    /// Queue `message` on every registered connection
    ///
    /// A connection whose writer is gone, or whose queue is full, does not
    /// stop delivery to the others; it is dropped from the registry instead.
    /// Returns the number of connections the message was queued on.
    pub fn broadcast(&self, message: &str) -> usize {
        let mut connections = self.connections.lock();
        let mut dead = Vec::new();
        let mut delivered = 0;

        for (id, tx) in connections.iter() {
            match tx.try_send(message.to_string()) {
                Ok(()) => delivered += 1,
                Err(TrySendError::Full(_)) => {
                    warn!("Dropping {}: outbound queue full", id);
                    dead.push(*id);
                }
                Err(TrySendError::Closed(_)) => {
                    warn!("Dropping {}: connection closed during broadcast", id);
                    dead.push(*id);
                }
            }
        }

        for id in &dead {
            connections.shift_remove(id);
        }

        debug!(
            "Broadcast reached {} connection(s), removed {}",
            delivered,
            dead.len()
        );
        delivered
    }

    /// Queue `message` on a single connection
    pub fn send_to(&self, id: ConnectionId, message: String) -> bool {
        let mut connections = self.connections.lock();
        let Some(tx) = connections.get(&id) else {
            return false;
        };

        if let Err(e) = tx.try_send(message) {
            let reason = match e {
                TrySendError::Full(_) => "outbound queue full",
                TrySendError::Closed(_) => "connection closed",
            };
            warn!("Dropping {}: {} before reply", id, reason);
            connections.shift_remove(&id);
            return false;
        }
        true
    }

    /// Tear down the registry, closing every outbound queue
    pub fn close_all(&self) -> usize {
        let closed = {
            let mut connections = self.connections.lock();
            connections.drain(..).count()
        };
        info!("Connection registry closed {} connection(s)", closed);
        closed
    }

    pub fn contains(&self, id: ConnectionId) -> bool {
        self.connections.lock().contains_key(&id)
    }

    /// Registered ids in iteration order
    pub fn ids(&self) -> Vec<ConnectionId> {
        self.connections.lock().keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.connections.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.lock().is_empty()
    }
}

impl Default for ConnectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConnectionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionRegistry")
            .field("open_connections", &self.len())
            .finish()
    }
}
