//! Topic-keyed publish/subscribe registry
//!
//! Mutations publish payloads on a named topic; every [`Listener`] registered on
//! that topic at publish time receives one clone. Listeners are streams, and
//! dropping one (for example when a WebSocket subscription closes) removes it
//! from the registry. Events are not retained for listeners that register later.

use std::collections::HashMap;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::task::{Context, Poll};

use futures::Stream;
use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;
use tracing::debug;

/// Topic carrying every book created through `addBook`
pub const BOOK_ADDED_TOPIC: &str = "BOOK_ADDED";

type ListenerId = u64;

struct Registry<T> {
    topics: Mutex<HashMap<String, HashMap<ListenerId, mpsc::UnboundedSender<T>>>>,
    next_id: AtomicU64,
}

impl<T> Registry<T> {
    fn remove(&self, topic: &str, id: ListenerId) {
        let mut topics = self.topics.lock();
        if let Some(listeners) = topics.get_mut(topic) {
            listeners.remove(&id);
            if listeners.is_empty() {
                topics.remove(topic);
            }
        }
    }
}

/// Shared publish/subscribe handle. Clones share the same registry.
pub struct PubSub<T> {
    registry: Arc<Registry<T>>,
}

impl<T> Clone for PubSub<T> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
        }
    }
}

impl<T> Default for PubSub<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PubSub<T> {
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Registry {
                topics: Mutex::new(HashMap::new()),
                next_id: AtomicU64::new(1),
            }),
        }
    }

    /// Register a listener on `topic`. It receives every payload published
    /// from now until it is dropped.
    pub fn subscribe(&self, topic: &str) -> Listener<T> {
        let id = self.registry.next_id.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = mpsc::unbounded_channel();

        self.registry
            .topics
            .lock()
            .entry(topic.to_string())
            .or_default()
            .insert(id, tx);
        debug!(topic, listener_id = id, "Listener registered");

        Listener {
            id,
            topic: topic.to_string(),
            stream: UnboundedReceiverStream::new(rx),
            registry: self.registry.clone(),
        }
    }

    /// Number of listeners currently registered on `topic`
    pub fn listener_count(&self, topic: &str) -> usize {
        self.registry
            .topics
            .lock()
            .get(topic)
            .map(HashMap::len)
            .unwrap_or(0)
    }
}

impl<T: Clone> PubSub<T> {
    /// Deliver `payload` to every listener on `topic` and return how many
    /// received it. Listeners whose receiving side is gone are pruned.
    pub fn publish(&self, topic: &str, payload: T) -> usize {
        let mut topics = self.registry.topics.lock();
        let Some(listeners) = topics.get_mut(topic) else {
            debug!(topic, "Published with no listeners");
            return 0;
        };

        let before = listeners.len();
        listeners.retain(|_, tx| tx.send(payload.clone()).is_ok());
        let delivered = listeners.len();
        if listeners.is_empty() {
            topics.remove(topic);
        }

        debug!(
            topic,
            delivered,
            pruned = before - delivered,
            "Published event"
        );
        delivered
    }
}

/// A registered listener. Yields payloads published on its topic and
/// deregisters itself on drop.
pub struct Listener<T> {
    id: ListenerId,
    topic: String,
    stream: UnboundedReceiverStream<T>,
    registry: Arc<Registry<T>>,
}

impl<T> Listener<T> {
    pub fn topic(&self) -> &str {
        &self.topic
    }
}

impl<T> Stream for Listener<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        Pin::new(&mut self.stream).poll_next(cx)
    }
}

impl<T> Drop for Listener<T> {
    fn drop(&mut self) {
        self.registry.remove(&self.topic, self.id);
        debug!(topic = %self.topic, listener_id = self.id, "Listener deregistered");
    }
}
