use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::identity::ParticipantId;
use crate::session::SessionState;

/// Events delivered by the real-time session object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum SessionEvent {
    ParticipantJoined { identity: ParticipantId },
    ParticipantLeft { identity: ParticipantId },
    StateChanged(SessionState),
    #[serde(other)]
    Unknown,
}

/// Events from the navigation layer of the hosting view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum NavigationEvent {
    /// The user started leaving the current view.
    RouteChangeStart { url: String },
    RouteChangeComplete { url: String },
}

pub struct EventBus<E> {
    sender: broadcast::Sender<E>,
}

impl<E: Clone> EventBus<E> {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<E> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: E) -> usize {
        self.sender.send(event).unwrap_or(0)
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

/// Navigation facility of the hosting view.
///
/// Listeners may only attach once the navigator has been marked ready;
/// before that `subscribe` yields nothing.
pub struct Navigator {
    bus: EventBus<NavigationEvent>,
    ready: AtomicBool,
}

impl Navigator {
    pub fn new(capacity: usize) -> Self {
        Self {
            bus: EventBus::new(capacity),
            ready: AtomicBool::new(false),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    pub fn subscribe(&self) -> Option<broadcast::Receiver<NavigationEvent>> {
        self.is_ready().then(|| self.bus.subscribe())
    }

    /// Signals that the user began navigating to `url`.
    pub fn start_route_change(&self, url: impl Into<String>) -> usize {
        self.bus
            .publish(NavigationEvent::RouteChangeStart { url: url.into() })
    }

    pub fn complete_route_change(&self, url: impl Into<String>) -> usize {
        self.bus
            .publish(NavigationEvent::RouteChangeComplete { url: url.into() })
    }

    pub fn listener_count(&self) -> usize {
        self.bus.subscriber_count()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(16)
    }
}
