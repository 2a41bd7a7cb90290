//! Event Bus - distribution of brand directory and selection events
//!
//! The brand selection coordinator publishes every state change here.
//! Views that show brand-scoped data (sales, inventory, marketing) subscribe
//! and refetch when the active brand changes.
//!
//! ```text
//! ┌──────────────────────────────┐      ┌────────────────────────────┐
//! │ BrandSelectionCoordinator    │ ───► │ broadcast channel          │
//! └──────────────────────────────┘      │  ├─ inventory view refetch │
//!                                       │  ├─ sales view refetch     │
//!                                       │  └─ audit log              │
//!                                       └────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let bus = EventBus::new();
//! let mut rx = bus.subscribe();
//! let coordinator = BrandSelectionCoordinator::new(..., bus.sender());
//!
//! while let Some(event) = rx.recv().await {
//!     if event.changes_active_brand() { /* refetch */ }
//! }
//! ```

use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::DomainEvent;

/// Default channel capacity for the event bus
const DEFAULT_CAPACITY: usize = 64;

/// Broadcast hub; each subscriber gets its own copy of every event.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<DomainEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Get a sender for emitting events
    pub fn sender(&self) -> EventSender {
        EventSender {
            sender: self.sender.clone(),
        }
    }

    /// Subscribe to events emitted after this call
    pub fn subscribe(&self) -> EventReceiver {
        EventReceiver {
            receiver: self.sender.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Cheaply cloneable handle used by services to emit events
#[derive(Clone)]
pub struct EventSender {
    sender: broadcast::Sender<DomainEvent>,
}

impl EventSender {
    /// Emit a domain event.
    ///
    /// Returns the number of receivers; 0 when nobody listens (not an error).
    pub fn emit(&self, event: DomainEvent) -> usize {
        let type_name = event.type_name();
        match self.sender.send(event) {
            Ok(count) => {
                debug!(
                    event_type = type_name,
                    receivers = count,
                    "[EventBus] Emitted event"
                );
                count
            }
            Err(_) => {
                debug!(event_type = type_name, "[EventBus] No receivers for event");
                0
            }
        }
    }

    pub fn has_subscribers(&self) -> bool {
        self.sender.receiver_count() > 0
    }
}

/// Receiving end for a single consumer
pub struct EventReceiver {
    receiver: broadcast::Receiver<DomainEvent>,
}

impl EventReceiver {
    /// Receive the next event.
    ///
    /// Returns `None` once the channel is closed. Lagging is logged and skipped.
    pub async fn recv(&mut self) -> Option<DomainEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(skipped_events = skipped, "[EventBus] Receiver lagged");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    debug!("[EventBus] Channel closed");
                    return None;
                }
            }
        }
    }

    /// Receive without waiting
    pub fn try_recv(&mut self) -> Option<DomainEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                warn!(skipped_events = skipped, "[EventBus] Receiver lagged on try_recv");
                self.receiver.try_recv().ok()
            }
            Err(_) => None,
        }
    }

    /// Drain every event currently queued
    pub fn drain(&mut self) -> Vec<DomainEvent> {
        std::iter::from_fn(|| self.try_recv()).collect()
    }
}

/// Shared event bus for application-wide use
pub type SharedEventBus = Arc<EventBus>;
