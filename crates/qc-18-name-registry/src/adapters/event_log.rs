//! # Event Log
//!
//! In-memory event recorder.

use crate::events::RegistryEvent;
use crate::ports::outbound::EventSink;
use parking_lot::Mutex;
use tracing::trace;

/// Records published events in order.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Mutex<Vec<RegistryEvent>>,
}

impl EventLog {
    /// Empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything published so far.
    #[must_use]
    pub fn events(&self) -> Vec<RegistryEvent> {
        self.events.lock().clone()
    }

    /// Events published on `topic`.
    #[must_use]
    pub fn by_topic(&self, topic: &str) -> Vec<RegistryEvent> {
        self.events
            .lock()
            .iter()
            .filter(|e| e.topic() == topic)
            .cloned()
            .collect()
    }

    /// Number of events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// Returns true if nothing was published.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Drains the log.
    pub fn take(&self) -> Vec<RegistryEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl EventSink for EventLog {
    fn publish(&self, event: RegistryEvent) {
        trace!(topic = event.topic(), "Event published");
        self.events.lock().push(event);
    }
}
