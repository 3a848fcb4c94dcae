//! In-memory recording adapter
//!
//! Implements the ValidationObserver port by buffering events, for tests and
//! for callers that want to inspect a validation after the fact.

use crate::domain::Stage;
use crate::events::ValidationEvent;
use crate::ports::ValidationObserver;
use parking_lot::RwLock;

/// Buffers every event it receives
pub struct RecordingObserver {
    events: RwLock<Vec<ValidationEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self {
            events: RwLock::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<ValidationEvent> {
        self.events.read().clone()
    }

    pub fn event_count(&self) -> usize {
        self.events.read().len()
    }

    /// Stages reported as evaluated, in the order they ran.
    pub fn evaluated_stages(&self) -> Vec<Stage> {
        self.events
            .read()
            .iter()
            .filter_map(|event| match event {
                ValidationEvent::StageEvaluated { stage, .. } => Some(*stage),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events.write().clear();
    }
}

impl Default for RecordingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationObserver for RecordingObserver {
    fn on_event(&self, event: &ValidationEvent) {
        self.events.write().push(event.clone());
    }
}
