//! Driven ports (Outbound dependencies)
//!
//! The compute engine port is [`bc_compute::ComputeEngine`]; this module
//! holds the diagnostic sink.

use crate::events::ValidationEvent;

/// Receives validation events for logging, telemetry or peer scoring.
///
/// Observers must not influence the outcome. They are called synchronously
/// on the validating thread, so they should be cheap.
pub trait ValidationObserver: Send + Sync {
    fn on_event(&self, event: &ValidationEvent);
}

/// Observer that drops every event.
pub struct NoopObserver;

impl ValidationObserver for NoopObserver {
    fn on_event(&self, _event: &ValidationEvent) {}
}
