//! Adapters layer (Hexagonal Architecture)

mod recording;
mod tracing_observer;

pub use recording::*;
pub use tracing_observer::*;
