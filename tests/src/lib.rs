//! # Braided Block Validation Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Sealed block builders shared by tests and benches
//! └── integration/      # Pipeline behavior across crates
//!     ├── pipeline_flow.rs
//!     ├── concurrency.rs
//!     ├── wire_format.rs
//!     └── properties.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p bc-tests
//! cargo test -p bc-tests integration::properties
//!
//! # Benchmarks
//! cargo bench -p bc-tests
//! ```

pub mod integration;
