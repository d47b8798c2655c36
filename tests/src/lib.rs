//! # Circuit-Reserve Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Admission round-trip benchmarks
//! └── src/
//!     ├── fixtures.rs   # A running node and typed helpers around it
//!     └── integration/  # Cross-service flows over the bus
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p cr-tests
//! cargo test -p cr-tests integration::admission_flows
//! cargo bench -p cr-tests
//! ```

pub mod fixtures;
pub mod integration;
