//! Observability for skatepark
//!
//! Structured JSON logging only. Logging is read-only with respect to
//! the data path, synchronous, and deterministic:
//! - one log line = one event
//! - fields in deterministic (alphabetical) order
//! - no buffering, no background threads

mod logger;

pub use logger::{Logger, Severity};
