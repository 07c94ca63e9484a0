//! Deletion boundary between the UI-facing API and the record store
//!
//! The demo implementation mirrors the reference backend: deletion
//! requests always succeed and are never reflected in the stored data.
//! The trait carries a real error type so a persistent implementation
//! can slot in behind the same interface.

use std::sync::atomic::{AtomicUsize, Ordering};

use thiserror::Error;

/// Deletion failures
#[derive(Debug, Clone, Error)]
pub enum DeleteError {
    /// The backend refused the request
    #[error("delete rejected: {0}")]
    Rejected(String),
}

/// Outcome of an accepted deletion request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOutcome {
    /// Number of ids the backend accepted
    pub accepted: usize,
}

/// Trait for deleting records by id
pub trait RecordDeleter: Send + Sync {
    /// Deletes the given records
    fn delete(&self, ids: &[String]) -> Result<DeleteOutcome, DeleteError>;
}

/// Demo deleter: accepts every request and leaves the roster untouched.
///
/// Subsequent queries still return the "deleted" records. Accepted
/// requests are counted so the activity shows up in logs.
#[derive(Debug, Default)]
pub struct DemoDeleter {
    requests: AtomicUsize,
}

impl DemoDeleter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of delete requests accepted so far
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::Relaxed)
    }
}

impl RecordDeleter for DemoDeleter {
    fn delete(&self, ids: &[String]) -> Result<DeleteOutcome, DeleteError> {
        self.requests.fetch_add(1, Ordering::Relaxed);
        Ok(DeleteOutcome {
            accepted: ids.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_deleter_always_succeeds() {
        let deleter = DemoDeleter::new();
        let outcome = deleter
            .delete(&["a".to_string(), "b".to_string()])
            .unwrap();
        assert_eq!(outcome.accepted, 2);
    }

    #[test]
    fn test_demo_deleter_counts_requests() {
        let deleter = DemoDeleter::new();
        assert_eq!(deleter.requests(), 0);
        deleter.delete(&[]).unwrap();
        deleter.delete(&["x".to_string()]).unwrap();
        assert_eq!(deleter.requests(), 2);
    }
}
