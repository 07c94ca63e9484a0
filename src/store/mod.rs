//! Owned record store and the deletion boundary

mod deleter;
mod roster;

pub use deleter::{DeleteError, DeleteOutcome, DemoDeleter, RecordDeleter};
pub use roster::Roster;
