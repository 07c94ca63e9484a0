//! Record model for the demo roster
//!
//! Defines the `Skater` record, the closed enumeration of sortable
//! fields, and the mock data generator.

mod field;
mod generator;
mod record;

pub use field::{SortField, SortOrder, UnknownSortField, UnknownSortOrder};
pub use generator::{RosterGenerator, DEFAULT_ROSTER_SIZE};
pub use record::{Skater, Stance};
