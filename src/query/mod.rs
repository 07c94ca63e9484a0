//! Query engine for the demo roster
//!
//! Answers one table query at a time against an injected roster:
//! filter by free text, stable-sort by a selected field, then paginate.

mod engine;
mod filter;
mod options;
mod result;
mod sorter;

pub use engine::QueryEngine;
pub use filter::TextFilter;
pub use options::QueryOptions;
pub use result::QueryPage;
pub use sorter::RosterSorter;
