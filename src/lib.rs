//! skatepark - an in-memory demo data backend for table UIs
//!
//! Generates a mock skater roster at process start and answers
//! table-oriented queries (filter, sort, paginate) over HTTP and from
//! the command line. Stands in for a real backend behind a data table.

pub mod cli;
pub mod model;
pub mod observability;
pub mod query;
pub mod rest_api;
pub mod store;
