//! HTTP layer for the demo data service
//!
//! Serves the two interfaces a table UI consumes:
//! - `GET /api/v1/skaters` — filtered, sorted, paginated listing
//! - `DELETE /api/v1/skaters` — bulk deletion by id (demo no-op)
//!
//! plus `GET /api/v1/skaters/{id}` and `GET /health`.

mod config;
mod errors;
mod handler;
mod parser;
mod request;
mod response;
mod server;

pub use config::ServerConfig;
pub use errors::{ErrorResponse, RestError, RestResult};
pub use handler::{RosterHandler, TableHandler};
pub use parser::{parse_query_options, DEFAULT_LIMIT, MAX_LIMIT};
pub use request::DeleteRequest;
pub use response::{DeleteResponse, ListResponse, SingleResponse};
pub use server::RestServer;
