//! Handler seam between the router and the data layer

use crate::model::Skater;
use crate::observability::Logger;
use crate::query::{QueryEngine, QueryOptions};
use crate::store::{RecordDeleter, Roster};

use super::errors::{RestError, RestResult};
use super::response::{DeleteResponse, ListResponse, SingleResponse};

/// Handler trait for the table endpoints
pub trait TableHandler: Send + Sync {
    /// List records matching the query options
    fn list(&self, options: QueryOptions) -> RestResult<ListResponse<Skater>>;

    /// Get a single record by id
    fn get(&self, id: &str) -> RestResult<SingleResponse<Skater>>;

    /// Delete records by id
    fn delete(&self, ids: &[String]) -> RestResult<DeleteResponse>;
}

/// Roster-backed handler.
///
/// Owns the injected roster and the deletion boundary. The roster is
/// read-only, so the handler needs no locking.
pub struct RosterHandler<D: RecordDeleter> {
    roster: Roster,
    deleter: D,
}

impl<D: RecordDeleter> RosterHandler<D> {
    pub fn new(roster: Roster, deleter: D) -> Self {
        Self { roster, deleter }
    }

    /// The backing roster
    pub fn roster(&self) -> &Roster {
        &self.roster
    }
}

impl<D: RecordDeleter> TableHandler for RosterHandler<D> {
    fn list(&self, options: QueryOptions) -> RestResult<ListResponse<Skater>> {
        let page = QueryEngine::execute(&self.roster, &options);
        Ok(ListResponse::new(
            page.data,
            page.count,
            options.limit,
            options.offset,
        ))
    }

    fn get(&self, id: &str) -> RestResult<SingleResponse<Skater>> {
        self.roster
            .find(id)
            .cloned()
            .map(SingleResponse::new)
            .ok_or(RestError::NotFound)
    }

    fn delete(&self, ids: &[String]) -> RestResult<DeleteResponse> {
        match self.deleter.delete(ids) {
            Ok(outcome) => {
                Logger::info(
                    "delete_accepted",
                    &[("ids", &ids.len().to_string())],
                );
                Ok(DeleteResponse::accepted(outcome.accepted))
            }
            Err(e) => {
                // Log and surface; the caller's selection state is its own
                Logger::error("delete_failed", &[("reason", &e.to_string())]);
                Err(e.into())
            }
        }
    }
}
