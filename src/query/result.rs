//! Query results

use serde::Serialize;

use crate::model::Skater;

/// One page of query results
#[derive(Debug, Clone, Serialize)]
pub struct QueryPage {
    /// The paginated window of records
    pub data: Vec<Skater>,

    /// Total records that passed the filter, regardless of pagination.
    ///
    /// This is what callers use to compute page count. It is never the
    /// page size, and never the unfiltered total when a filter is set.
    pub count: usize,
}
