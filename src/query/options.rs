//! Query options

use crate::model::{SortField, SortOrder};

/// Parameters of one table query
#[derive(Debug, Clone)]
pub struct QueryOptions {
    /// Maximum number of records to return
    pub limit: usize,

    /// Number of records to skip before collecting
    pub offset: usize,

    /// Field to sort by; absent preserves filtered order
    pub sort: Option<SortField>,

    /// Sort direction, ascending unless stated
    pub order: SortOrder,

    /// Free-text filter over the string-typed fields
    pub query: Option<String>,
}

impl QueryOptions {
    /// A plain pagination window with no filter and no sort
    pub fn page(limit: usize, offset: usize) -> Self {
        Self {
            limit,
            offset,
            ..Default::default()
        }
    }
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            limit: 100,
            offset: 0,
            sort: None,
            order: SortOrder::Asc,
            query: None,
        }
    }
}
