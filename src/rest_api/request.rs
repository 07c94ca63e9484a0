//! Request bodies

use serde::Deserialize;

/// Bulk deletion request: the selected row ids
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteRequest {
    pub ids: Vec<String>,
}
