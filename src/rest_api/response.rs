//! Response envelopes

use serde::Serialize;

/// List response with pagination.
///
/// `count` is the total number of records that passed the filter, not
/// the page size; callers derive the page count from it.
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub data: Vec<T>,
    pub count: usize,
    pub limit: usize,
    pub offset: usize,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(data: Vec<T>, count: usize, limit: usize, offset: usize) -> Self {
        Self {
            data,
            count,
            limit,
            offset,
        }
    }
}

/// Single record response
#[derive(Debug, Clone, Serialize)]
pub struct SingleResponse<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> SingleResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Deletion response
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
    pub count: usize,
}

impl DeleteResponse {
    /// An accepted deletion covering `count` ids
    pub fn accepted(count: usize) -> Self {
        Self {
            deleted: true,
            count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_response_count_is_independent_of_page_size() {
        let response = ListResponse::new(vec![json!({"id": 1}), json!({"id": 2})], 240, 2, 0);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["data"].as_array().unwrap().len(), 2);
        assert_eq!(json["count"], 240);
        assert_eq!(json["limit"], 2);
        assert_eq!(json["offset"], 0);
    }

    #[test]
    fn test_delete_response_serialization() {
        let json = serde_json::to_value(DeleteResponse::accepted(3)).unwrap();
        assert_eq!(json["deleted"], true);
        assert_eq!(json["count"], 3);
    }
}
