//! Query parameter parsing for the list endpoint
//!
//! Malformed numbers, unknown sort fields, and out-of-range limits are
//! rejected here with 400s; the engine below this boundary never fails.

use std::collections::HashMap;

use crate::query::QueryOptions;

use super::errors::{RestError, RestResult};

/// Maximum number of records that can be returned
pub const MAX_LIMIT: usize = 1000;

/// Default limit if not specified
pub const DEFAULT_LIMIT: usize = 100;

/// Parses the list endpoint's query parameters into `QueryOptions`.
///
/// Accepted keys: `limit`, `offset`, `sort`, `order`, `query`. Unknown
/// keys are rejected; the parameter set is closed, like the sortable
/// field set.
pub fn parse_query_options(params: &HashMap<String, String>) -> RestResult<QueryOptions> {
    let mut options = QueryOptions {
        limit: DEFAULT_LIMIT,
        ..Default::default()
    };

    for (key, value) in params {
        match key.as_str() {
            "limit" => options.limit = parse_limit(value)?,
            "offset" => options.offset = parse_offset(value)?,
            "sort" => {
                options.sort = Some(
                    value
                        .parse()
                        .map_err(|e| RestError::InvalidQueryParam(format!("{}", e)))?,
                );
            }
            "order" => {
                options.order = value
                    .parse()
                    .map_err(|e| RestError::InvalidQueryParam(format!("{}", e)))?;
            }
            "query" => {
                // Empty filter means no filter
                if !value.is_empty() {
                    options.query = Some(value.clone());
                }
            }
            other => {
                return Err(RestError::InvalidQueryParam(format!(
                    "unknown parameter: {}",
                    other
                )));
            }
        }
    }

    if options.limit > MAX_LIMIT {
        return Err(RestError::LimitExceeded(options.limit, MAX_LIMIT));
    }

    Ok(options)
}

/// Parse the limit parameter (positive integer)
fn parse_limit(value: &str) -> RestResult<usize> {
    let limit: usize = value
        .parse()
        .map_err(|_| RestError::InvalidQueryParam(format!("invalid limit: {}", value)))?;
    if limit == 0 {
        return Err(RestError::InvalidQueryParam(
            "limit must be positive".to_string(),
        ));
    }
    Ok(limit)
}

/// Parse the offset parameter (non-negative integer)
fn parse_offset(value: &str) -> RestResult<usize> {
    value
        .parse()
        .map_err(|_| RestError::InvalidQueryParam(format!("invalid offset: {}", value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SortField, SortOrder};

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let options = parse_query_options(&HashMap::new()).unwrap();
        assert_eq!(options.limit, DEFAULT_LIMIT);
        assert_eq!(options.offset, 0);
        assert!(options.sort.is_none());
        assert_eq!(options.order, SortOrder::Asc);
        assert!(options.query.is_none());
    }

    #[test]
    fn test_full_parameter_set() {
        let options = parse_query_options(&params(&[
            ("limit", "20"),
            ("offset", "40"),
            ("sort", "name"),
            ("order", "desc"),
            ("query", "goofy"),
        ]))
        .unwrap();

        assert_eq!(options.limit, 20);
        assert_eq!(options.offset, 40);
        assert_eq!(options.sort, Some(SortField::Name));
        assert_eq!(options.order, SortOrder::Desc);
        assert_eq!(options.query.as_deref(), Some("goofy"));
    }

    #[test]
    fn test_malformed_numbers_rejected() {
        assert!(parse_query_options(&params(&[("limit", "ten")])).is_err());
        assert!(parse_query_options(&params(&[("offset", "-1")])).is_err());
    }

    #[test]
    fn test_zero_limit_rejected() {
        let result = parse_query_options(&params(&[("limit", "0")]));
        assert!(matches!(result, Err(RestError::InvalidQueryParam(_))));
    }

    #[test]
    fn test_limit_exceeded() {
        let result = parse_query_options(&params(&[("limit", "5000")]));
        assert!(matches!(result, Err(RestError::LimitExceeded(5000, 1000))));
    }

    #[test]
    fn test_unknown_sort_field_rejected() {
        let result = parse_query_options(&params(&[("sort", "shoe_size")]));
        assert!(matches!(result, Err(RestError::InvalidQueryParam(_))));
    }

    #[test]
    fn test_unknown_parameter_rejected() {
        let result = parse_query_options(&params(&[("page", "3")]));
        assert!(matches!(result, Err(RestError::InvalidQueryParam(_))));
    }

    #[test]
    fn test_empty_query_means_no_filter() {
        let options = parse_query_options(&params(&[("query", "")])).unwrap();
        assert!(options.query.is_none());
    }
}
