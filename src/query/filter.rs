//! Free-text filtering over string-typed fields

use crate::model::Skater;

/// Case-insensitive substring filter.
///
/// A record matches when at least one of its string-typed fields
/// contains the needle. An empty needle matches every record.
pub struct TextFilter {
    needle: String,
}

impl TextFilter {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    /// True when the record matches the filter
    pub fn matches(&self, record: &Skater) -> bool {
        record
            .string_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }
}
