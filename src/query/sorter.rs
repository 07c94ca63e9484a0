//! Stable sorting by a selected field

use crate::model::{Skater, SortField, SortOrder};

/// Sorts records by one field
pub struct RosterSorter;

impl RosterSorter {
    /// Sorts records in place.
    ///
    /// The sort is stable and idempotent: records that compare equal
    /// keep their relative order, and re-sorting sorted input is a
    /// no-op. Descending order reverses the field comparison only, so
    /// equal records still keep their order.
    pub fn sort(records: &mut [Skater], field: SortField, order: SortOrder) {
        records.sort_by(|a, b| {
            let ordering = field.compare(a, b);
            match order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
    }
}
