//! Query execution
//!
//! Execution flow (strict order):
//! 1. Filter: keep records matching the free-text query, or all of them
//! 2. Record the filtered total before pagination
//! 3. Sort: stable sort by the selected field, if any
//! 4. Paginate: skip `offset`, take `limit`
//!
//! There is no error path. Out-of-range offsets yield an empty page,
//! and the engine never mutates the roster.

use crate::model::Skater;
use crate::store::Roster;

use super::filter::TextFilter;
use super::options::QueryOptions;
use super::result::QueryPage;
use super::sorter::RosterSorter;

/// Answers table queries against an injected roster
pub struct QueryEngine;

impl QueryEngine {
    /// Executes one query and returns the matching page plus the total
    /// filtered count.
    pub fn execute(roster: &Roster, options: &QueryOptions) -> QueryPage {
        let mut matched: Vec<Skater> = match &options.query {
            Some(query) => {
                let filter = TextFilter::new(query);
                roster
                    .records()
                    .iter()
                    .filter(|r| filter.matches(r))
                    .cloned()
                    .collect()
            }
            None => roster.records().to_vec(),
        };

        let count = matched.len();

        if let Some(field) = options.sort {
            RosterSorter::sort(&mut matched, field, options.order);
        }

        let data: Vec<Skater> = matched
            .into_iter()
            .skip(options.offset)
            .take(options.limit)
            .collect();

        QueryPage { data, count }
    }
}
