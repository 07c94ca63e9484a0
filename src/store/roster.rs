//! The demo record collection

use crate::model::{RosterGenerator, Skater};

/// An explicitly owned record collection.
///
/// Created once under caller control and read-only afterwards. Queries
/// borrow the records; nothing mutates them for the process lifetime,
/// so the roster can be shared without locking.
#[derive(Debug, Clone)]
pub struct Roster {
    records: Vec<Skater>,
}

impl Roster {
    /// Wraps an existing record collection
    pub fn new(records: Vec<Skater>) -> Self {
        Self { records }
    }

    /// Generates a mock roster of `count` records.
    ///
    /// A fixed seed reproduces the same dataset; `None` seeds from the
    /// operating system.
    pub fn generate(count: usize, seed: Option<u64>) -> Self {
        let mut generator = match seed {
            Some(seed) => RosterGenerator::from_seed(seed),
            None => RosterGenerator::from_entropy(),
        };
        Self::new(generator.generate(count))
    }

    /// All records, in generation order
    pub fn records(&self) -> &[Skater] {
        &self.records
    }

    /// Number of records in the roster
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the roster holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a record by id
    pub fn find(&self, id: &str) -> Option<&Skater> {
        self.records.iter().find(|r| r.id == id)
    }
}
