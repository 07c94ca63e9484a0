//! The demo record type

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Riding stance, the two-valued categorical field of the demo data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stance {
    Mongo,
    Goofy,
}

impl Stance {
    /// Returns the wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Stance::Mongo => "mongo",
            Stance::Goofy => "goofy",
        }
    }
}

/// One row of demo data
///
/// Ids are unique within a roster. Records are never mutated after
/// generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skater {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub email: String,
    pub stats: u32,
    pub stance: Stance,
    pub deck_price: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Skater {
    /// The string-typed fields of the record, in declaration order.
    ///
    /// Free-text filtering matches against these and nothing else;
    /// numeric fields and timestamps never match.
    pub fn string_fields(&self) -> [&str; 4] {
        [&self.id, &self.name, &self.email, self.stance.as_str()]
    }
}
