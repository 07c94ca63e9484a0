//! Sortable fields and sort direction
//!
//! Sortable fields are a closed enumeration, each mapped to an explicit
//! accessor. There is no dynamic field-name lookup: unknown names are
//! rejected at the HTTP/CLI boundary when parsing.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::record::Skater;

/// Parse failure for a sort field name
#[derive(Debug, Clone, Error)]
#[error("unknown sort field: {0}")]
pub struct UnknownSortField(pub String);

/// Parse failure for a sort direction
#[derive(Debug, Clone, Error)]
#[error("unknown sort order: {0} (expected 'asc' or 'desc')")]
pub struct UnknownSortOrder(pub String);

/// Closed enumeration of the record's sortable fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Name,
    Age,
    Email,
    Stats,
    Stance,
    DeckPrice,
    CreatedAt,
}

impl SortField {
    /// Returns the wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Name => "name",
            SortField::Age => "age",
            SortField::Email => "email",
            SortField::Stats => "stats",
            SortField::Stance => "stance",
            SortField::DeckPrice => "deck_price",
            SortField::CreatedAt => "created_at",
        }
    }

    /// Compares the selected field between two records.
    ///
    /// `created_at` pairs where either side is missing compare as equal,
    /// leaving those records in their current relative order.
    pub fn compare(&self, a: &Skater, b: &Skater) -> Ordering {
        match self {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Name => a.name.cmp(&b.name),
            SortField::Age => a.age.cmp(&b.age),
            SortField::Email => a.email.cmp(&b.email),
            SortField::Stats => a.stats.cmp(&b.stats),
            SortField::Stance => a.stance.as_str().cmp(b.stance.as_str()),
            SortField::DeckPrice => a.deck_price.cmp(&b.deck_price),
            SortField::CreatedAt => match (&a.created_at, &b.created_at) {
                (Some(a_ts), Some(b_ts)) => a_ts.cmp(b_ts),
                _ => Ordering::Equal,
            },
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortField {
    type Err = UnknownSortField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortField::Id),
            "name" => Ok(SortField::Name),
            "age" => Ok(SortField::Age),
            "email" => Ok(SortField::Email),
            "stats" => Ok(SortField::Stats),
            "stance" => Ok(SortField::Stance),
            "deck_price" => Ok(SortField::DeckPrice),
            "created_at" => Ok(SortField::CreatedAt),
            other => Err(UnknownSortField(other.to_string())),
        }
    }
}

/// Sort direction; queries default to ascending
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Returns the wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = UnknownSortOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(UnknownSortOrder(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Stance;
    use chrono::{TimeZone, Utc};

    fn skater(name: &str, age: u32) -> Skater {
        Skater {
            id: format!("id-{}", name),
            name: name.to_string(),
            age,
            email: format!("{}@example.com", name),
            stats: 50,
            stance: Stance::Mongo,
            deck_price: 40,
            created_at: None,
        }
    }

    #[test]
    fn test_parse_round_trip() {
        for field in [
            SortField::Id,
            SortField::Name,
            SortField::Age,
            SortField::Email,
            SortField::Stats,
            SortField::Stance,
            SortField::DeckPrice,
            SortField::CreatedAt,
        ] {
            assert_eq!(field.as_str().parse::<SortField>().unwrap(), field);
        }
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!("shoe_size".parse::<SortField>().is_err());
        assert!("".parse::<SortField>().is_err());
    }

    #[test]
    fn test_order_parsing_case_insensitive() {
        assert_eq!("ASC".parse::<SortOrder>().unwrap(), SortOrder::Asc);
        assert_eq!("Desc".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        assert!("ascending".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_compare_by_age() {
        let younger = skater("a", 20);
        let older = skater("b", 30);
        assert_eq!(SortField::Age.compare(&younger, &older), Ordering::Less);
        assert_eq!(SortField::Age.compare(&older, &younger), Ordering::Greater);
    }

    #[test]
    fn test_missing_created_at_compares_equal() {
        let mut with_ts = skater("a", 20);
        with_ts.created_at = Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let without_ts = skater("b", 30);

        assert_eq!(
            SortField::CreatedAt.compare(&with_ts, &without_ts),
            Ordering::Equal
        );
        assert_eq!(
            SortField::CreatedAt.compare(&without_ts, &with_ts),
            Ordering::Equal
        );
    }
}
