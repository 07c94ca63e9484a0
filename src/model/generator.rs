//! Mock roster generation
//!
//! Produces a pseudo-random dataset standing in for a real backend.
//! Value ranges match the reference demo data: age 10-60, stats 10-100,
//! deck price 25-100. Output is deterministic under a fixed seed, except
//! for `created_at`, which is anchored to the current time.

use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use super::record::{Skater, Stance};

/// Default number of records in a generated roster
pub const DEFAULT_ROSTER_SIZE: usize = 240;

const FIRST_NAMES: &[&str] = &[
    "Tony", "Rodney", "Elissa", "Stacy", "Nyjah", "Leticia", "Bam", "Chad",
    "Daewon", "Andrew", "Lizzie", "Paul", "Geoff", "Vanessa", "Kader", "Mark",
    "Aori", "Bob", "Jamie", "Rayssa", "Eric", "Chloe", "Steve", "Alexis",
    "Tom", "Sky", "Ryan", "Momiji", "Mike", "Leo", "Arto", "Yuto",
];

const EMAIL_DOMAINS: &[&str] = &["example.com", "skatemail.io", "grindbox.net", "kickflip.dev"];

/// Generates mock skater records from a seedable RNG
pub struct RosterGenerator {
    rng: StdRng,
}

impl RosterGenerator {
    /// Creates a generator from an explicit seed
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a generator seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Generates `count` records
    pub fn generate(&mut self, count: usize) -> Vec<Skater> {
        (0..count).map(|_| self.next_skater()).collect()
    }

    fn next_skater(&mut self) -> Skater {
        // Ids come from the RNG so a fixed seed reproduces the dataset.
        let id = Uuid::from_u128(self.rng.gen()).to_string();
        let name = *FIRST_NAMES.choose(&mut self.rng).unwrap_or(&"Tony");
        let domain = *EMAIL_DOMAINS.choose(&mut self.rng).unwrap_or(&"example.com");
        let discriminator: u32 = self.rng.gen_range(1..10_000);
        let email = format!("{}{}@{}", name.to_lowercase(), discriminator, domain);
        let stance = if self.rng.gen_bool(0.5) {
            Stance::Mongo
        } else {
            Stance::Goofy
        };
        let days_ago: i64 = self.rng.gen_range(0..365);

        Skater {
            id,
            name: name.to_string(),
            age: self.rng.gen_range(10..=60),
            email,
            stats: self.rng.gen_range(10..=100),
            stance,
            deck_price: self.rng.gen_range(25..=100),
            created_at: Some(Utc::now() - Duration::days(days_ago)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generates_requested_count() {
        let mut generator = RosterGenerator::from_seed(7);
        assert_eq!(generator.generate(0).len(), 0);
        assert_eq!(generator.generate(25).len(), 25);
    }

    #[test]
    fn test_ids_unique() {
        let mut generator = RosterGenerator::from_seed(7);
        let records = generator.generate(DEFAULT_ROSTER_SIZE);
        let ids: HashSet<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), records.len());
    }

    #[test]
    fn test_value_ranges() {
        let mut generator = RosterGenerator::from_seed(11);
        for skater in generator.generate(100) {
            assert!((10..=60).contains(&skater.age));
            assert!((10..=100).contains(&skater.stats));
            assert!((25..=100).contains(&skater.deck_price));
            assert!(skater.email.contains('@'));
            assert!(skater.created_at.is_some());
        }
    }

    #[test]
    fn test_seed_determinism() {
        let a = RosterGenerator::from_seed(42).generate(50);
        let b = RosterGenerator::from_seed(42).generate(50);
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.id, y.id);
            assert_eq!(x.name, y.name);
            assert_eq!(x.email, y.email);
            assert_eq!(x.age, y.age);
            assert_eq!(x.stats, y.stats);
            assert_eq!(x.stance, y.stance);
            assert_eq!(x.deck_price, y.deck_price);
        }
    }
}
