//! CLI argument definitions using clap
//!
//! Commands:
//! - skatepark serve --port <port> --count <n> --seed <seed>
//! - skatepark query --limit <n> --sort <field> --query <text>
//! - skatepark generate --count <n> --out <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::model::{SortField, SortOrder, DEFAULT_ROSTER_SIZE};

/// skatepark - in-memory demo data backend for table UIs
#[derive(Parser, Debug)]
#[command(name = "skatepark")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a roster and start the HTTP server
    Serve {
        /// Host to bind
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to bind
        #[arg(long, default_value_t = 4600)]
        port: u16,

        /// Number of records to generate
        #[arg(long, default_value_t = DEFAULT_ROSTER_SIZE)]
        count: usize,

        /// RNG seed for a reproducible dataset
        #[arg(long)]
        seed: Option<u64>,

        /// Artificial response delay in milliseconds
        #[arg(long, default_value_t = 0)]
        latency_ms: u64,
    },

    /// Execute a single query against a generated roster and exit
    Query {
        /// Number of records to return
        #[arg(long, default_value_t = 10)]
        limit: usize,

        /// Number of records to skip
        #[arg(long, default_value_t = 0)]
        offset: usize,

        /// Sort field (id, name, age, email, stats, stance, deck_price, created_at)
        #[arg(long)]
        sort: Option<SortField>,

        /// Sort direction (asc or desc)
        #[arg(long, default_value_t = SortOrder::Asc)]
        order: SortOrder,

        /// Free-text filter
        #[arg(long)]
        query: Option<String>,

        /// Number of records to generate
        #[arg(long, default_value_t = DEFAULT_ROSTER_SIZE)]
        count: usize,

        /// RNG seed for a reproducible dataset
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate a roster and dump it as JSON
    Generate {
        /// Number of records to generate
        #[arg(long, default_value_t = DEFAULT_ROSTER_SIZE)]
        count: usize,

        /// RNG seed for a reproducible dataset
        #[arg(long)]
        seed: Option<u64>,

        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["skatepark", "serve"]).unwrap();
        match cli.command {
            Command::Serve {
                port,
                count,
                seed,
                latency_ms,
                ..
            } => {
                assert_eq!(port, 4600);
                assert_eq!(count, DEFAULT_ROSTER_SIZE);
                assert!(seed.is_none());
                assert_eq!(latency_ms, 0);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_query_args() {
        let cli = Cli::try_parse_from([
            "skatepark", "query", "--limit", "5", "--sort", "name", "--order", "desc",
            "--query", "goofy",
        ])
        .unwrap();
        match cli.command {
            Command::Query {
                limit,
                sort,
                order,
                query,
                ..
            } => {
                assert_eq!(limit, 5);
                assert_eq!(sort, Some(SortField::Name));
                assert_eq!(order, SortOrder::Desc);
                assert_eq!(query.as_deref(), Some("goofy"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_sort_field_rejected() {
        assert!(Cli::try_parse_from(["skatepark", "query", "--sort", "karma"]).is_err());
    }
}
