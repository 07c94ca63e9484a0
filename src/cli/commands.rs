//! CLI command implementations
//!
//! The roster is generated here, once, and handed to whatever consumes
//! it; no command keeps module-level state.

use std::path::PathBuf;

use crate::model::{SortField, SortOrder};
use crate::observability::Logger;
use crate::query::{QueryEngine, QueryOptions};
use crate::rest_api::{RestServer, RosterHandler, ServerConfig};
use crate::store::{DemoDeleter, Roster};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{write_json, write_json_file};

/// Parse arguments and dispatch to a command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Serve {
            host,
            port,
            count,
            seed,
            latency_ms,
        } => serve(host, port, count, seed, latency_ms),
        Command::Query {
            limit,
            offset,
            sort,
            order,
            query: text,
            count,
            seed,
        } => query(limit, offset, sort, order, text, count, seed),
        Command::Generate { count, seed, out } => generate(count, seed, out),
    }
}

/// Generate a roster and serve it over HTTP until interrupted
pub fn serve(
    host: String,
    port: u16,
    count: usize,
    seed: Option<u64>,
    latency_ms: u64,
) -> CliResult<()> {
    let roster = Roster::generate(count, seed);
    Logger::info("roster_generated", &[("records", &roster.len().to_string())]);

    let config = ServerConfig {
        host,
        port,
        latency_ms,
    };
    let handler = RosterHandler::new(roster, DemoDeleter::new());
    let server = RestServer::new(handler, config);

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("runtime init: {}", e)))?;
    runtime
        .block_on(server.start())
        .map_err(|e| CliError::serve_failed(e.to_string()))
}

/// Execute one query against a freshly generated roster and print the page
pub fn query(
    limit: usize,
    offset: usize,
    sort: Option<SortField>,
    order: SortOrder,
    text: Option<String>,
    count: usize,
    seed: Option<u64>,
) -> CliResult<()> {
    let roster = Roster::generate(count, seed);
    let options = QueryOptions {
        limit,
        offset,
        sort,
        order,
        query: text,
    };

    let page = QueryEngine::execute(&roster, &options);
    write_json(&page)
}

/// Generate a roster and dump it as JSON
pub fn generate(count: usize, seed: Option<u64>, out: Option<PathBuf>) -> CliResult<()> {
    let roster = Roster::generate(count, seed);

    match out {
        Some(path) => {
            write_json_file(&path, &roster.records())?;
            Logger::info(
                "roster_written",
                &[
                    ("path", &path.display().to_string()),
                    ("records", &roster.len().to_string()),
                ],
            );
            Ok(())
        }
        None => write_json(&roster.records()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");

        generate(15, Some(4), Some(path.clone())).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let records: Vec<serde_json::Value> = serde_json::from_str(&content).unwrap();
        assert_eq!(records.len(), 15);
        assert!(records[0].get("id").is_some());
        assert!(records[0].get("stance").is_some());
    }

    #[test]
    fn test_generate_is_seed_reproducible() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.json");
        let b = dir.path().join("b.json");

        generate(20, Some(77), Some(a.clone())).unwrap();
        generate(20, Some(77), Some(b.clone())).unwrap();

        let parse = |p: &std::path::Path| -> Vec<serde_json::Value> {
            serde_json::from_str(&std::fs::read_to_string(p).unwrap()).unwrap()
        };
        let (records_a, records_b) = (parse(&a), parse(&b));
        for (x, y) in records_a.iter().zip(records_b.iter()) {
            assert_eq!(x["id"], y["id"]);
            assert_eq!(x["name"], y["name"]);
            assert_eq!(x["age"], y["age"]);
        }
    }
}
