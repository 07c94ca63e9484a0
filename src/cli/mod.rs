//! CLI module for skatepark
//!
//! Provides command-line interface for:
//! - serve: generate a roster and start the HTTP server
//! - query: one-shot query against a generated roster
//! - generate: dump a generated roster as JSON

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{generate, query, run, serve};
pub use errors::{CliError, CliResult};
pub use io::{write_json, write_json_file};
