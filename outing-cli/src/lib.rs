//! Command-line interface for the outing recommendation engine.
//!
//! Two subcommands are exposed: `recommend` ranks catalog items against a
//! visitor's questionnaire answers and prints the JSON response, and `check`
//! validates the catalog content files. Options merge from CLI flags,
//! configuration files, and `OUTING_*` environment variables.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod check;
mod error;
mod recommend;

pub use error::CliError;

const ARG_RECOMMEND_ANSWERS: &str = "answers";
const ARG_RECOMMEND_CATALOG_DIR: &str = "catalog-dir";
const ARG_CHECK_CATALOG_DIR: &str = "catalog-dir";
const ENV_RECOMMEND_ANSWERS: &str = "OUTING_CMDS_RECOMMEND_ANSWERS_PATH";

const DEFAULT_CATALOG_DIR: &str = "content";
const DEFAULT_LIMIT: usize = 12;
const DEFAULT_ORIGIN: &str = "Darmstadt";

/// Run the outing CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] when argument parsing, configuration merging, or
/// the selected command fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => recommend::run_recommend(args),
        Command::Check(args) => check::run_check(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "outing",
    about = "Recommendation tooling for the outing portal",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank catalog items against a visitor's questionnaire answers.
    Recommend(recommend::RecommendArgs),
    /// Validate the catalog content files.
    Check(check::CheckArgs),
}

#[cfg(test)]
mod tests;
