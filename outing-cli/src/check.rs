//! Check command implementation for the outing CLI.
//!
//! Validates the catalog content files: every item's `main_category` must
//! reference a listed category, and item slugs must be unique. The loaders
//! already reject malformed JSON and invalid slugs.

use std::collections::HashSet;
use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use outing_catalog::{load_catalog, load_categories};
use serde::{Deserialize, Serialize};

use crate::{ARG_CHECK_CATALOG_DIR, CliError, DEFAULT_CATALOG_DIR};

/// CLI arguments for the `check` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "Validate catalog content files")]
#[ortho_config(prefix = "OUTING")]
pub(crate) struct CheckArgs {
    /// Directory containing the catalog content files.
    #[arg(long = ARG_CHECK_CATALOG_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) catalog_dir: Option<Utf8PathBuf>,
}

impl CheckArgs {
    fn into_catalog_dir(self) -> Result<Utf8PathBuf, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(merged
            .catalog_dir
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_CATALOG_DIR)))
    }
}

pub(super) fn run_check(args: CheckArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_check_with(args, &mut stdout)
}

pub(super) fn run_check_with(args: CheckArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let dir = args.into_catalog_dir()?;
    let catalog = load_catalog(&dir)?;
    let categories = load_categories(&dir)?;

    let known: HashSet<&str> = categories
        .iter()
        .map(|category| category.slug.as_str())
        .collect();
    let mut problems = Vec::new();
    let mut seen_slugs = HashSet::new();
    for item in &catalog {
        if !item.main_category.is_empty() && !known.contains(item.main_category.as_str()) {
            problems.push(format!(
                "item {} references unknown category {:?}",
                item.slug, item.main_category
            ));
        }
        if !seen_slugs.insert(item.slug.as_str()) {
            problems.push(format!("duplicate item slug {}", item.slug));
        }
    }

    writeln!(
        writer,
        "{} item(s), {} categor(y/ies)",
        catalog.len(),
        categories.len()
    )
    .map_err(CliError::WriteOutput)?;
    for problem in &problems {
        writeln!(writer, "problem: {problem}").map_err(CliError::WriteOutput)?;
    }

    if problems.is_empty() {
        writeln!(writer, "catalog ok").map_err(CliError::WriteOutput)?;
        Ok(())
    } else {
        Err(CliError::CheckFailed {
            problems: problems.len(),
        })
    }
}
