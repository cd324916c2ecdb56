//! Recommend command implementation for the outing CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use outing_catalog::{AnswerSheet, load_catalog};
use outing_core::{ScoredItem, recommend};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_RECOMMEND_ANSWERS, ARG_RECOMMEND_CATALOG_DIR, CliError, DEFAULT_CATALOG_DIR,
    DEFAULT_LIMIT, DEFAULT_ORIGIN, ENV_RECOMMEND_ANSWERS,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank catalog items against a visitor's questionnaire \
                 answers. The answers are provided as a JSON file; the \
                 catalog directory must contain an index.json.",
    about = "Rank catalog items for a visitor"
)]
#[ortho_config(prefix = "OUTING")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON file containing questionnaire answers.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) answers_path: Option<Utf8PathBuf>,
    /// Directory containing the catalog content files.
    #[arg(long = ARG_RECOMMEND_CATALOG_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) catalog_dir: Option<Utf8PathBuf>,
    /// Maximum number of suggestions to return.
    #[arg(long, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Origin city named in the response.
    #[arg(long, value_name = "city")]
    #[serde(default)]
    pub(crate) origin: Option<String>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    /// Path to the JSON answers file.
    pub(crate) answers_path: Utf8PathBuf,
    /// Directory containing `index.json`.
    pub(crate) catalog_dir: Utf8PathBuf,
    /// Maximum number of suggestions.
    pub(crate) limit: usize,
    /// Origin city echoed in the response.
    pub(crate) origin: String,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        if self.answers_path.is_file() {
            Ok(())
        } else {
            Err(CliError::MissingSourceFile {
                field: ARG_RECOMMEND_ANSWERS,
                path: self.answers_path.clone(),
            })
        }
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let answers_path = args.answers_path.ok_or(CliError::MissingArgument {
            field: ARG_RECOMMEND_ANSWERS,
            env: ENV_RECOMMEND_ANSWERS,
        })?;
        Ok(Self {
            answers_path,
            catalog_dir: args
                .catalog_dir
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_CATALOG_DIR)),
            limit: args.limit.unwrap_or(DEFAULT_LIMIT),
            origin: args.origin.unwrap_or_else(|| DEFAULT_ORIGIN.to_owned()),
        })
    }
}

/// One ranked suggestion in the response payload.
#[derive(Debug, Serialize)]
pub(crate) struct RankedItem {
    pub(crate) score: f64,
    pub(crate) reasons: Vec<&'static str>,
    pub(crate) id: String,
    pub(crate) slug: String,
    pub(crate) title: String,
    pub(crate) summary: String,
    pub(crate) main_category: String,
    pub(crate) tags: Vec<String>,
    pub(crate) emoji_tags: Vec<String>,
    pub(crate) duration: outing_core::MinutesRange,
    pub(crate) travel_from: outing_core::MinutesRange,
    pub(crate) cost: outing_core::Cost,
    pub(crate) image: Option<String>,
}

impl From<ScoredItem<'_>> for RankedItem {
    fn from(ranked: ScoredItem<'_>) -> Self {
        let item = ranked.item;
        let mut tags: Vec<String> = item.tags.iter().cloned().collect();
        tags.sort_unstable();
        Self {
            score: ranked.score,
            reasons: ranked.reasons,
            id: item.id.clone(),
            slug: item.slug.as_str().to_owned(),
            title: item.title.clone(),
            summary: item.summary.clone(),
            main_category: item.main_category.clone(),
            tags,
            emoji_tags: item.emoji_tags.clone(),
            duration: item.duration,
            travel_from: item.travel_from,
            cost: item.cost.clone(),
            image: item.image.clone(),
        }
    }
}

/// Full `recommend` response payload.
#[derive(Debug, Serialize)]
pub(crate) struct RecommendResponse {
    pub(crate) origin: String,
    pub(crate) count: usize,
    pub(crate) items: Vec<RankedItem>,
}

pub(super) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &mut stdout)
}

pub(super) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let response = execute_recommend(args)?;
    write_response(writer, &response)
}

fn execute_recommend(args: RecommendArgs) -> Result<RecommendResponse, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let catalog = load_catalog(&config.catalog_dir)?;
    let answers = load_answers(&config.answers_path)?;
    let query = answers.into_query();
    let items: Vec<RankedItem> = recommend(&catalog, &query, config.limit)
        .into_iter()
        .map(RankedItem::from)
        .collect();
    Ok(RecommendResponse {
        origin: config.origin,
        count: items.len(),
        items,
    })
}

/// Loads a JSON-encoded [`AnswerSheet`] from disk.
fn load_answers(path: &Utf8Path) -> Result<AnswerSheet, CliError> {
    let file =
        fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| {
            CliError::OpenAnswers {
                path: path.to_path_buf(),
                source,
            }
        })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseAnswers {
        path: path.to_path_buf(),
        source,
    })
}

fn write_response(writer: &mut dyn Write, response: &RecommendResponse) -> Result<(), CliError> {
    let payload =
        serde_json::to_string_pretty(response).map_err(CliError::SerializeResponse)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
