//! Recommend command implementation for the Giftwise CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use giftwise_core::{DEFAULT_LIMIT, RecommendRequest, RecommendResponse};
use giftwise_data::{JsonGiftCatalogue, Recipient, RecipientDirectory, source::is_regular_file};
use giftwise_scorer::{PersonalisationScorer, Recommender};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_BUDGET, ARG_GIFTS, ARG_INTERESTS, ARG_LIMIT, ARG_PERSONALISE, ARG_RECIPIENT_ID,
    ARG_RECIPIENTS, CliError, ENV_GIFTS, ENV_RECIPIENTS,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank gifts from a JSON catalogue export. Interests and \
                 budget narrow and personalise the ranking; a recipient \
                 export supplies gift history so repeat gifts are demoted.",
    about = "Rank gifts for a recipient"
)]
#[ortho_config(prefix = "GIFTWISE")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON array of gift records.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) gifts_path: Option<Utf8PathBuf>,
    /// Path to a JSON array of recipient records.
    #[arg(long = ARG_RECIPIENTS, value_name = "path")]
    #[serde(default)]
    pub(crate) recipients: Option<Utf8PathBuf>,
    /// Identifier of the recipient whose history and interests apply.
    #[arg(long = ARG_RECIPIENT_ID, value_name = "id")]
    #[serde(default)]
    pub(crate) recipient_id: Option<u64>,
    /// Comma-separated interests; defaults to the recipient's interests.
    /// Only applied when a recipient is selected.
    #[arg(long = ARG_INTERESTS, value_name = "csv")]
    #[serde(default)]
    pub(crate) interests: Option<String>,
    /// Spending target; gifts up to 20% above it stay eligible.
    #[arg(long = ARG_BUDGET, value_name = "amount")]
    #[serde(default)]
    pub(crate) budget: Option<f64>,
    /// Maximum number of gifts to rank (default 15).
    #[arg(long = ARG_LIMIT, value_name = "n")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Apply interest and history adjustments (default true).
    #[arg(long = ARG_PERSONALISE, value_name = "bool")]
    #[serde(default)]
    pub(crate) personalise: Option<bool>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Recipient selection: the export to search and the identifier to find.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecipientSelection {
    pub(crate) path: Utf8PathBuf,
    pub(crate) id: u64,
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecommendConfig {
    /// Path to the gift export.
    pub(crate) gifts_path: Utf8PathBuf,
    /// Path to the recipient export, if supplied.
    pub(crate) recipients_path: Option<Utf8PathBuf>,
    /// Recipient to personalise for, if any.
    pub(crate) recipient: Option<RecipientSelection>,
    /// Explicit interests; `None` defers to the recipient record.
    pub(crate) interests: Option<Vec<String>>,
    /// Spending target.
    pub(crate) budget: Option<f64>,
    /// Maximum number of gifts to rank.
    pub(crate) limit: usize,
    /// Whether personalisation applies.
    pub(crate) personalise: bool,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.gifts_path, ARG_GIFTS)?;
        if let Some(path) = &self.recipients_path {
            Self::require_existing(path, ARG_RECIPIENTS)?;
        }
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match is_regular_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub(crate) fn load_recipient(&self) -> Result<Option<Recipient>, CliError> {
        let Some(selection) = &self.recipient else {
            return Ok(None);
        };
        let directory = RecipientDirectory::open(&selection.path)?;
        directory
            .get(selection.id)
            .cloned()
            .map(Some)
            .ok_or_else(|| CliError::UnknownRecipient {
                id: selection.id,
                path: selection.path.clone(),
            })
    }

    pub(crate) fn request_for(&self, recipient: Option<&Recipient>) -> RecommendRequest {
        let interests = match (&self.interests, recipient) {
            (Some(interests), _) => interests.clone(),
            (None, Some(recipient)) => recipient.interests.clone(),
            (None, None) => Vec::new(),
        };
        RecommendRequest {
            interests,
            budget: self.budget,
            limit: self.limit,
            personalise: self.personalise,
        }
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let gifts_path = args.gifts_path.ok_or(CliError::MissingArgument {
            field: ARG_GIFTS,
            env: ENV_GIFTS,
        })?;
        let recipient = match (args.recipient_id, &args.recipients) {
            (Some(id), Some(path)) => Some(RecipientSelection {
                path: path.clone(),
                id,
            }),
            (Some(_), None) => {
                return Err(CliError::MissingArgument {
                    field: ARG_RECIPIENTS,
                    env: ENV_RECIPIENTS,
                });
            }
            (None, _) => None,
        };
        let interests = args.interests.as_deref().map(split_interests);

        Ok(Self {
            gifts_path,
            recipients_path: args.recipients,
            recipient,
            interests,
            budget: args.budget,
            limit: args.limit.unwrap_or(DEFAULT_LIMIT),
            personalise: args.personalise.unwrap_or(true),
        })
    }
}

fn split_interests(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|interest| !interest.is_empty())
        .map(str::to_owned)
        .collect()
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &mut stdout)
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_recommend_config(args)?;
    let response = execute_recommend(&config)?;
    write_recommend_response(writer, &response)
}

fn resolve_recommend_config(args: RecommendArgs) -> Result<RecommendConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn execute_recommend(config: &RecommendConfig) -> Result<RecommendResponse, CliError> {
    let catalogue = JsonGiftCatalogue::open(&config.gifts_path)?;
    let recipient = config.load_recipient()?;
    let request = config.request_for(recipient.as_ref());
    log::debug!(
        "recommending from {} gifts (recipient: {:?})",
        catalogue.len(),
        recipient.as_ref().map(|entry| entry.id)
    );
    let recommender = Recommender::new(catalogue, PersonalisationScorer::default());
    let history = recipient.as_ref().map(|entry| &entry.gift_history);
    Ok(recommender.recommend(&request, history)?)
}

fn write_recommend_response(
    writer: &mut dyn Write,
    response: &RecommendResponse,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(response).map_err(CliError::SerialiseResponse)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
