//! Command-line interface for ranking gifts from exported catalogue data.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod recommend;

pub use error::CliError;

use recommend::{RecommendArgs, run_recommend};

const ARG_GIFTS: &str = "gifts";
const ARG_RECIPIENTS: &str = "recipients";
const ARG_RECIPIENT_ID: &str = "recipient-id";
const ARG_INTERESTS: &str = "interests";
const ARG_BUDGET: &str = "budget";
const ARG_LIMIT: &str = "limit";
const ARG_PERSONALISE: &str = "personalise";
const ENV_GIFTS: &str = "GIFTWISE_CMDS_RECOMMEND_GIFTS_PATH";
const ENV_RECIPIENTS: &str = "GIFTWISE_CMDS_RECOMMEND_RECIPIENTS";

/// Run the Giftwise CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, inputs, or output
/// writing fail.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "giftwise",
    about = "Rank gift ideas for a recipient from exported catalogue data",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score and rank gifts from a JSON catalogue export.
    Recommend(RecommendArgs),
}

#[cfg(test)]
mod tests;
