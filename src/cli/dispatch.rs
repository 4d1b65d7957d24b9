//! Command dispatch logic extracted from binary to reduce main function size.

use super::{
    args::Commands,
    handlers::{handle_classify, handle_export, handle_score},
};
use crate::exit::NewsCheckExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands) -> Result<NewsCheckExit> {
    match command {
        Commands::Classify {
            file,
            page,
            detail,
            json,
            run,
        } => handle_classify(&file, page, detail, json, &run),
        Commands::Export { file, out, run } => handle_export(&file, out.as_deref(), &run),
        Commands::Score { text, json, seed } => handle_score(&text, json, seed),
    }
}
