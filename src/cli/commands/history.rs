//! History command implementation.

use std::time::Duration;

use serde_json::json;

use super::AppContext;
use crate::cli::args::{HistoryCommands, OutputFormat};
use crate::error::GymError;
use crate::features::history::HistoryStore;
use crate::output::{format_history, to_json};

/// How often `--watch` checks for changes.
const WATCH_POLL: Duration = Duration::from_millis(500);

/// Execute history subcommands.
///
/// # Errors
///
/// Returns an error if nobody is signed in or the record does not exist.
pub fn history(
    ctx: &AppContext,
    cmd: Option<HistoryCommands>,
    watch: bool,
) -> Result<String, GymError> {
    let user = ctx.current_user()?;
    let store = HistoryStore::new(&ctx.db);

    match cmd.unwrap_or(HistoryCommands::List) {
        HistoryCommands::List if watch => {
            for snapshot in store.watch(user.id).snapshots(WATCH_POLL) {
                println!("{}", format_history(&snapshot?, ctx.format)?);
            }
            Ok(String::new())
        }
        HistoryCommands::List => format_history(&store.list_for_user(user.id)?, ctx.format),
        HistoryCommands::Delete { id } => {
            store.delete(user.id, id)?;
            match ctx.format {
                OutputFormat::Json => to_json(&json!({ "deleted": id })),
                OutputFormat::Pretty => Ok(format!("Deleted history record: {id}")),
            }
        }
    }
}
