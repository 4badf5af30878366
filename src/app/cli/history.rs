//! History subcommands.

use chrono::{Local, TimeZone};
use clap::Subcommand;

use crate::app::api;
use crate::domain::{AppError, HistoryEntry};

#[derive(Subcommand)]
pub enum HistoryCommands {
    /// List entries, newest first
    #[clap(visible_alias = "ls")]
    List {
        /// Only show one artifact type
        #[arg(short, long, value_parser = ["prompt", "image", "video"])]
        kind: Option<String>,
    },
    /// Delete an entry
    #[clap(visible_alias = "rm")]
    Delete { id: String },
    /// Start a fresh prompt from an entry and print it
    Reuse {
        id: String,
        #[arg(short, long)]
        format: Option<String>,
    },
}

pub fn run_history(command: HistoryCommands) -> Result<(), AppError> {
    match command {
        HistoryCommands::List { kind } => {
            let entries = api::history_list(kind.as_deref())?;
            if entries.is_empty() {
                println!("No history yet.");
            }
            for entry in &entries {
                println!("{}", summary_line(entry));
            }
        }
        HistoryCommands::Delete { id } => {
            api::history_delete(&id)?;
            println!("✅ Deleted history item {}", id);
        }
        HistoryCommands::Reuse { id, format } => {
            let outcome = api::history_reuse(&id, super::build::resolve_format(format)?)?;
            println!("{}", outcome.prompt);
        }
    }
    Ok(())
}

fn summary_line(entry: &HistoryEntry) -> String {
    let when = Local
        .timestamp_millis_opt(entry.timestamp)
        .single()
        .map(|time| time.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default();
    let prompt: String =
        entry.artifact.prompt().lines().next().unwrap_or_default().chars().take(60).collect();
    format!(
        "{}  {}  {:<6} {:<18} {}",
        entry.id,
        when,
        entry.artifact.kind(),
        entry.artifact.source(),
        prompt
    )
}
