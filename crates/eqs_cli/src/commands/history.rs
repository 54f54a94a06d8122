//! `eqs history`: list, clear or remove saved problems.

use std::process::ExitCode;

use anyhow::Result;

use crate::cli::{HistoryAction, HistoryArgs, OutputFormat};
use crate::config::EqsConfig;
use crate::json::{history_output, print_pretty_json};
use crate::render::history_text;

use super::open_history;

pub fn run(args: HistoryArgs, config: &EqsConfig) -> Result<ExitCode> {
    let mut store = open_history(config);

    match args.action {
        HistoryAction::List { format } => {
            let items = store.list();
            match format {
                OutputFormat::Json => print_pretty_json(&history_output(&items))?,
                OutputFormat::Text => print!("{}", history_text(&items)),
            }
        }
        HistoryAction::Clear => {
            store.clear()?;
            println!("History cleared.");
        }
        HistoryAction::Remove { id } => {
            if store.remove(id)? {
                println!("Removed #{}.", id);
            } else {
                eprintln!("No history entry #{}.", id);
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
