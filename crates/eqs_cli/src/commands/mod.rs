//! Subcommand handlers.

pub mod history;
pub mod solve;

use eqs_session_core::{HistoryConfig, HistoryStore, JsonFileHistory};

use crate::config::EqsConfig;

/// Open the persistent history store described by `config`.
pub fn open_history(config: &EqsConfig) -> Box<dyn HistoryStore> {
    Box::new(JsonFileHistory::with_config(
        config.history_path(),
        HistoryConfig {
            capacity: config.history_capacity,
        },
    ))
}
