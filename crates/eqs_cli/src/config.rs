use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file, looked up in the working directory.
pub const CONFIG_FILE: &str = "eqs_config.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EqsConfig {
    /// History file; `~/.eqs_history.json` when unset.
    pub history_file: Option<PathBuf>,
    pub history_capacity: usize,
    pub persist_history: bool,
    pub show_steps: bool,
    /// Artificial delay before solving, in milliseconds.
    pub latency_ms: u64,
}

impl Default for EqsConfig {
    fn default() -> Self {
        Self {
            history_file: None,
            history_capacity: 50,
            persist_history: true,
            show_steps: true,
            latency_ms: 0,
        }
    }
}

impl EqsConfig {
    /// Load from `path` (or [`CONFIG_FILE`]), falling back to defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let path = path.unwrap_or_else(|| Path::new(CONFIG_FILE));
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "invalid config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot read config, using defaults");
                Self::default()
            }
        }
    }

    pub fn history_path(&self) -> PathBuf {
        self.history_file.clone().unwrap_or_else(|| {
            dirs::home_dir()
                .map(|p| p.join(".eqs_history.json"))
                .unwrap_or_else(|| PathBuf::from(".eqs_history.json"))
        })
    }
}
