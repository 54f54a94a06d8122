//! JSON DTOs for the CLI and any other wire consumer.
//!
//! Kept independent of solver internals; frontends map into these types.

use serde::{Deserialize, Serialize};

/// Stable schema version for JSON outputs.
pub const SCHEMA_VERSION: u8 = 1;

/// One derivation step.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StepJson {
    pub index: usize,
    pub expression: String,
    pub explanation: String,
}

/// Error payload of a failed solve.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorJson {
    pub kind: String,
    pub code: String,
    pub message: String,
}

/// Output of `eqs solve --format json`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SolveJsonOutput {
    pub schema_version: u8,
    pub ok: bool,
    pub input: Vec<String>,
    pub result: String,
    pub steps: Vec<StepJson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorJson>,
}

/// One history row.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HistoryItemJson {
    pub id: u64,
    pub expression: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub timestamp: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

/// Output of `eqs history list --format json`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HistoryJsonOutput {
    pub schema_version: u8,
    pub items: Vec<HistoryItemJson>,
}

impl HistoryJsonOutput {
    pub fn new(items: Vec<HistoryItemJson>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_is_omitted_on_success() {
        let out = SolveJsonOutput {
            schema_version: SCHEMA_VERSION,
            ok: true,
            input: vec!["x=5".into()],
            result: "x=5".into(),
            steps: vec![StepJson {
                index: 1,
                expression: "x=5".into(),
                explanation: "The equation is already solved for x".into(),
            }],
            error: None,
        };
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["schema_version"], 1);
        assert!(json.get("error").is_none());
        assert_eq!(json["steps"][0]["index"], 1);
    }

    #[test]
    fn history_item_uses_type_key() {
        let out = HistoryJsonOutput::new(vec![HistoryItemJson {
            id: 3,
            expression: "x^2=4".into(),
            kind: "equation".into(),
            timestamp: 10,
            result: None,
        }]);
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["items"][0]["type"], "equation");
        assert!(json["items"][0].get("result").is_none());
    }
}
