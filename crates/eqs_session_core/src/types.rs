use serde::{Deserialize, Serialize};

/// Identifier of a history entry.
pub type EntryId = u64;

/// What the user was working on.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProblemKind {
    Equation,
    Graph,
}

/// A submitted problem, before or without its result.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MathProblem {
    pub id: EntryId,
    pub expression: String,
    #[serde(rename = "type")]
    pub kind: ProblemKind,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
}

impl MathProblem {
    pub fn equation(id: EntryId, expression: impl Into<String>, timestamp: u64) -> Self {
        Self {
            id,
            expression: expression.into(),
            kind: ProblemKind::Equation,
            timestamp,
        }
    }
}

/// A stored problem plus its result, if one was produced.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HistoryItem {
    #[serde(flatten)]
    pub problem: MathProblem,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

impl HistoryItem {
    pub fn id(&self) -> EntryId {
        self.problem.id
    }
}

/// History retention settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Maximum number of items kept; the oldest are evicted first.
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { capacity: 50 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_serializes_flat_with_type_tag() {
        let item = HistoryItem {
            problem: MathProblem::equation(7, "x^2-4=0", 1_700_000_000_000),
            result: Some("x₁ = 2.00, x₂ = -2.00".to_string()),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["type"], "equation");
        assert_eq!(json["result"], "x₁ = 2.00, x₂ = -2.00");

        let back: HistoryItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn missing_result_is_omitted() {
        let item = HistoryItem {
            problem: MathProblem {
                id: 1,
                expression: "sin(x)".to_string(),
                kind: ProblemKind::Graph,
                timestamp: 0,
            },
            result: None,
        };
        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("result"));
        assert!(json.contains("\"graph\""));
    }
}
