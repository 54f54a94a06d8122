//! Whitespace normalization and side splitting.

use crate::error::SolveError;

/// An equation split at its `=` sign, both sides whitespace-free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sides {
    pub left: String,
    pub right: String,
}

impl Sides {
    /// Rejoin both sides as `left=right`.
    pub fn equation(&self) -> String {
        format!("{}={}", self.left, self.right)
    }
}

/// Remove every whitespace character.
pub fn strip_whitespace(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Split a whitespace-free equation into its two sides.
///
/// Exactly one `=` is required and neither side may be empty.
pub fn split_sides(equation: &str) -> Result<Sides, SolveError> {
    let (left, right) = equation
        .split_once('=')
        .ok_or_else(|| SolveError::Format("missing '='".to_string()))?;
    if right.contains('=') {
        return Err(SolveError::Format("more than one '='".to_string()));
    }

    if left.is_empty() {
        return Err(SolveError::Format("empty left-hand side".to_string()));
    }
    if right.is_empty() {
        return Err(SolveError::Format("empty right-hand side".to_string()));
    }

    Ok(Sides {
        left: left.to_string(),
        right: right.to_string(),
    })
}

/// Strip whitespace then split: the normalizer stage of the pipeline.
pub fn normalize(raw: &str) -> Result<Sides, SolveError> {
    split_sides(&strip_whitespace(raw))
}
