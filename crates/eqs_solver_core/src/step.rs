//! Derivation steps and the append-only recorder shared by every strategy.

use serde::Serialize;

/// One recorded `(expression, explanation)` pair of a derivation.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub expression: String,
    pub explanation: String,
}

impl Step {
    pub fn new(expression: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            explanation: explanation.into(),
        }
    }
}

/// Ordered log of steps for a single solve call.
///
/// Steps can only be appended; the log is handed out whole with
/// [`StepRecorder::into_steps`].
#[derive(Debug, Default)]
pub struct StepRecorder {
    steps: Vec<Step>,
}

impl StepRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, expression: impl Into<String>, explanation: impl Into<String>) {
        let step = Step::new(expression, explanation);
        tracing::trace!(expression = %step.expression, explanation = %step.explanation, "step");
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

// Narration shared by the strategies.

pub const ORIGINAL_EQUATION: &str = "Original equation";
pub const ALREADY_SOLVED: &str = "The equation is already solved for x";
pub const SUBTRACT_RIGHT_SIDE: &str = "Subtract the right-hand side from both sides";
pub const SIMPLIFY_TERMS: &str = "Simplify terms";
pub const QUADRATIC_STANDARD_FORM: &str = "Standard form of the quadratic equation";
pub const DISCRIMINANT: &str = "Compute the discriminant";
pub const DOUBLE_ROOT: &str = "Unique solution (zero discriminant)";
pub const QUADRATIC_FORMULA: &str = "Quadratic formula";
pub const EVALUATE_ROOTS: &str = "Evaluate both roots";
pub const SYSTEM_OF_EQUATIONS: &str = "System of equations";

pub fn divide_both_sides_message(coeff_display: &str) -> String {
    format!("Divide both sides by {}", coeff_display)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_keeps_insertion_order() {
        let mut rec = StepRecorder::new();
        rec.record("2x+5=13", ORIGINAL_EQUATION);
        rec.record("x = 4.00", divide_both_sides_message("2"));
        let steps = rec.into_steps();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].expression, "2x+5=13");
        assert_eq!(steps[1].explanation, "Divide both sides by 2");
    }

    #[test]
    fn empty_recorder() {
        let rec = StepRecorder::new();
        assert!(rec.is_empty());
        assert_eq!(rec.len(), 0);
    }
}
