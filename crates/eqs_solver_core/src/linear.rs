//! Closed-form solve of `b·x + c = 0`.

use crate::error::SolveError;
use crate::format::{display_linear_form, display_number, display_root};
use crate::normalize::Sides;
use crate::step::{self, StepRecorder};
use crate::terms::extract_standard_form;

/// Render `left - (right) = 0`, or `left=0` when the right side is already zero.
fn subtract_right_side(sides: &Sides) -> String {
    if sides.right == "0" {
        format!("{}=0", sides.left)
    } else {
        format!("{}-({})=0", sides.left, sides.right)
    }
}

/// Solve a linear equation, recording the original equation, the
/// rearrangement, the reduced form and the isolated variable.
pub fn solve_linear(sides: &Sides, steps: &mut StepRecorder) -> Result<String, SolveError> {
    steps.record(sides.equation(), step::ORIGINAL_EQUATION);
    steps.record(subtract_right_side(sides), step::SUBTRACT_RIGHT_SIDE);

    let coeffs = extract_standard_form(&sides.left, &sides.right)?;
    solve_reduced(coeffs.linear, coeffs.constant, steps)
}

/// Solve `coef·x + constant = 0` from already reduced coefficients.
///
/// Records the reduced form, then the division step on success.
pub fn solve_reduced(
    coef: f64,
    constant: f64,
    steps: &mut StepRecorder,
) -> Result<String, SolveError> {
    steps.record(display_linear_form(coef, constant), step::SIMPLIFY_TERMS);

    if coef == 0.0 {
        return Err(if constant == 0.0 {
            SolveError::InfiniteSolutions
        } else {
            SolveError::NoSolution
        });
    }

    let solution = -constant / coef;
    if !solution.is_finite() {
        return Err(SolveError::Format("solution out of range".to_string()));
    }
    let result = format!("x = {}", display_root(solution));
    steps.record(
        result.clone(),
        step::divide_both_sides_message(&display_number(coef)),
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    #[test]
    fn solves_and_records_four_steps() {
        let sides = normalize("2x + 5 = 13").unwrap();
        let mut rec = StepRecorder::new();
        let result = solve_linear(&sides, &mut rec).unwrap();
        assert_eq!(result, "x = 4.00");

        let steps = rec.into_steps();
        let expressions: Vec<&str> = steps.iter().map(|s| s.expression.as_str()).collect();
        assert_eq!(expressions, vec!["2x+5=13", "2x+5-(13)=0", "2x-8=0", "x = 4.00"]);
        assert_eq!(steps[3].explanation, "Divide both sides by 2");
    }

    #[test]
    fn zero_right_side_is_not_subtracted() {
        let sides = normalize("3x-6=0").unwrap();
        let mut rec = StepRecorder::new();
        assert_eq!(solve_linear(&sides, &mut rec).unwrap(), "x = 2.00");
        assert_eq!(rec.steps()[1].expression, "3x-6=0");
    }

    #[test]
    fn variable_terms_on_both_sides() {
        let sides = normalize("5x - 3 = 2x + 9").unwrap();
        let mut rec = StepRecorder::new();
        assert_eq!(solve_linear(&sides, &mut rec).unwrap(), "x = 4.00");
        assert_eq!(rec.steps()[2].expression, "3x-12=0");
    }

    #[test]
    fn degenerate_coefficients() {
        let mut rec = StepRecorder::new();
        let sides = normalize("x + 1 = x + 2").unwrap();
        assert_eq!(solve_linear(&sides, &mut rec), Err(SolveError::NoSolution));

        let mut rec = StepRecorder::new();
        let sides = normalize("2x + 1 = 2x + 1").unwrap();
        assert_eq!(
            solve_linear(&sides, &mut rec),
            Err(SolveError::InfiniteSolutions)
        );
    }

    #[test]
    fn zero_solution_has_no_negative_sign() {
        let mut rec = StepRecorder::new();
        assert_eq!(solve_reduced(-3.0, 0.0, &mut rec).unwrap(), "x = 0.00");
    }

    #[test]
    fn overflowing_quotient_is_rejected() {
        let mut rec = StepRecorder::new();
        assert_eq!(
            solve_reduced(1e-300, -1e300, &mut rec),
            Err(SolveError::Format("solution out of range".to_string()))
        );
    }

    #[test]
    fn malformed_term_fails() {
        let sides = normalize("2x + 5y = 1").unwrap();
        let mut rec = StepRecorder::new();
        assert!(matches!(
            solve_linear(&sides, &mut rec),
            Err(SolveError::MalformedTerm(_))
        ));
    }
}
