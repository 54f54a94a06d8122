//! Discriminant-based solve of `a·x² + b·x + c = 0`.

use crate::error::SolveError;
use crate::format::{display_number, display_root};
use crate::linear;
use crate::normalize::Sides;
use crate::step::{self, StepRecorder};
use crate::terms::extract_standard_form;

/// `b² - 4ac`.
pub fn discriminant(a: f64, b: f64, c: f64) -> f64 {
    b * b - 4.0 * a * c
}

/// Both quadratic-formula roots `((-b + √Δ)/2a, (-b - √Δ)/2a)`.
///
/// Callers must ensure `delta >= 0`.
pub fn roots_from_discriminant(a: f64, b: f64, delta: f64) -> (f64, f64) {
    let sqrt_delta = delta.sqrt();
    let two_a = 2.0 * a;
    ((-b + sqrt_delta) / two_a, (-b - sqrt_delta) / two_a)
}

/// Solve a quadratic equation.
///
/// When the squared terms cancel out (`a == 0`) the same step log continues
/// into [`linear::solve_reduced`].
pub fn solve_quadratic(sides: &Sides, steps: &mut StepRecorder) -> Result<String, SolveError> {
    steps.record(sides.equation(), step::ORIGINAL_EQUATION);

    let coeffs = extract_standard_form(&sides.left, &sides.right)?;
    let (a, b, c) = (coeffs.quadratic, coeffs.linear, coeffs.constant);
    steps.record(
        format!(
            "{}x² + {}x + {} = 0",
            display_number(a),
            display_number(b),
            display_number(c)
        ),
        step::QUADRATIC_STANDARD_FORM,
    );

    if a == 0.0 {
        tracing::debug!(b, c, "leading coefficient vanished, reducing to linear");
        return linear::solve_reduced(b, c, steps);
    }

    let delta = discriminant(a, b, c);
    if !delta.is_finite() {
        return Err(SolveError::Format("discriminant out of range".to_string()));
    }
    steps.record(
        format!(
            "Δ = {}² - 4×{}×{} = {}",
            display_number(b),
            display_number(a),
            display_number(c),
            display_number(delta)
        ),
        step::DISCRIMINANT,
    );

    if delta < 0.0 {
        return Err(SolveError::NoRealSolution(delta));
    }

    if delta == 0.0 {
        let root = -b / (2.0 * a);
        if !root.is_finite() {
            return Err(SolveError::Format("solution out of range".to_string()));
        }
        let result = format!("x = {} (solution double)", display_root(root));
        steps.record(result.clone(), step::DOUBLE_ROOT);
        return Ok(result);
    }

    steps.record(
        format!(
            "x = [{} ± √{}] / (2×{})",
            display_number(-b),
            display_number(delta),
            display_number(a)
        ),
        step::QUADRATIC_FORMULA,
    );
    let (x1, x2) = roots_from_discriminant(a, b, delta);
    if !(x1.is_finite() && x2.is_finite()) {
        return Err(SolveError::Format("solution out of range".to_string()));
    }
    let result = format!("x₁ = {}, x₂ = {}", display_root(x1), display_root(x2));
    steps.record(result.clone(), step::EVALUATE_ROOTS);
    Ok(result)
}
