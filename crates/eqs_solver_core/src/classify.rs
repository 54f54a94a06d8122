//! Degree classification by cheap textual detection.
//!
//! Decision order, first match wins:
//! 1. `x=<signed decimal>` is already solved,
//! 2. a squared marker (`x^2`, `x²`) means quadratic,
//! 3. any `x` means linear,
//! 4. otherwise the equation is unrecognized.

use nom::{
    bytes::complete::tag,
    character::complete::{char, digit1},
    combinator::{all_consuming, opt, recognize},
    sequence::{pair, tuple},
    IResult,
};

/// Variable the solver isolates.
pub const VARIABLE: char = 'x';

/// Solving strategy picked for an equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degree {
    AlreadySolved,
    Linear,
    Quadratic,
    Unrecognized,
}

fn already_solved(input: &str) -> IResult<&str, &str> {
    all_consuming(recognize(tuple((
        tag("x="),
        opt(char('-')),
        digit1,
        opt(pair(char('.'), digit1)),
    ))))(input)
}

/// Whether a whitespace-free equation reads `x=<number>`.
pub fn is_already_solved(equation: &str) -> bool {
    already_solved(equation).is_ok()
}

pub fn has_squared_marker(equation: &str) -> bool {
    equation.contains("x^2") || equation.contains("x²")
}

/// Classify a whitespace-free equation.
pub fn classify(equation: &str) -> Degree {
    if is_already_solved(equation) {
        Degree::AlreadySolved
    } else if has_squared_marker(equation) {
        Degree::Quadratic
    } else if equation.contains(VARIABLE) {
        Degree::Linear
    } else {
        Degree::Unrecognized
    }
}
