//! Public entry point: dispatch, phase tracking and error folding.

use std::fmt;

use serde::Serialize;

use crate::classify::{classify, Degree};
use crate::error::{ErrorKind, SolveError};
use crate::normalize::{split_sides, strip_whitespace};
use crate::step::{self, Step, StepRecorder};
use crate::{linear, quadratic};

/// Placeholder answer returned next to the "not implemented" error for systems.
pub const SYSTEM_PLACEHOLDER_RESULT: &str = "x = 1, y = 1";

/// What the caller asks to solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EquationInput {
    Single(String),
    System(Vec<String>),
}

impl From<&str> for EquationInput {
    fn from(value: &str) -> Self {
        EquationInput::Single(value.to_string())
    }
}

impl From<String> for EquationInput {
    fn from(value: String) -> Self {
        EquationInput::Single(value)
    }
}

impl From<Vec<String>> for EquationInput {
    fn from(value: Vec<String>) -> Self {
        EquationInput::System(value)
    }
}

impl<const N: usize> From<[&str; N]> for EquationInput {
    fn from(value: [&str; N]) -> Self {
        EquationInput::System(value.iter().map(|s| s.to_string()).collect())
    }
}

/// Lifecycle of one solve call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolvePhase {
    Idle,
    Normalizing,
    Classified,
    Solving,
    Solved,
    Failed,
}

impl fmt::Display for SolvePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SolvePhase::Idle => "idle",
            SolvePhase::Normalizing => "normalizing",
            SolvePhase::Classified => "classified",
            SolvePhase::Solving => "solving",
            SolvePhase::Solved => "solved",
            SolvePhase::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Uniform outcome of [`solve`].
///
/// For single equations `error` set implies empty `result` and `steps`.
/// The system stub is the one exception: it carries its descriptive step and
/// [`SYSTEM_PLACEHOLDER_RESULT`] alongside the error.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SolutionResult {
    pub steps: Vec<Step>,
    pub result: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
}

impl SolutionResult {
    fn solved(steps: Vec<Step>, result: String) -> Self {
        Self {
            steps,
            result,
            error: None,
            error_kind: None,
        }
    }

    fn failed(err: &SolveError) -> Self {
        Self {
            steps: Vec::new(),
            result: String::new(),
            error: Some(err.to_string()),
            error_kind: Some(err.kind()),
        }
    }

    pub fn is_solved(&self) -> bool {
        self.error.is_none()
    }

    /// Terminal phase this result represents.
    pub fn phase(&self) -> SolvePhase {
        if self.is_solved() {
            SolvePhase::Solved
        } else {
            SolvePhase::Failed
        }
    }
}

fn enter(phase: SolvePhase) {
    tracing::debug!(%phase, "solve phase");
}

/// Solve a single whitespace-tolerant equation, returning the result string
/// and the recorded steps, or the first error.
pub fn try_solve_equation(raw: &str) -> Result<(String, Vec<Step>), SolveError> {
    enter(SolvePhase::Normalizing);
    let equation = strip_whitespace(raw);
    let sides = split_sides(&equation)?;

    let degree = classify(&equation);
    enter(SolvePhase::Classified);
    tracing::debug!(?degree, equation = %equation, "classified");

    let mut steps = StepRecorder::new();
    let result = match degree {
        Degree::AlreadySolved => {
            steps.record(equation.clone(), step::ALREADY_SOLVED);
            equation
        }
        Degree::Quadratic => {
            enter(SolvePhase::Solving);
            quadratic::solve_quadratic(&sides, &mut steps)?
        }
        Degree::Linear => {
            enter(SolvePhase::Solving);
            linear::solve_linear(&sides, &mut steps)?
        }
        Degree::Unrecognized => return Err(SolveError::Unrecognized),
    };

    Ok((result, steps.into_steps()))
}

fn solve_system(equations: &[String]) -> SolutionResult {
    if equations.len() != 2 {
        return SolutionResult::failed(&SolveError::UnsupportedSystemSize(equations.len()));
    }

    let err = SolveError::UnsupportedSystem;
    SolutionResult {
        steps: vec![Step::new(equations.join("\n"), step::SYSTEM_OF_EQUATIONS)],
        result: SYSTEM_PLACEHOLDER_RESULT.to_string(),
        error: Some(err.to_string()),
        error_kind: Some(err.kind()),
    }
}

/// Solve an equation (or the stubbed two-equation system).
///
/// Never panics and never returns an `Err`: failures are reported through
/// [`SolutionResult::error`].
pub fn solve(input: impl Into<EquationInput>) -> SolutionResult {
    enter(SolvePhase::Idle);
    let outcome = match input.into() {
        EquationInput::System(equations) => solve_system(&equations),
        EquationInput::Single(raw) => match try_solve_equation(&raw) {
            Ok((result, steps)) => SolutionResult::solved(steps, result),
            Err(err) => SolutionResult::failed(&err),
        },
    };
    enter(outcome.phase());
    outcome
}
