//! Single-variable equation solver.
//!
//! Takes a textual equation in `x`, classifies it (already solved, linear,
//! quadratic), solves it in closed form and returns the result together with
//! an ordered log of derivation steps.
//!
//! ```
//! let out = eqs_solver_core::solve("2x + 5 = 13");
//! assert_eq!(out.result, "x = 4.00");
//! assert_eq!(out.steps[2].expression, "2x-8=0");
//! ```

pub mod classify;
pub mod error;
pub mod facade;
pub mod format;
pub mod linear;
pub mod normalize;
pub mod quadratic;
pub mod step;
pub mod terms;

#[cfg(test)]
mod property_tests;

pub use classify::{classify, Degree};
pub use error::{ErrorKind, SolveError};
pub use facade::{
    solve, try_solve_equation, EquationInput, SolutionResult, SolvePhase,
    SYSTEM_PLACEHOLDER_RESULT,
};
pub use normalize::{normalize, Sides};
pub use step::{Step, StepRecorder};
pub use terms::{Coefficients, Power, Term};
