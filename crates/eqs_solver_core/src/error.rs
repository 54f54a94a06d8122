use thiserror::Error;

/// Failure taxonomy of the solver.
///
/// Never crosses the facade: [`crate::solve`] folds it into
/// [`crate::SolutionResult::error`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    #[error("Invalid equation format: {0}")]
    Format(String),
    #[error("Invalid equation format: cannot read term '{0}'")]
    MalformedTerm(String),
    #[error("Unrecognized equation type: no variable found")]
    Unrecognized,
    #[error("No solution")]
    NoSolution,
    #[error("Infinitely many solutions")]
    InfiniteSolutions,
    #[error("No real solution (negative discriminant {0})")]
    NoRealSolution(f64),
    #[error("Solving systems of equations is not implemented yet")]
    UnsupportedSystem,
    #[error("Only 2x2 systems are supported, got {0} equations")]
    UnsupportedSystemSize(usize),
}

/// Stable error classes, one per row of the error taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum ErrorKind {
    FormatError,
    UnrecognizedEquationError,
    NoSolutionError,
    InfiniteSolutionsError,
    NoRealSolutionError,
    UnsupportedSystemError,
}

impl ErrorKind {
    /// Machine-readable code used by JSON output.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::FormatError => "E_FORMAT",
            ErrorKind::UnrecognizedEquationError => "E_UNRECOGNIZED",
            ErrorKind::NoSolutionError => "E_NO_SOLUTION",
            ErrorKind::InfiniteSolutionsError => "E_INFINITE_SOLUTIONS",
            ErrorKind::NoRealSolutionError => "E_NO_REAL_SOLUTION",
            ErrorKind::UnsupportedSystemError => "E_UNSUPPORTED_SYSTEM",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ErrorKind::FormatError => "FormatError",
            ErrorKind::UnrecognizedEquationError => "UnrecognizedEquationError",
            ErrorKind::NoSolutionError => "NoSolutionError",
            ErrorKind::InfiniteSolutionsError => "InfiniteSolutionsError",
            ErrorKind::NoRealSolutionError => "NoRealSolutionError",
            ErrorKind::UnsupportedSystemError => "UnsupportedSystemError",
        }
    }
}

impl SolveError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SolveError::Format(_) | SolveError::MalformedTerm(_) => ErrorKind::FormatError,
            SolveError::Unrecognized => ErrorKind::UnrecognizedEquationError,
            SolveError::NoSolution => ErrorKind::NoSolutionError,
            SolveError::InfiniteSolutions => ErrorKind::InfiniteSolutionsError,
            SolveError::NoRealSolution(_) => ErrorKind::NoRealSolutionError,
            SolveError::UnsupportedSystem | SolveError::UnsupportedSystemSize(_) => {
                ErrorKind::UnsupportedSystemError
            }
        }
    }
}
