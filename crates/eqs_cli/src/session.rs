//! Orchestration around the pure solver: optional latency, history saving.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use eqs_session_core::{HistoryStore, MathProblem};
use eqs_solver_core::{solve, EquationInput, SolutionResult};

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Solves problems and records the solved ones in an injected history store.
pub struct SolveSession {
    history: Option<Box<dyn HistoryStore>>,
    latency: Duration,
}

impl SolveSession {
    pub fn new(history: Option<Box<dyn HistoryStore>>) -> Self {
        Self {
            history,
            latency: Duration::ZERO,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn history(&self) -> Option<&dyn HistoryStore> {
        self.history.as_deref()
    }

    pub fn history_mut(&mut self) -> Option<&mut (dyn HistoryStore + 'static)> {
        self.history.as_deref_mut()
    }

    /// Solve one input. Only solved single equations are saved; a failed
    /// history write is logged and does not affect the returned result.
    pub fn solve(&mut self, input: EquationInput) -> SolutionResult {
        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }

        let outcome = solve(input.clone());

        if let (Some(store), EquationInput::Single(expression), true) =
            (self.history.as_deref_mut(), &input, outcome.is_solved())
        {
            let problem = MathProblem::equation(store.next_id(), expression.clone(), now_millis());
            if let Err(e) = store.save(problem, Some(outcome.result.clone())) {
                tracing::warn!(error = %e, "failed to save history");
            }
        }

        outcome
    }
}
