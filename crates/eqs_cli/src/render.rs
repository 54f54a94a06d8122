//! Plain-text rendering of solutions and history for the terminal.

use std::fmt::Write;

use eqs_session_core::HistoryItem;
use eqs_solver_core::SolutionResult;

/// Render steps (optionally), result and error, one item per line.
pub fn solution_text(outcome: &SolutionResult, show_steps: bool) -> String {
    let mut out = String::new();
    if show_steps && !outcome.steps.is_empty() {
        out.push_str("Steps:\n");
        for (i, step) in outcome.steps.iter().enumerate() {
            // Multi-line expressions (systems) are indented under their number.
            let expression = step.expression.replace('\n', "\n     ");
            let _ = writeln!(out, "  {}. {}", i + 1, expression);
            let _ = writeln!(out, "     {}", step.explanation);
        }
    }
    if !outcome.result.is_empty() {
        let _ = writeln!(out, "Result: {}", outcome.result);
    }
    if let Some(error) = &outcome.error {
        let _ = writeln!(out, "Error: {}", error);
    }
    out
}

pub fn history_text(items: &[HistoryItem]) -> String {
    if items.is_empty() {
        return "History is empty.\n".to_string();
    }
    let mut out = String::new();
    for item in items {
        let _ = writeln!(
            out,
            "#{}  {}  ->  {}",
            item.id(),
            item.problem.expression,
            item.result.as_deref().unwrap_or("-")
        );
    }
    out
}
