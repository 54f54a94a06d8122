//! Mapping from solver and history types to the wire DTOs.

use eqs_api_models::{
    ErrorJson, HistoryItemJson, HistoryJsonOutput, SolveJsonOutput, StepJson, SCHEMA_VERSION,
};
use eqs_session_core::{HistoryItem, ProblemKind};
use eqs_solver_core::SolutionResult;

pub fn solve_output(input: Vec<String>, outcome: &SolutionResult) -> SolveJsonOutput {
    let steps = outcome
        .steps
        .iter()
        .enumerate()
        .map(|(i, step)| StepJson {
            index: i + 1,
            expression: step.expression.clone(),
            explanation: step.explanation.clone(),
        })
        .collect();

    let error = outcome.error.as_ref().map(|message| {
        let (kind, code) = outcome
            .error_kind
            .map(|k| (k.name().to_string(), k.code().to_string()))
            .unwrap_or_else(|| ("InternalError".to_string(), "E_INTERNAL".to_string()));
        ErrorJson {
            kind,
            code,
            message: message.clone(),
        }
    });

    SolveJsonOutput {
        schema_version: SCHEMA_VERSION,
        ok: outcome.is_solved(),
        input,
        result: outcome.result.clone(),
        steps,
        error,
    }
}

pub fn history_output(items: &[HistoryItem]) -> HistoryJsonOutput {
    HistoryJsonOutput::new(
        items
            .iter()
            .map(|item| HistoryItemJson {
                id: item.id(),
                expression: item.problem.expression.clone(),
                kind: match item.problem.kind {
                    ProblemKind::Equation => "equation".to_string(),
                    ProblemKind::Graph => "graph".to_string(),
                },
                timestamp: item.problem.timestamp,
                result: item.result.clone(),
            })
            .collect(),
    )
}

pub fn print_pretty_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
