//! `eqs solve`: one-shot solve with optional history saving.

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use eqs_solver_core::EquationInput;

use crate::cli::{OutputFormat, SolveArgs};
use crate::config::EqsConfig;
use crate::json::{print_pretty_json, solve_output};
use crate::render::solution_text;
use crate::session::SolveSession;

use super::open_history;

pub fn run(args: SolveArgs, config: &EqsConfig) -> Result<ExitCode> {
    let history = if config.persist_history && !args.no_history {
        Some(open_history(config))
    } else {
        None
    };
    let latency = Duration::from_millis(args.latency_ms.unwrap_or(config.latency_ms));
    let mut session = SolveSession::new(history).with_latency(latency);

    let raw: Vec<String> = std::iter::once(args.equation.clone())
        .chain(args.system.clone())
        .collect();
    let input = match args.system {
        Some(second) => EquationInput::System(vec![args.equation, second]),
        None => EquationInput::Single(args.equation),
    };

    let outcome = session.solve(input);

    match args.format {
        OutputFormat::Json => print_pretty_json(&solve_output(raw, &outcome))?,
        OutputFormat::Text => {
            let show_steps = config.show_steps && !args.no_steps;
            print!("{}", solution_text(&outcome, show_steps));
        }
    }

    Ok(if outcome.is_solved() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
