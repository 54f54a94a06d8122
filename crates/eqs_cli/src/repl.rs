//! Interactive solver loop.
//!
//! Each line is an equation; `;` separates several equations on one line.
//! `system <eq1>; <eq2>` submits a two-equation system instead. `history`,
//! `clear` and `help` manage the session, `quit`/`exit` leave.

use std::time::Duration;

use anyhow::Result;
use eqs_session_core::{HistoryConfig, HistoryStore, MemoryHistory};
use eqs_solver_core::EquationInput;
use rustyline::error::ReadlineError;

use crate::cli::ReplArgs;
use crate::commands::open_history;
use crate::config::EqsConfig;
use crate::render::{history_text, solution_text};
use crate::session::SolveSession;

const HELP: &str = "\
Enter an equation in x, e.g. 2x + 5 = 13 or x^2 - 4 = 0.
  a; b              solve several equations
  system a; b       submit a two-equation system (not implemented yet)
  history           list solved problems, newest first
  clear             clear the history
  quit | exit       leave";

/// What a REPL line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Quit,
    Help,
    History,
    Clear,
    Solve(Vec<EquationInput>),
}

pub fn parse_line(line: &str) -> ReplCommand {
    match line.trim() {
        "quit" | "exit" => ReplCommand::Quit,
        "help" => ReplCommand::Help,
        "history" => ReplCommand::History,
        "clear" => ReplCommand::Clear,
        other => {
            if let Some(rest) = other.strip_prefix("system ") {
                let equations = rest
                    .split(';')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect();
                return ReplCommand::Solve(vec![EquationInput::System(equations)]);
            }
            ReplCommand::Solve(
                other
                    .split(';')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(EquationInput::from)
                    .collect(),
            )
        }
    }
}

pub fn run(args: ReplArgs, config: &EqsConfig) -> Result<()> {
    let history: Box<dyn HistoryStore> = if config.persist_history && !args.no_history {
        open_history(config)
    } else {
        Box::new(MemoryHistory::with_config(HistoryConfig {
            capacity: config.history_capacity,
        }))
    };
    let mut session = SolveSession::new(Some(history))
        .with_latency(Duration::from_millis(config.latency_ms));

    println!("Equation solver. Type 'help' for commands.");

    let mut rl = rustyline::DefaultEditor::new()?;
    let line_history = dirs::home_dir()
        .map(|p| p.join(".eqs_repl_history"))
        .unwrap_or_else(|| std::path::PathBuf::from(".eqs_repl_history"));
    // Missing line history on first start is expected.
    let _ = rl.load_history(&line_history);

    loop {
        match rl.readline("eqs> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                rl.add_history_entry(line.as_str())?;

                match parse_line(&line) {
                    ReplCommand::Quit => break,
                    ReplCommand::Help => println!("{}", HELP),
                    ReplCommand::History => {
                        let items = session.history().map(|h| h.list()).unwrap_or_default();
                        print!("{}", history_text(&items));
                    }
                    ReplCommand::Clear => {
                        if let Some(store) = session.history_mut() {
                            store.clear()?;
                        }
                        println!("History cleared.");
                    }
                    ReplCommand::Solve(inputs) => {
                        for input in inputs {
                            let outcome = session.solve(input);
                            print!("{}", solution_text(&outcome, config.show_steps));
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    let _ = rl.save_history(&line_history);
    Ok(())
}
