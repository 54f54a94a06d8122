use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod json;
mod render;
mod repl;
mod session;

use cli::{Cli, Command};
use config::EqsConfig;

fn init_tracing() {
    // RUST_LOG=eqs_solver_core=debug shows the solve phases.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let mut config = EqsConfig::load(cli.config.as_deref());
    if let Some(path) = cli.history_file {
        config.history_file = Some(path);
    }

    let outcome = match cli.command {
        Command::Solve(args) => commands::solve::run(args, &config),
        Command::History(args) => commands::history::run(args, &config),
        Command::Repl(args) => repl::run(args, &config).map(|()| ExitCode::SUCCESS),
    };

    match outcome {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
