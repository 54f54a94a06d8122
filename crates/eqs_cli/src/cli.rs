use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "eqs",
    version,
    about = "Step-by-step solver for linear and quadratic equations in x"
)]
pub struct Cli {
    /// Config file (default: ./eqs_config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// History file, overriding the config
    #[arg(long, global = true)]
    pub history_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Solve an equation, e.g. "2x + 5 = 13"
    Solve(SolveArgs),
    /// Show or edit the saved history
    History(HistoryArgs),
    /// Interactive solver session
    Repl(ReplArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Equation to solve
    pub equation: String,

    /// Second equation, turning the input into a system (not implemented yet)
    #[arg(long)]
    pub system: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print only the result
    #[arg(long, default_value_t = false)]
    pub no_steps: bool,

    /// Do not save the solved problem to history
    #[arg(long, default_value_t = false)]
    pub no_history: bool,

    /// Delay before solving, in milliseconds
    #[arg(long)]
    pub latency_ms: Option<u64>,
}

#[derive(Args, Debug)]
pub struct HistoryArgs {
    #[command(subcommand)]
    pub action: HistoryAction,
}

#[derive(Subcommand, Debug)]
pub enum HistoryAction {
    /// List saved problems, newest first
    List {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Delete every saved problem
    Clear,
    /// Delete one saved problem by id
    Remove { id: u64 },
}

#[derive(Args, Debug)]
pub struct ReplArgs {
    /// Keep history in memory only
    #[arg(long, default_value_t = false)]
    pub no_history: bool,
}
