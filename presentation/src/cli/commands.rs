//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for run results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Full formatted output with all stages
    Full,
    /// Only the chairman's final answer
    Final,
    /// JSON output
    Json,
}

/// CLI arguments for llm-council
#[derive(Parser, Debug)]
#[command(name = "llm-council")]
#[command(author, version, about = "LLM Council client - three-stage multi-model answers")]
#[command(long_about = r#"
llm-council submits a query to a distributed LLM council and tracks it
through three sequential stages:

1. Independent Answers: every council model answers on its own
2. Peer Review: the council reviews and ranks the answers
3. Chairman Synthesis: the chairman model produces the final answer

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./council.toml      Project-level config
3. ~/.config/llm-council/config.toml   Global config

Example:
  llm-council "What's the best way to handle errors in Rust?"
  llm-council --status --watch
  llm-council --theme dark
"#)]
pub struct Cli {
    /// The query to submit to the council
    pub query: Option<String>,

    /// Use the legacy single-call endpoint instead of per-stage calls
    #[arg(long)]
    pub single_call: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

    /// Write an HTML report of the run to this path
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Show the recent query history and exit
    #[arg(long)]
    pub history: bool,

    /// Show service health status and exit
    #[arg(long)]
    pub status: bool,

    /// With --status, keep polling on the configured interval
    #[arg(long)]
    pub watch: bool,

    /// Set and persist the display theme (light or dark)
    #[arg(long, value_name = "THEME")]
    pub theme: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
