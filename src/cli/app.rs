//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::example::ExampleKind;
use super::output::{Output, OutputFormat};
use super::{config_cmd, example, schedule};
use crate::storage::Config;

#[derive(Parser)]
#[command(name = "sched")]
#[command(author, version, about = "Dependency-aware task sequencer")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the configured format, then text)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Project config file (defaults to the nearest sched.toml)
    #[arg(long, global = true, env = "SCHED_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute a recommended execution order
    Schedule {
        /// Request file (.json, .yaml, .yml) or - for stdin
        #[arg(default_value = "-")]
        input: String,

        /// Date or date-time to score due dates against (defaults to now)
        #[arg(long)]
        now: Option<String>,

        /// Show each task's urgency score and ready position
        #[arg(long)]
        explain: bool,
    },

    /// Check a request without scheduling it
    Validate {
        /// Request file (.json, .yaml, .yml) or - for stdin
        #[arg(default_value = "-")]
        input: String,
    },

    /// Print a sample request
    Example {
        /// Which sample to print
        #[arg(value_enum)]
        kind: ExampleKind,
    },

    /// Show the effective configuration
    Config,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let output = Output::new(cli.format.unwrap_or_else(|| config.format()), cli.verbose);

    output.verbose("sched starting");
    match &config.project_path {
        Some(path) => output.verbose_ctx("config", &format!("Loaded project config: {}", path.display())),
        None => output.verbose_ctx("config", "No project config found, using defaults"),
    }

    match cli.command {
        Commands::Schedule { input, now, explain } => {
            schedule::schedule(&output, &config, &input, now.as_deref(), explain)?
        }
        Commands::Validate { input } => schedule::validate(&output, &input)?,
        Commands::Example { kind } => example::run(&output, kind)?,
        Commands::Config => config_cmd::show(&output, &config)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}
