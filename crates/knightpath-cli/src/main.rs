//! Knightpath CLI - Shortest knight paths from the command line

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;
mod session;

use commands::{completions, path, play, reach};
use config::{config_file_path, Config};
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "knightpath")]
#[command(author, version, about = "Shortest knight paths on square boards")]
pub struct Cli {
    /// Config file (default: <config dir>/knightpath/config.toml)
    #[arg(long = "config", env = "KNIGHTPATH_CONFIG", global = true)]
    pub config_file: Option<PathBuf>,

    /// Board dimension (overrides config)
    #[arg(short, long, global = true, allow_negative_numbers = true)]
    pub dimension: Option<i32>,

    /// Maximum number of moves reported as a path (overrides config)
    #[arg(short, long, global = true, allow_negative_numbers = true)]
    pub max_depth: Option<i32>,

    /// Output format (overrides config)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the shortest knight path between two cells
    Path(path::PathArgs),
    /// Show the knight distance from a cell to every cell
    Reach(reach::ReachArgs),
    /// Place the knight and targets interactively, one cell per line
    Play,
    /// Manage configuration
    Config(commands::config::ConfigArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Settings resolved from the config file and command line
pub struct AppContext {
    pub config_path: PathBuf,
    pub config: Config,
    pub dimension: i32,
    pub max_depth: i32,
    pub format: OutputFormat,
}

impl AppContext {
    pub fn new(cli: &Cli) -> Self {
        let config_path = config_file_path(cli.config_file.as_deref());
        tracing::debug!("Using config at: {:?}", config_path);

        let config = Config::load(&config_path);

        Self {
            dimension: cli.dimension.unwrap_or(config.dimension),
            max_depth: cli.max_depth.unwrap_or(config.max_depth),
            format: cli.format.unwrap_or(config.format),
            config_path,
            config,
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting knightpath CLI");

    let ctx = AppContext::new(&cli);

    let code = match &cli.command {
        Commands::Path(args) => path::run(args, &ctx)?,
        Commands::Reach(args) => {
            reach::run(args, &ctx)?;
            ExitCode::SUCCESS
        }
        Commands::Play => {
            play::run(&ctx)?;
            ExitCode::SUCCESS
        }
        Commands::Config(args) => {
            commands::config::run(args, &ctx)?;
            ExitCode::SUCCESS
        }
        Commands::Completions(args) => {
            completions::run(args)?;
            ExitCode::SUCCESS
        }
    };

    Ok(code)
}
