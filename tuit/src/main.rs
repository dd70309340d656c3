//! Tuit CLI - command-line front door to the tuic compiler.
//!
//! Parses arguments with clap, initializes logging, loads configuration,
//! and dispatches to the command handlers.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_build, run_check, run_classes, BuildArgs, CheckArgs, ClassesArgs};
use config::Config;
use error::{Result, TuitError};
use tuic_drv::EmitType;

/// Tuit - build terminal UI components from .tui files
#[derive(Parser, Debug)]
#[command(name = "tuit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compile .tui component files into Go source", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "TUIT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "TUIT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "TUIT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile .tui files into Go source files
    Build(BuildCommand),

    /// Parse .tui files and report diagnostics without generating code
    Check(CheckCommand),

    /// List the recognized utility classes, or validate one
    Classes(ClassesCommand),
}

/// Arguments for the build subcommand.
#[derive(Parser, Debug)]
struct BuildCommand {
    /// Input .tui files or directories (default: from config)
    inputs: Vec<PathBuf>,

    /// Output directory for generated files
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// What to emit
    #[arg(long, value_enum, default_value_t = Emit::Code)]
    emit: Emit,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Input .tui files or directories
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

/// Arguments for the classes subcommand.
#[derive(Parser, Debug)]
struct ClassesCommand {
    /// Only show classes in this category
    #[arg(short = 'C', long)]
    category: Option<String>,

    /// Validate a single class instead of listing
    #[arg(long)]
    validate: Option<String>,
}

/// Emit selection as exposed on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Emit {
    Tokens,
    Ast,
    Code,
}

impl From<Emit> for EmitType {
    fn from(emit: Emit) -> Self {
        match emit {
            Emit::Tokens => EmitType::Tokens,
            Emit::Ast => EmitType::Ast,
            Emit::Code => EmitType::Code,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli)?;
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.no_color)?;
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Build(args) => run_build(
            BuildArgs {
                verbose: cli.verbose,
                inputs: args.inputs,
                output: args.output,
                emit: args.emit.into(),
            },
            &config,
        ),
        Commands::Check(args) => run_check(CheckArgs {
            verbose: cli.verbose,
            inputs: args.inputs,
        }),
        Commands::Classes(args) => run_classes(ClassesArgs {
            category: args.category,
            validate: args.validate,
        }),
    }
}

/// Initialize the logging system.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    let layer = fmt::layer()
        .with_ansi(!no_color)
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| TuitError::Config(format!("failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from an explicit path or the default location.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}
