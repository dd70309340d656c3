//! Build command: compile `.tui` files into Go source files.

use std::path::PathBuf;

use tracing::{debug, info};
use tuic_drv::{output_path, Config as DriveConfig, EmitType, Session};

use crate::commands::common::{discover_inputs, report_diagnostics};
use crate::config::Config;
use crate::error::{Result, TuitError};

/// Arguments for the build command.
#[derive(Debug, Clone, Default)]
pub struct BuildArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Input files or directories.
    pub inputs: Vec<PathBuf>,
    /// Output directory for generated files.
    pub output: Option<PathBuf>,
    /// What to emit.
    pub emit: EmitType,
}

/// Run the build command.
pub fn run_build(args: BuildArgs, config: &Config) -> Result<()> {
    let inputs = resolve_inputs(&args.inputs, config)?;
    let out_dir = args
        .output
        .or_else(|| config.output_dir.as_ref().map(PathBuf::from));

    info!("building {} file(s)", inputs.len());

    let mut session = Session::new(DriveConfig {
        inputs: inputs.clone(),
        emit: args.emit,
        verbose: args.verbose,
    });
    let outputs = session.compile()?;

    let error_count = report_diagnostics(&outputs);
    if error_count > 0 {
        return Err(TuitError::BuildFailed(error_count));
    }

    if let Some(dir) = &out_dir {
        std::fs::create_dir_all(dir)?;
    }
    for (input, output) in inputs.iter().zip(&outputs) {
        match args.emit {
            EmitType::Code => {
                let target = output_path(input, out_dir.as_deref());
                std::fs::write(&target, &output.output)?;
                debug!("wrote {}", target.display());
            }
            // token and AST dumps go to stdout
            _ => print!("{}", output.output),
        }
    }

    info!("build complete");
    Ok(())
}

/// Inputs from the command line, or the configured input directory.
fn resolve_inputs(inputs: &[PathBuf], config: &Config) -> Result<Vec<PathBuf>> {
    if !inputs.is_empty() {
        return discover_inputs(inputs);
    }
    match &config.input_dir {
        Some(dir) => discover_inputs(&[PathBuf::from(dir)]),
        None => Err(TuitError::Input(
            "no inputs given and no input_dir configured".to_string(),
        )),
    }
}
