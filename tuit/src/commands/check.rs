//! Check command: parse `.tui` files and report diagnostics without
//! generating code.

use std::path::PathBuf;

use tracing::info;
use tuic_drv::{Config as DriveConfig, EmitType, Session};

use crate::commands::common::{discover_inputs, report_diagnostics};
use crate::error::{Result, TuitError};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Input files or directories.
    pub inputs: Vec<PathBuf>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<()> {
    let inputs = discover_inputs(&args.inputs)?;

    let mut session = Session::new(DriveConfig {
        inputs: inputs.clone(),
        emit: EmitType::Ast,
        verbose: args.verbose,
    });
    let outputs = session.compile()?;

    let error_count = report_diagnostics(&outputs);
    if error_count > 0 {
        return Err(TuitError::BuildFailed(error_count));
    }

    info!("{} file(s) ok", inputs.len());
    println!("checked {} file(s), no errors", inputs.len());
    Ok(())
}
