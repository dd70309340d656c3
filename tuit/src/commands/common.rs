//! Helpers shared by the CLI commands.

use std::path::{Path, PathBuf};

use crate::error::{Result, TuitError};

/// Expand the given inputs into a list of `.tui` files.
///
/// Files are taken as-is; directories are searched recursively. The
/// result keeps a stable order so diagnostics and outputs are
/// deterministic across runs.
pub fn discover_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            collect_tui_files(input, &mut files)?;
        } else if input.exists() {
            files.push(input.clone());
        } else {
            return Err(TuitError::Input(format!(
                "{} does not exist",
                input.display()
            )));
        }
    }
    if files.is_empty() {
        return Err(TuitError::Input("no .tui files found".to_string()));
    }
    Ok(files)
}

fn collect_tui_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let mut entries: Vec<_> = std::fs::read_dir(dir)?.collect::<std::io::Result<_>>()?;
    entries.sort_by_key(|e| e.path());
    for entry in entries {
        let path = entry.path();
        if path.is_dir() {
            collect_tui_files(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == "tui") {
            files.push(path);
        }
    }
    Ok(())
}

/// Print every diagnostic line to stderr.
pub fn report_diagnostics(outputs: &[tuic_drv::FileOutput]) -> usize {
    let mut count = 0;
    for output in outputs {
        for line in &output.diagnostics {
            eprintln!("{}", line);
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_missing_input() {
        let result = discover_inputs(&[PathBuf::from("/definitely/not/here.tui")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_discover_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("b.tui"), "package b\n").expect("write");
        std::fs::write(dir.path().join("a.tui"), "package a\n").expect("write");
        std::fs::write(dir.path().join("ignore.go"), "package x\n").expect("write");
        let files = discover_inputs(&[dir.path().to_path_buf()]).expect("discovers");
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();
        assert_eq!(
            names,
            vec![Some("a.tui".to_string()), Some("b.tui".to_string())]
        );
    }
}
