//! tuic-drv - Compilation driver.
//!
//! The driver owns one compilation session: it reads `.tui` sources into a
//! [`SourceMap`], runs the per-file pipeline (lex, parse, generate), and
//! aggregates outputs and rendered diagnostics.
//!
//! The front-end itself is single-threaded and synchronous; parallelism
//! happens only here, by giving every file its own independent
//! lexer+parser pair (and its own diagnostic handler) and fanning the
//! files out over rayon. Outputs come back in input order regardless of
//! scheduling.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use thiserror::Error;

use tuic_lex::{Lexer, TokenKind};
use tuic_par::Parser;
use tuic_util::{Handler, SourceFile, SourceMap};

/// What the pipeline should produce per file
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmitType {
    /// Token stream dump
    Tokens,
    /// AST dump
    Ast,
    /// Generated Go source
    #[default]
    Code,
}

/// Driver configuration
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Input `.tui` files
    pub inputs: Vec<PathBuf>,
    /// What to produce
    pub emit: EmitType,
    /// Trace per-file progress to stderr
    pub verbose: bool,
}

/// Result of compiling one file
#[derive(Clone, Debug)]
pub struct FileOutput {
    /// Source file name
    pub name: String,
    /// Emitted artifact; empty when errors prevented emission
    pub output: String,
    /// Rendered diagnostic lines, in detection order
    pub diagnostics: Vec<String>,
}

impl FileOutput {
    /// True when this file produced at least one diagnostic
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Driver error
#[derive(Debug, Error)]
pub enum DriveError {
    /// Reading an input file failed
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The session has no inputs
    #[error("no input files")]
    NoInputs,
}

/// One compiler invocation
pub struct Session {
    config: Config,
    sources: SourceMap,
}

impl Session {
    /// Create a session for the given configuration
    pub fn new(config: Config) -> Self {
        Self {
            config,
            sources: SourceMap::new(),
        }
    }

    /// Add an in-memory source (tests, editors)
    pub fn add_source(&mut self, name: impl Into<String>, content: impl Into<std::sync::Arc<str>>) {
        self.sources.add_file(name, content);
    }

    /// Read every configured input from disk
    pub fn read_sources(&mut self) -> Result<(), DriveError> {
        for path in &self.config.inputs {
            if self.config.verbose {
                eprintln!("reading {}", path.display());
            }
            let content = std::fs::read_to_string(path).map_err(|source| DriveError::Io {
                path: path.clone(),
                source,
            })?;
            self.sources.add_file(path.display().to_string(), content);
        }
        Ok(())
    }

    /// Compile every source in the session.
    ///
    /// Files compile in parallel with independent lexer+parser pairs;
    /// outputs are returned in input order.
    pub fn compile(&mut self) -> Result<Vec<FileOutput>, DriveError> {
        self.read_sources()?;
        if self.sources.is_empty() {
            return Err(DriveError::NoInputs);
        }
        if self.config.verbose {
            eprintln!("compiling {} file(s)", self.sources.len());
        }

        let emit = self.config.emit;
        let outputs = self
            .sources
            .files()
            .par_iter()
            .map(|file| compile_file(file, emit))
            .collect();
        Ok(outputs)
    }
}

/// Run the pipeline for a single file
pub fn compile_file(file: &SourceFile, emit: EmitType) -> FileOutput {
    let handler = Handler::new();

    let output = match emit {
        EmitType::Tokens => {
            let mut lexer = Lexer::new(file.content(), &handler).with_file_id(file.id());
            let mut dump = String::new();
            loop {
                let token = lexer.next_token();
                dump.push_str(&format!(
                    "{}:{} {:?} {:?}\n",
                    token.line(),
                    token.column(),
                    token.kind,
                    token.literal
                ));
                if token.kind == TokenKind::Eof {
                    break;
                }
            }
            dump
        }
        EmitType::Ast => {
            let mut parser = Parser::new(file.content(), &handler).with_file_id(file.id());
            let ast = parser.parse_file();
            format!("{:#?}\n", ast)
        }
        EmitType::Code => {
            let mut parser = Parser::new(file.content(), &handler).with_file_id(file.id());
            let ast = parser.parse_file();
            if handler.has_errors() {
                String::new()
            } else {
                tuic_gen::generate(&ast)
            }
        }
    };

    let diagnostics = handler
        .diagnostics()
        .iter()
        .map(|d| d.render(file.name()))
        .collect();

    FileOutput {
        name: file.name().to_string(),
        output,
        diagnostics,
    }
}

/// True when any file produced diagnostics
pub fn has_errors(outputs: &[FileOutput]) -> bool {
    outputs.iter().any(FileOutput::has_errors)
}

/// Output path for a compiled `.tui` file: `<stem>_tui.go` next to the
/// input (or under `out_dir` when given)
pub fn output_path(input: &Path, out_dir: Option<&Path>) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "out".to_string());
    let file_name = format!("{}_tui.go", stem);
    match out_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}
