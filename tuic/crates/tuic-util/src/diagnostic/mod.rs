//! Diagnostic module - Error collection and rendering.
//!
//! Every phase of the compiler records what went wrong instead of aborting:
//! the lexer and parser keep producing tokens and nodes after an error, and
//! the driver decides at the end whether the build failed. The [`Handler`]
//! is the shared collection point; it hands out diagnostics in the order
//! they were recorded.
//!
//! Rendering follows the `file:line:col: error: message` convention, with an
//! optional ` (hint)` suffix:
//!
//! ```
//! use tuic_util::diagnostic::{Diagnostic, Span};
//!
//! let diag = Diagnostic::error("unexpected token", Span::new(0, 1, 3, 7))
//!     .with_hint("expected '>'");
//! assert_eq!(
//!     diag.render("main.tui"),
//!     "main.tui:3:7: error: unexpected token (expected '>')"
//! );
//! ```

mod builder;

pub use builder::DiagnosticBuilder;

pub use crate::span::Span;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use tuic_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that fails the build
    Error,
    /// A warning that doesn't fail the build
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with severity, location, and an optional hint
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional hint appended to the rendered message
    pub hint: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            hint: None,
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Attach a hint
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Render as `file:line:col: level: message (hint)`
    ///
    /// The file prefix is dropped when `file` is empty, following
    /// [`Position`](crate::span::Position) display.
    pub fn render(&self, file: &str) -> String {
        let position = crate::span::Position::from_span(self.span, file);
        let mut out = format!("{}: {}: {}", position, self.level, self.message);
        if let Some(hint) = &self.hint {
            out.push_str(&format!(" ({})", hint));
        }
        out
    }
}

/// Handler for collecting diagnostics
///
/// The handler is shared by the lexer and parser working on one file, so
/// recording goes through `&self` with interior mutability. It is not meant
/// to cross threads; parallel builds give each file its own handler.
///
/// # Examples
///
/// ```
/// use tuic_util::diagnostic::{Diagnostic, Handler, Span};
///
/// let handler = Handler::new();
/// handler.emit(Diagnostic::error("unexpected token", Span::DUMMY));
/// assert!(handler.has_errors());
/// assert_eq!(handler.error_count(), 1);
/// ```
#[derive(Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic
    pub fn emit(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Create a diagnostic builder for an error at `span`
    pub fn build_error(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message).span(span)
    }

    /// Check if any errors have been recorded
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Number of recorded errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// All recorded diagnostics, in recording order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Render all diagnostics for a file, one per line
    pub fn render_all(&self, file: &str) -> String {
        self.diagnostics
            .borrow()
            .iter()
            .map(|d| d.render(file))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Drop all recorded diagnostics
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}
