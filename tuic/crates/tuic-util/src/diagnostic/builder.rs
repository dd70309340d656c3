//! Diagnostic builder for fluent diagnostic construction.

use super::{Diagnostic, Handler, Level, Span};

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use tuic_util::diagnostic::{DiagnosticBuilder, Handler, Span};
///
/// let handler = Handler::new();
/// DiagnosticBuilder::error("expected '{'")
///     .span(Span::new(14, 15, 2, 3))
///     .hint("component bodies are brace-delimited")
///     .emit(&handler);
/// assert!(handler.has_errors());
/// ```
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    hint: Option<String>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            hint: None,
        }
    }

    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a warning builder
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the source location
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Attach a hint
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            hint: self.hint,
        }
    }

    /// Build and record on the given handler
    pub fn emit(self, handler: &Handler) {
        handler.emit(self.build());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let diag = DiagnosticBuilder::error("boom").build();
        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.message, "boom");
        assert_eq!(diag.span, Span::DUMMY);
        assert!(diag.hint.is_none());
    }

    #[test]
    fn test_builder_span_and_hint() {
        let span = Span::new(3, 4, 1, 4);
        let diag = DiagnosticBuilder::error("unexpected token")
            .span(span)
            .hint("try removing this")
            .build();
        assert_eq!(diag.span, span);
        assert_eq!(diag.hint.as_deref(), Some("try removing this"));
    }

    #[test]
    fn test_builder_emit() {
        let handler = Handler::new();
        DiagnosticBuilder::warning("unused import").emit(&handler);
        assert_eq!(handler.diagnostics().len(), 1);
        assert!(!handler.has_errors());
    }
}
