//! tuic-par - Parser for `.tui` sources.
//!
//! A recursive descent parser with one-token lookahead over the
//! [`tuic_lex::Lexer`] token stream. Two grammars interleave here: the
//! markup grammar (elements, attributes, `@` directives) and a
//! host-language scavenger that captures raw source slices for everything
//! the front-end treats as opaque - parameter types, `@if` conditions,
//! `@for` iterables, component-call arguments, and free-standing host
//! statements. Raw capture works off the byte offsets every token carries:
//! mark the start offset, walk tokens while tracking bracket depth, then
//! slice the original source between the marks. That preserves operator
//! spacing, quoted strings, and subscripting exactly as written.
//!
//! Newline tokens are significant only as statement separators; every
//! production skips them otherwise.
//!
//! Parsing is total. Each production records a diagnostic on `expect`
//! failure and resynchronizes (next newline or matching `}` for body
//! items, next identifier or `>` for attributes, past the first `>` for
//! element closings), so the caller always gets a `File` back - possibly
//! partial, together with the recorded diagnostics. A parse succeeds iff
//! no diagnostic was recorded.
//!
//! ```
//! use tuic_par::parse;
//!
//! let (file, diagnostics) = parse("package demo\n@component App() {\n<box/>\n}\n");
//! assert!(diagnostics.is_empty());
//! assert_eq!(file.package, "demo");
//! assert_eq!(file.decls[0].name, "App");
//! ```

pub mod ast;
mod body;
mod edge_cases;
mod element;
mod file;

pub use ast::*;

use tuic_lex::{Lexer, Token, TokenKind};
use tuic_util::{Diagnostic, DiagnosticBuilder, FileId, Handler, Span};

/// Recursive descent parser over a lexer
///
/// One parser is instantiated per source file; it shares its diagnostic
/// [`Handler`] with the lexer it drives.
pub struct Parser<'a> {
    /// Token source; also consulted for raw source slices
    lexer: Lexer<'a>,

    /// Diagnostic collector shared with the lexer
    handler: &'a Handler,

    /// One-token lookahead slot, filled lazily
    ///
    /// Lazy matters: `Lexer::read_host_expr` must run with the lexer
    /// positioned right after a `{`, so the parser must not have lexed
    /// anything beyond that brace yet.
    peeked: Option<Token>,
}

impl<'a> Parser<'a> {
    /// Create a parser for the given source
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self {
            lexer: Lexer::new(source, handler),
            handler,
            peeked: None,
        }
    }

    /// Stamp spans with a specific file id (multi-file builds)
    pub fn with_file_id(mut self, file_id: FileId) -> Self {
        self.lexer = self.lexer.with_file_id(file_id);
        self
    }

    // ==================== token plumbing ====================

    fn fill(&mut self) {
        if self.peeked.is_none() {
            self.peeked = Some(self.lexer.next_token());
        }
    }

    /// Kind of the next token without consuming it
    pub(crate) fn peek_kind(&mut self) -> TokenKind {
        self.fill();
        match &self.peeked {
            Some(token) => token.kind,
            None => TokenKind::Eof,
        }
    }

    /// Span of the next token without consuming it
    pub(crate) fn peek_span(&mut self) -> Span {
        self.fill();
        match &self.peeked {
            Some(token) => token.span,
            None => Span::DUMMY,
        }
    }

    /// Consume and return the next token
    pub(crate) fn advance(&mut self) -> Token {
        match self.peeked.take() {
            Some(token) => token,
            None => self.lexer.next_token(),
        }
    }

    /// Consume the next token if it has the given kind
    pub(crate) fn match_token(&mut self, kind: TokenKind) -> Option<Token> {
        if self.peek_kind() == kind {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Consume a token of the given kind or record a diagnostic
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Option<Token> {
        if self.peek_kind() == kind {
            return Some(self.advance());
        }
        let found = self.peek_kind();
        self.error(
            self.peek_span_filled(),
            format!("expected {}, found {}", kind.describe(), found.describe()),
        );
        None
    }

    /// Like [`expect`](Self::expect) with a domain-specific description
    pub(crate) fn expect_named(&mut self, kind: TokenKind, what: &str) -> Option<Token> {
        if self.peek_kind() == kind {
            return Some(self.advance());
        }
        let found = self.peek_kind();
        self.error(
            self.peek_span_filled(),
            format!("expected {}, found {}", what, found.describe()),
        );
        None
    }

    /// Span of the already-filled lookahead (callers just peeked)
    fn peek_span_filled(&self) -> Span {
        match &self.peeked {
            Some(token) => token.span,
            None => Span::DUMMY,
        }
    }

    /// Skip newline separator tokens
    pub(crate) fn skip_newlines(&mut self) {
        while self.peek_kind() == TokenKind::Newline {
            self.advance();
        }
    }

    // ==================== diagnostics ====================

    pub(crate) fn error(&self, span: Span, message: impl Into<String>) {
        DiagnosticBuilder::error(message).span(span).emit(self.handler);
    }

    pub(crate) fn error_hint(
        &self,
        span: Span,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        DiagnosticBuilder::error(message)
            .span(span)
            .hint(hint)
            .emit(self.handler);
    }

    /// Record an error at the position of the next token
    pub(crate) fn error_here(&mut self, message: impl Into<String>) {
        let span = self.peek_span();
        self.error(span, message);
    }

    /// Record an error with a hint at the position of the next token
    pub(crate) fn error_here_hint(&mut self, message: impl Into<String>, hint: impl Into<String>) {
        let span = self.peek_span();
        self.error_hint(span, message, hint);
    }

    /// The diagnostics recorded so far, in detection order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.handler.diagnostics()
    }

    // ==================== raw source capture ====================

    /// Slice the original source between two byte offsets, trimmed
    pub(crate) fn raw_slice(&self, start: usize, end: usize) -> String {
        self.lexer.source_range(start, end).trim().to_string()
    }

    /// Scan tokens until a `{` at outer bracket depth, returning the raw
    /// trimmed source between the scan start and the brace. Used for `@if`
    /// conditions and `@for` headers; the `{` itself is left for the
    /// caller. A closing bracket at outer depth or end of file stops the
    /// scan early.
    pub(crate) fn raw_until_lbrace(&mut self) -> (String, Span) {
        let start_span = self.peek_span();
        let start = start_span.start;
        let mut depth = 0i32;
        loop {
            match self.peek_kind() {
                TokenKind::LBrace if depth == 0 => break,
                TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace if depth == 0 => break,
                TokenKind::Eof => break,
                TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace => {
                    depth += 1;
                    self.advance();
                }
                TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace => {
                    depth -= 1;
                    self.advance();
                }
                _ => {
                    self.advance();
                }
            }
        }
        let end = self.peek_span().start;
        let span = Span {
            start,
            end,
            ..start_span
        };
        (self.raw_slice(start, end), span)
    }

    // ==================== recovery ====================

    /// Resynchronize after a failed body item: skip to just past the next
    /// newline, or stop at a closing brace / end of file.
    pub(crate) fn recover_body_item(&mut self) {
        loop {
            match self.peek_kind() {
                TokenKind::Newline => {
                    self.advance();
                    return;
                }
                TokenKind::RBrace | TokenKind::Eof => return,
                _ => {
                    self.advance();
                }
            }
        }
    }

    /// Resynchronize inside an element header: skip to the next identifier
    /// or tag terminator.
    pub(crate) fn recover_attribute(&mut self) {
        loop {
            match self.peek_kind() {
                TokenKind::Ident
                | TokenKind::Gt
                | TokenKind::SelfCloseEnd
                | TokenKind::Eof => return,
                _ => {
                    self.advance();
                }
            }
        }
    }

    /// Resynchronize a broken element closing: advance past the first `>`.
    pub(crate) fn recover_past_gt(&mut self) {
        loop {
            match self.peek_kind() {
                TokenKind::Gt => {
                    self.advance();
                    return;
                }
                TokenKind::Eof => return,
                _ => {
                    self.advance();
                }
            }
        }
    }
}

/// Parse a complete source, returning the (possibly partial) file and all
/// recorded diagnostics. The parse succeeded iff the diagnostics are empty.
pub fn parse(source: &str) -> (File, Vec<Diagnostic>) {
    let handler = Handler::new();
    let mut parser = Parser::new(source, &handler);
    let file = parser.parse_file();
    (file, handler.diagnostics())
}
