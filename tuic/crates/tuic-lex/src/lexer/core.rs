//! Core lexer implementation: the Lexer struct, trivia skipping, and the
//! per-character dispatch.

use tuic_util::{Diagnostic, DiagnosticBuilder, FileId, Handler, Span};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Lexer for `.tui` source code.
///
/// One lexer is instantiated per source file. Lexical errors are recorded on
/// the shared [`Handler`] and scanning continues; `next_token` never fails.
///
/// # Example
///
/// ```
/// use tuic_lex::{Lexer, TokenKind};
/// use tuic_util::Handler;
///
/// let handler = Handler::new();
/// let mut lexer = Lexer::new("package main", &handler);
/// assert_eq!(lexer.next_token().kind, TokenKind::KwPackage);
/// assert_eq!(lexer.next_token().literal, "main");
/// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(super) cursor: Cursor<'a>,

    /// Diagnostic collector shared with the parser.
    handler: &'a Handler,

    /// File this lexer is scanning, stamped onto every span.
    file_id: FileId,

    /// Starting byte offset of the current token.
    pub(super) token_start: usize,

    /// Line where the current token starts (1-based).
    pub(super) token_start_line: u32,

    /// Column where the current token starts (1-based, in bytes).
    pub(super) token_start_column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer over the given source.
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            file_id: FileId::DUMMY,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Stamp spans with a specific file id (multi-file builds).
    pub fn with_file_id(mut self, file_id: FileId) -> Self {
        self.file_id = file_id;
        self
    }

    /// Returns the next token from the source.
    ///
    /// Skips whitespace and comments (but not newlines, which are tokens),
    /// then dispatches on the first character. Returns an `Eof` token at the
    /// end of input, and an `Error` token for malformed input after
    /// recording a diagnostic.
    pub fn next_token(&mut self) -> Token {
        self.skip_trivia();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return self.make(TokenKind::Eof);
        }

        match self.cursor.current_char() {
            '\n' => self.single(TokenKind::Newline),
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            '[' => self.single(TokenKind::LBracket),
            ']' => self.single(TokenKind::RBracket),
            ',' => self.single(TokenKind::Comma),
            ';' => self.single(TokenKind::Semicolon),
            '#' => self.single(TokenKind::Hash),
            '+' => self.single(TokenKind::Plus),
            '-' => self.single(TokenKind::Minus),
            '*' => self.single(TokenKind::Star),
            '&' => self.single(TokenKind::Ampersand),
            '|' => self.single(TokenKind::Pipe),
            '!' => self.single(TokenKind::Bang),
            '=' => self.single(TokenKind::Assign),
            '>' => self.single(TokenKind::Gt),
            '<' => {
                if self.cursor.peek_char(1) == '/' {
                    self.double(TokenKind::CloseTagStart)
                } else {
                    self.single(TokenKind::Lt)
                }
            }
            '/' => {
                // Comments were consumed by skip_trivia, so '/' here is
                // either '/>' or a bare slash.
                if self.cursor.peek_char(1) == '>' {
                    self.double(TokenKind::SelfCloseEnd)
                } else {
                    self.single(TokenKind::Slash)
                }
            }
            ':' => {
                if self.cursor.peek_char(1) == '=' {
                    self.double(TokenKind::Declare)
                } else {
                    self.single(TokenKind::Colon)
                }
            }
            '.' => {
                if self.cursor.peek_char(1).is_ascii_digit() {
                    self.lex_number()
                } else {
                    self.single(TokenKind::Dot)
                }
            }
            '_' => {
                if is_ident_continue(self.cursor.peek_char(1)) {
                    self.lex_identifier()
                } else {
                    self.single(TokenKind::Underscore)
                }
            }
            '"' => self.lex_string(),
            '`' => self.lex_raw_string(),
            '@' => self.lex_at(),
            c if is_ident_start(c) => self.lex_identifier(),
            c if c.is_ascii_digit() => self.lex_number(),
            c => {
                self.cursor.advance();
                self.report_error(format!("invalid character '{}'", c));
                self.make(TokenKind::Error)
            }
        }
    }

    /// Skips spaces, tabs, carriage returns, and comments. Newlines are
    /// left in place so they come out as tokens.
    fn skip_trivia(&mut self) {
        loop {
            match self.cursor.current_char() {
                ' ' | '\t' | '\r' => self.cursor.advance(),
                '/' if self.cursor.peek_char(1) == '/' => {
                    while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
                        self.cursor.advance();
                    }
                }
                '/' if self.cursor.peek_char(1) == '*' => self.skip_block_comment(),
                _ => break,
            }
        }
    }

    /// Skips a block comment, which may span lines. An unterminated block
    /// comment is a recoverable error: the diagnostic points at the opener
    /// and scanning resumes at end of input.
    fn skip_block_comment(&mut self) {
        let start = self.cursor.position();
        let line = self.cursor.line();
        let column = self.cursor.column();
        self.cursor.advance();
        self.cursor.advance();

        loop {
            if self.cursor.is_at_end() {
                DiagnosticBuilder::error("unterminated block comment")
                    .span(Span::with_file(
                        start,
                        self.cursor.position(),
                        self.file_id,
                        line,
                        column,
                    ))
                    .emit(self.handler);
                return;
            }
            if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance();
                self.cursor.advance();
                return;
            }
            self.cursor.advance();
        }
    }

    /// Consume one character and finish the token.
    pub(super) fn single(&mut self, kind: TokenKind) -> Token {
        self.cursor.advance();
        self.make(kind)
    }

    /// Consume two characters and finish the token.
    pub(super) fn double(&mut self, kind: TokenKind) -> Token {
        self.cursor.advance();
        self.cursor.advance();
        self.make(kind)
    }

    /// Finish the current token with the raw source slice as its literal.
    pub(super) fn make(&self, kind: TokenKind) -> Token {
        let literal = self.cursor.slice_from(self.token_start).to_string();
        Token::new(kind, literal, self.token_span())
    }

    /// Finish the current token with an explicit literal (decoded strings).
    pub(super) fn make_with(&self, kind: TokenKind, literal: String) -> Token {
        Token::new(kind, literal, self.token_span())
    }

    /// Span of the current token, from its recorded start to the cursor.
    pub(super) fn token_span(&self) -> Span {
        Span::with_file(
            self.token_start,
            self.cursor.position(),
            self.file_id,
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Record a lexical error spanning the current token.
    pub(super) fn report_error(&self, message: impl Into<String>) {
        DiagnosticBuilder::error(message)
            .span(self.token_span())
            .emit(self.handler);
    }

    /// Record a lexical error with a hint.
    pub(super) fn report_error_hint(&self, message: impl Into<String>, hint: impl Into<String>) {
        DiagnosticBuilder::error(message)
            .span(self.token_span())
            .hint(hint)
            .emit(self.handler);
    }

    /// Current byte offset in the source (the position scanning will
    /// resume from).
    pub fn source_pos(&self) -> usize {
        self.cursor.position()
    }

    /// Slice of the original source between two byte offsets.
    ///
    /// Out-of-range or inverted offsets are clamped; offsets landing inside
    /// a multi-byte character snap down to the nearest boundary.
    pub fn source_range(&self, start: usize, end: usize) -> &'a str {
        let source = self.cursor.source();
        let mut start = start.min(source.len());
        let mut end = end.min(source.len());
        while start > 0 && !source.is_char_boundary(start) {
            start -= 1;
        }
        while end > 0 && !source.is_char_boundary(end) {
            end -= 1;
        }
        if start > end {
            start = end;
        }
        &source[start..end]
    }

    /// The diagnostics recorded so far, in detection order.
    pub fn errors(&self) -> Vec<Diagnostic> {
        self.handler.diagnostics()
    }

    /// The shared diagnostic handler.
    pub fn handler(&self) -> &'a Handler {
        self.handler
    }

    /// The full source text this lexer scans.
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }

    /// The file id stamped onto spans.
    pub fn file_id(&self) -> FileId {
        self.file_id
    }
}

/// Identifiers start with an ASCII letter or '_'.
pub(super) fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Identifiers continue with ASCII letters, digits, or '_'.
pub(super) fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(source: &str) -> Vec<Token> {
        let handler = Handler::new();
        let mut lexer = Lexer::new(source, &handler);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                break;
            }
        }
        tokens
    }

    #[test]
    fn test_empty_source_is_eof_at_origin() {
        let tokens = lex_all("");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
        assert_eq!((tokens[0].line(), tokens[0].column()), (1, 1));
    }

    #[test]
    fn test_paren_pair_positions() {
        let tokens = lex_all("()");
        assert_eq!(tokens[0].kind, TokenKind::LParen);
        assert_eq!((tokens[0].line(), tokens[0].column()), (1, 1));
        assert_eq!(tokens[1].kind, TokenKind::RParen);
        assert_eq!((tokens[1].line(), tokens[1].column()), (1, 2));
        assert_eq!(tokens[2].kind, TokenKind::Eof);
        assert_eq!((tokens[2].line(), tokens[2].column()), (1, 3));
    }

    #[test]
    fn test_newline_is_a_token() {
        let tokens = lex_all("a\nb");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Ident,
                TokenKind::Newline,
                TokenKind::Ident,
                TokenKind::Eof
            ]
        );
        assert_eq!((tokens[2].line(), tokens[2].column()), (2, 1));
    }

    #[test]
    fn test_two_char_tokens() {
        let tokens = lex_all("</ /> :=");
        assert_eq!(tokens[0].kind, TokenKind::CloseTagStart);
        assert_eq!(tokens[1].kind, TokenKind::SelfCloseEnd);
        assert_eq!(tokens[2].kind, TokenKind::Declare);
    }

    #[test]
    fn test_single_char_fallbacks() {
        let tokens = lex_all("< > / : = _");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Lt,
                TokenKind::Gt,
                TokenKind::Slash,
                TokenKind::Colon,
                TokenKind::Assign,
                TokenKind::Underscore,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_line_comment_keeps_newline() {
        let tokens = lex_all("a // trailing\nb");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Ident,
                TokenKind::Newline,
                TokenKind::Ident,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_block_comment_spans_lines() {
        let tokens = lex_all("a /* one\ntwo */ b");
        assert_eq!(tokens[0].literal, "a");
        assert_eq!(tokens[1].literal, "b");
        // position math continues through the comment
        assert_eq!(tokens[1].line(), 2);
    }

    #[test]
    fn test_unterminated_block_comment_is_recoverable() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("a /* never closed", &handler);
        assert_eq!(lexer.next_token().kind, TokenKind::Ident);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        assert_eq!(handler.error_count(), 1);
        assert!(handler.diagnostics()[0]
            .message
            .contains("unterminated block comment"));
    }

    #[test]
    fn test_invalid_character() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("?", &handler);
        assert_eq!(lexer.next_token().kind, TokenKind::Error);
        assert!(handler.has_errors());
    }

    #[test]
    fn test_source_range_clamps() {
        let handler = Handler::new();
        let lexer = Lexer::new("abc", &handler);
        assert_eq!(lexer.source_range(0, 3), "abc");
        assert_eq!(lexer.source_range(1, 100), "bc");
        assert_eq!(lexer.source_range(100, 200), "");
        assert_eq!(lexer.source_range(2, 1), "");
    }

    #[test]
    fn test_hash_token() {
        let tokens = lex_all("<box#Header");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Lt,
                TokenKind::Ident,
                TokenKind::Hash,
                TokenKind::Ident,
                TokenKind::Eof
            ]
        );
    }
}
