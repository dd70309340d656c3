//! Identifier, keyword, and '@' directive lexing.

use super::core::{is_ident_continue, is_ident_start, Lexer};
use crate::token::{at_keyword, keyword_from_ident, Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Lex an identifier or host-language keyword.
    pub(super) fn lex_identifier(&mut self) -> Token {
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }
        let text = self.cursor.slice_from(self.token_start);
        match keyword_from_ident(text) {
            Some(kind) => self.make(kind),
            None => self.make(TokenKind::Ident),
        }
    }

    /// Lex an '@' directive.
    ///
    /// The identifier after the '@' selects the kind: the lowercase
    /// directive set maps to keyword tokens, an uppercase-starting name is a
    /// component call (literal carries the name without the '@'), and
    /// anything else is an error.
    pub(super) fn lex_at(&mut self) -> Token {
        self.cursor.advance(); // '@'

        if !is_ident_start(self.cursor.current_char()) {
            self.report_error("unknown @ keyword");
            return self.make(TokenKind::Error);
        }

        let name_start = self.cursor.position();
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }
        let name = self.cursor.slice_from(name_start);

        if name.starts_with(|c: char| c.is_ascii_uppercase()) {
            let name = name.to_string();
            return self.make_with(TokenKind::ComponentCall, name);
        }

        match at_keyword(name) {
            Some(kind) => self.make(kind),
            None => {
                self.report_error_hint(
                    "unknown @ keyword",
                    "expected @component, @let, @for, @if, or @else",
                );
                self.make(TokenKind::Error)
            }
        }
    }
}
