//! Number literal lexing.

use super::core::Lexer;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Lex a number literal.
    ///
    /// Grammar: optional integer part, optional '.' followed by digits
    /// (making it a float), optional exponent `[eE][+-]?digits` (also
    /// making it a float). A leading '.' digit sequence like `.5` is a
    /// float; the dispatcher only routes here when a digit follows the dot.
    /// An `e` with no digits after it is not consumed as an exponent, so
    /// `1easy` lexes as `1` then `easy`.
    pub(super) fn lex_number(&mut self) -> Token {
        let mut is_float = false;

        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        if self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit() {
            is_float = true;
            self.cursor.advance();
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }
        }

        let c = self.cursor.current_char();
        if c == 'e' || c == 'E' {
            let next = self.cursor.peek_char(1);
            let has_exponent = next.is_ascii_digit()
                || ((next == '+' || next == '-') && self.cursor.peek_char(2).is_ascii_digit());
            if has_exponent {
                is_float = true;
                self.cursor.advance();
                if matches!(self.cursor.current_char(), '+' | '-') {
                    self.cursor.advance();
                }
                while self.cursor.current_char().is_ascii_digit() {
                    self.cursor.advance();
                }
            }
        }

        if is_float {
            self.make(TokenKind::Float)
        } else {
            self.make(TokenKind::Int)
        }
    }
}
