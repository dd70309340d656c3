//! String literal lexing: double-quoted strings with escapes, and backtick
//! raw strings without.

use super::core::Lexer;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Lex a double-quoted string literal.
    ///
    /// Recognized escapes: `\n \t \r \" \\`. The token literal holds the
    /// decoded value. The string must end before the line does; an
    /// unterminated string records a diagnostic and yields an error token,
    /// leaving the newline for the next scan so the lexer resumes at the
    /// line boundary.
    pub(super) fn lex_string(&mut self) -> Token {
        self.cursor.advance(); // opening quote
        let mut value = String::new();

        loop {
            if self.cursor.is_at_end() || self.cursor.current_char() == '\n' {
                self.report_error("unterminated string literal");
                return self.make_with(TokenKind::Error, value);
            }
            match self.cursor.current_char() {
                '"' => {
                    self.cursor.advance();
                    return self.make_with(TokenKind::Str, value);
                }
                '\\' => {
                    let escaped = self.cursor.peek_char(1);
                    match escaped {
                        'n' => value.push('\n'),
                        't' => value.push('\t'),
                        'r' => value.push('\r'),
                        '"' => value.push('"'),
                        '\\' => value.push('\\'),
                        other => {
                            self.report_error_hint(
                                format!("invalid escape sequence '\\{}'", other),
                                "recognized escapes are \\n \\t \\r \\\" \\\\",
                            );
                            value.push('\\');
                            value.push(other);
                        }
                    }
                    self.cursor.advance();
                    self.cursor.advance();
                }
                c => {
                    value.push(c);
                    self.cursor.advance();
                }
            }
        }
    }

    /// Lex a backtick raw string literal.
    ///
    /// No escapes; any byte including newlines is literal. Unterminated raw
    /// strings swallow the rest of the input and record a diagnostic.
    pub(super) fn lex_raw_string(&mut self) -> Token {
        self.cursor.advance(); // opening backtick
        let content_start = self.cursor.position();

        loop {
            if self.cursor.is_at_end() {
                let value = self.cursor.slice_from(content_start).to_string();
                self.report_error("unterminated raw string literal");
                return self.make_with(TokenKind::Error, value);
            }
            if self.cursor.current_char() == '`' {
                let value = self.cursor.slice_from(content_start).to_string();
                self.cursor.advance();
                return self.make_with(TokenKind::RawStr, value);
            }
            self.cursor.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Lexer, TokenKind};
    use tuic_util::Handler;

    fn first(source: &str) -> (TokenKind, String, usize) {
        let handler = Handler::new();
        let mut lexer = Lexer::new(source, &handler);
        let token = lexer.next_token();
        (token.kind, token.literal, handler.error_count())
    }

    #[test]
    fn test_simple_string() {
        let (kind, value, errors) = first("\"hello\"");
        assert_eq!(kind, TokenKind::Str);
        assert_eq!(value, "hello");
        assert_eq!(errors, 0);
    }

    #[test]
    fn test_empty_string() {
        let (kind, value, _) = first("\"\"");
        assert_eq!(kind, TokenKind::Str);
        assert_eq!(value, "");
    }

    #[test]
    fn test_escapes_are_decoded() {
        let (kind, value, errors) = first(r#""a\tb\nc\"d\\e""#);
        assert_eq!(kind, TokenKind::Str);
        assert_eq!(value, "a\tb\nc\"d\\e");
        assert_eq!(errors, 0);
    }

    #[test]
    fn test_unknown_escape_kept_verbatim() {
        let (kind, value, errors) = first(r#""a\qb""#);
        assert_eq!(kind, TokenKind::Str);
        assert_eq!(value, "a\\qb");
        assert_eq!(errors, 1);
    }

    #[test]
    fn test_unterminated_string() {
        let (kind, _, errors) = first("\"never closed");
        assert_eq!(kind, TokenKind::Error);
        assert_eq!(errors, 1);
    }

    #[test]
    fn test_string_stops_at_newline() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("\"broken\nnext", &handler);
        assert_eq!(lexer.next_token().kind, TokenKind::Error);
        // the newline is still delivered, so recovery lands on a line start
        assert_eq!(lexer.next_token().kind, TokenKind::Newline);
        assert_eq!(lexer.next_token().literal, "next");
    }

    #[test]
    fn test_raw_string() {
        let (kind, value, errors) = first("`a \\n b`");
        assert_eq!(kind, TokenKind::RawStr);
        assert_eq!(value, "a \\n b");
        assert_eq!(errors, 0);
    }

    #[test]
    fn test_raw_string_spans_lines() {
        let (kind, value, _) = first("`one\ntwo`");
        assert_eq!(kind, TokenKind::RawStr);
        assert_eq!(value, "one\ntwo");
    }

    #[test]
    fn test_unterminated_raw_string() {
        let (kind, _, errors) = first("`open");
        assert_eq!(kind, TokenKind::Error);
        assert_eq!(errors, 1);
    }
}
