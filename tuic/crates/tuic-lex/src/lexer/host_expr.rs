//! Balanced-brace scanning for embedded host-language expressions.
//!
//! The token grammar stays regular by never trying to tokenize the inside
//! of a `{...}`. When the parser knows an embedded expression follows (it
//! just consumed the `{` token), it calls [`Lexer::read_host_expr`], which
//! runs a single-pass scan: brace depth starts at 1 and bytes are consumed
//! until it returns to 0, with side states for double-quoted strings
//! (escapes honored), backtick raw strings, and line/block comments so that
//! braces inside them don't count. Line/column tracking advances through
//! the scan, keeping positions of later tokens correct.

use thiserror::Error;

use super::core::Lexer;
use crate::token::{Token, TokenKind};

/// Error from scanning for a balanced `{...}` at a byte offset.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BalancedScanError {
    /// The byte at the given offset is not '{'
    #[error("expected '{{' at byte offset {0}")]
    NotAtBrace(usize),

    /// The braces never balance before end of input
    #[error("unbalanced braces starting at byte offset {0}")]
    Unbalanced(usize),
}

/// Find the offset of the '}' matching the '{' at `open`.
///
/// Tracks string, raw-string, and comment contexts so braces inside them
/// are ignored.
fn find_balanced_end(source: &str, open: usize) -> Result<usize, BalancedScanError> {
    let bytes = source.as_bytes();
    if bytes.get(open) != Some(&b'{') {
        return Err(BalancedScanError::NotAtBrace(open));
    }

    let mut i = open + 1;
    let mut depth = 1usize;
    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                // Double-quoted string: skip escapes, close on an unescaped
                // quote. A raw newline also ends the string state so a stray
                // quote cannot swallow the rest of the file.
                i += 1;
                while i < bytes.len() {
                    match bytes[i] {
                        b'\\' => i += 2,
                        b'"' => {
                            i += 1;
                            break;
                        }
                        b'\n' => break,
                        _ => i += 1,
                    }
                }
            }
            b'`' => {
                // Raw string: closes only on a backtick, newlines allowed
                i += 1;
                while i < bytes.len() && bytes[i] != b'`' {
                    i += 1;
                }
                if i < bytes.len() {
                    i += 1;
                }
            }
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                while i < bytes.len() && bytes[i] != b'\n' {
                    i += 1;
                }
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i += 2;
                loop {
                    if i + 1 >= bytes.len() {
                        i = bytes.len();
                        break;
                    }
                    if bytes[i] == b'*' && bytes[i + 1] == b'/' {
                        i += 2;
                        break;
                    }
                    i += 1;
                }
            }
            b'{' => {
                depth += 1;
                i += 1;
            }
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(i);
                }
                i += 1;
            }
            _ => i += 1,
        }
    }
    Err(BalancedScanError::Unbalanced(open))
}

impl<'a> Lexer<'a> {
    /// Read an embedded host expression.
    ///
    /// Must be called immediately after the `{` token has been returned.
    /// Scans to the matching `}` and returns a single
    /// [`TokenKind::HostExpr`] token whose literal is the text strictly
    /// between the outer braces; both braces end up consumed.
    ///
    /// Calling this anywhere other than right after a `{`, or on braces
    /// that never balance, records a diagnostic and returns an error token.
    pub fn read_host_expr(&mut self) -> Token {
        let pos = self.cursor.position();
        self.token_start = pos;
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        let source = self.cursor.source();
        if pos == 0 || source.as_bytes()[pos - 1] != b'{' {
            self.report_error("embedded expression read while not positioned after '{'");
            return self.make(TokenKind::Error);
        }

        match find_balanced_end(source, pos - 1) {
            Ok(close) => {
                while self.cursor.position() < close {
                    self.cursor.advance();
                }
                let text = source[pos..close].to_string();
                let token = self.make_with(TokenKind::HostExpr, text);
                self.cursor.advance(); // the closing '}'
                token
            }
            Err(_) => {
                while !self.cursor.is_at_end() {
                    self.cursor.advance();
                }
                self.report_error("unbalanced braces in embedded expression");
                self.make(TokenKind::Error)
            }
        }
    }

    /// Return the text inside balanced braces starting at `offset`.
    ///
    /// The byte at `offset` must be `{`. This is a pure lookahead over the
    /// source; the lexer's own position does not move.
    pub fn read_balanced_braces_from(&self, offset: usize) -> Result<String, BalancedScanError> {
        let source = self.cursor.source();
        let close = find_balanced_end(source, offset)?;
        Ok(source[offset + 1..close].to_string())
    }
}
