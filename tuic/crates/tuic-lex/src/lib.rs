//! tuic-lex - Lexical analyzer for `.tui` sources.
//!
//! The lexer turns a `.tui` byte buffer into a stream of [`Token`]s. The
//! token grammar itself is regular: brackets, operators, literals,
//! identifiers, host-language keywords, and the `@`-prefixed directive
//! keywords of the markup language. Two things keep this from being an
//! off-the-shelf tokenizer:
//!
//! - **Newlines are tokens.** The parser uses them as statement separators,
//!   so whitespace skipping stops at `\n` and emits it.
//! - **Embedded host expressions.** A `{...}` can hold arbitrary
//!   host-language syntax (strings, comments, nested braces). Instead of
//!   complicating the token grammar, the parser switches the lexer into a
//!   balanced-brace scan via [`Lexer::read_host_expr`] immediately after
//!   consuming the `{`. The scan tracks string, raw-string, and comment
//!   contexts so braces inside them don't count, and returns the text
//!   between the outer braces as a single token.
//!
//! Positions are 1-based and count bytes; every token carries its byte
//! span so the parser can slice raw source (type expressions, `@if`
//! conditions) without re-tokenizing.
//!
//! The lexer never fails: malformed input produces an error token plus a
//! diagnostic on the shared [`Handler`](tuic_util::Handler), and scanning
//! resumes at the next plausible boundary.

pub mod cursor;
mod edge_cases;
mod lexer;
mod token;

pub use lexer::{BalancedScanError, Lexer};
pub use token::{at_keyword, keyword_from_ident, Token, TokenKind};
