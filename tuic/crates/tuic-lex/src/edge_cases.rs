//! Edge case and property tests for tuic-lex.
