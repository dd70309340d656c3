//! tuic-util - Foundation types for the tuic compiler.
//!
//! This crate provides the pieces every other tuic crate builds on:
//!
//! - [`span`] - byte-indexed source locations ([`Span`], [`Position`]) and
//!   the [`SourceMap`] that owns loaded `.tui` files
//! - [`diagnostic`] - error collection and rendering ([`Diagnostic`],
//!   [`Handler`], [`DiagnosticBuilder`])
//!
//! Positions throughout the compiler are 1-based and count **bytes**, not
//! characters. A multi-byte UTF-8 character therefore advances the column by
//! its encoded length. This matches the positions reported to editors and
//! keeps every slice operation a plain byte range.

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, Handler, Level};
pub use error::SourceMapError;
pub use span::{FileId, Position, SourceFile, SourceMap, Span};

// Re-export commonly used hash collections
pub use rustc_hash::FxHashMap;
pub use rustc_hash::FxHashSet;
