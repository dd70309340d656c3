//! tuic-class - The utility-class translator.
//!
//! `.tui` elements style themselves with an atomic-CSS-like `class` string
//! (`"flex flex-col gap-2 p-4 font-bold text-red"`). This crate compiles
//! such a string into the configuration calls the generated code passes to
//! the terminal layout engine:
//!
//! - an ordered list of element options
//!   (`element.WithDirection(layout.Row)`),
//! - an ordered list of text style method fragments (`Bold()`,
//!   `Foreground(tui.Cyan)`) combined later by
//!   [`build_text_style_option`],
//! - the set of engine packages the emitted calls require.
//!
//! Per-side padding and margin classes are not emitted one by one: the
//! translator folds them into a single `WithPaddingTRBL`/`WithMarginTRBL`
//! option at the end of the emission group, merging `t`/`r`/`b`/`l`/`x`/`y`
//! sides at compile time.
//!
//! Unknown classes never fail a build - they are dropped during emission
//! and surfaced as advisories by [`parse_classes_with_positions`], which
//! also offers alias and edit-distance suggestions via [`validate_class`].
//!
//! Everything here is pure: the class tables and compiled patterns are
//! process-wide read-only state initialized on first use, so the translator
//! is safe to call from parallel per-file builds.

mod edge_cases;
mod tables;
mod translate;
mod validate;

pub use tables::{all_classes, ClassInfo, ImportKey};
pub use translate::{build_text_style_option, parse_class, parse_classes, ClassMapping, ClassOutput};
pub use validate::{parse_classes_with_positions, validate_class, ClassPosition, Validation};
