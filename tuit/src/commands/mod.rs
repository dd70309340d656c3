//! Command implementations for the tuit CLI.

pub mod build;
pub mod check;
pub mod classes;

mod common;

pub use build::{run_build, BuildArgs};
pub use check::{run_check, CheckArgs};
pub use classes::{run_classes, ClassesArgs};
