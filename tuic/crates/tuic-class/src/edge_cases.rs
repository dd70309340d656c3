//! Edge case tests for tuic-class.
