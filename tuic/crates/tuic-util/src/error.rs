//! Core error types for tuic-util.

use thiserror::Error;

/// Error type for source map operations
#[derive(Debug, Error)]
pub enum SourceMapError {
    /// File not found in the source map
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// Invalid span range
    #[error("invalid span: start {start} > end {end}")]
    InvalidSpan { start: usize, end: usize },

    /// Span out of bounds for file
    #[error("span out of bounds: file has {file_len} bytes, span is {span_start}..{span_end}")]
    SpanOutOfBounds {
        file_len: usize,
        span_start: usize,
        span_end: usize,
    },
}

/// Result type alias for source map operations
pub type SourceMapResult<T> = std::result::Result<T, SourceMapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_display() {
        let err = SourceMapError::FileNotFound("a.tui".to_string());
        assert_eq!(err.to_string(), "file not found: a.tui");
    }

    #[test]
    fn test_invalid_span_display() {
        let err = SourceMapError::InvalidSpan { start: 9, end: 3 };
        assert_eq!(err.to_string(), "invalid span: start 9 > end 3");
    }
}
