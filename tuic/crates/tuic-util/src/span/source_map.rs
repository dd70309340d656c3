//! Source map for managing source files and computing source locations.

use std::sync::Arc;

use super::FileId;
use crate::error::SourceMapError;

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use tuic_util::span::SourceFile;
///
/// let file = SourceFile::new(0, "main.tui", "package main");
/// assert_eq!(file.name(), "main.tui");
/// assert_eq!(file.content(), "package main");
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// Unique file identifier
    id: FileId,
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(id: usize, name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::compute_line_starts(&content);
        Self {
            id: FileId(id),
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn compute_line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        for (i, b) in content.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i + 1);
            }
        }
        line_starts.into()
    }

    /// Get the file identifier
    #[inline]
    pub fn id(&self) -> FileId {
        self.id
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a byte offset to (line, column) coordinates
    ///
    /// Line and column are 1-based. Column is measured in bytes from the
    /// start of the line.
    ///
    /// # Examples
    ///
    /// ```
    /// use tuic_util::span::SourceFile;
    ///
    /// let file = SourceFile::new(0, "main.tui", "package main\n@component A() {}");
    /// assert_eq!(file.offset_to_line_col(8), (1, 9));
    /// assert_eq!(file.offset_to_line_col(13), (2, 1));
    /// ```
    pub fn offset_to_line_col(&self, offset: usize) -> (usize, usize) {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => (line + 1, 1),
            Err(insert_point) => {
                let line = insert_point - 1;
                let line_start = self.line_starts.get(line).copied().unwrap_or(0);
                (line + 1, offset - line_start + 1)
            }
        }
    }

    /// Get a specific source line (1-indexed), without the trailing newline
    ///
    /// # Examples
    ///
    /// ```
    /// use tuic_util::span::SourceFile;
    ///
    /// let file = SourceFile::new(0, "main.tui", "line1\nline2");
    /// assert_eq!(file.line_at(2), Some("line2"));
    /// assert_eq!(file.line_at(3), None);
    /// ```
    pub fn line_at(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let start = self.line_starts.get(line - 1).copied()?;
        let end = self
            .line_starts
            .get(line)
            .copied()
            .unwrap_or(self.content.len());
        Some(self.content[start..end].trim_end_matches(['\n', '\r']))
    }

    /// Extract a byte range from the file content
    ///
    /// Fails when the range is inverted or out of bounds.
    pub fn extract(&self, start: usize, end: usize) -> Result<&str, SourceMapError> {
        if start > end {
            return Err(SourceMapError::InvalidSpan { start, end });
        }
        self.content
            .get(start..end)
            .ok_or(SourceMapError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: start,
                span_end: end,
            })
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}

/// A source map managing multiple source files
///
/// Files keep their insertion order; the [`FileId`] handed back by
/// [`SourceMap::add_file`] is an index into that order.
///
/// # Examples
///
/// ```
/// use tuic_util::span::SourceMap;
///
/// let mut map = SourceMap::new();
/// let id = map.add_file("main.tui", "package main");
/// assert_eq!(map.get(id).unwrap().name(), "main.tui");
/// ```
#[derive(Debug, Default)]
pub struct SourceMap {
    files: Vec<SourceFile>,
}

impl SourceMap {
    /// Create an empty source map
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, returning its identifier
    pub fn add_file(&mut self, name: impl Into<String>, content: impl Into<Arc<str>>) -> FileId {
        let id = self.files.len();
        self.files.push(SourceFile::new(id, name, content));
        FileId(id)
    }

    /// Look up a file by identifier
    pub fn get(&self, id: FileId) -> Option<&SourceFile> {
        self.files.get(id.index())
    }

    /// Look up a file by name
    pub fn file_named(&self, name: &str) -> Result<&SourceFile, SourceMapError> {
        self.files
            .iter()
            .find(|f| f.name() == name)
            .ok_or_else(|| SourceMapError::FileNotFound(name.to_string()))
    }

    /// Number of files in the map
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns true if the map holds no files
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterate over files in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &SourceFile> {
        self.files.iter()
    }

    /// All files, in insertion order
    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_file_basics() {
        let file = SourceFile::new(0, "a.tui", "package a\n");
        assert_eq!(file.id(), FileId(0));
        assert_eq!(file.name(), "a.tui");
        assert_eq!(file.content(), "package a\n");
    }

    #[test]
    fn test_line_count() {
        let file = SourceFile::new(0, "a.tui", "one\ntwo\nthree");
        assert_eq!(file.line_count(), 3);
    }

    #[test]
    fn test_offset_to_line_col() {
        let file = SourceFile::new(0, "a.tui", "one\ntwo\nthree");
        assert_eq!(file.offset_to_line_col(0), (1, 1));
        assert_eq!(file.offset_to_line_col(2), (1, 3));
        assert_eq!(file.offset_to_line_col(4), (2, 1));
        assert_eq!(file.offset_to_line_col(9), (3, 2));
    }

    #[test]
    fn test_line_at() {
        let file = SourceFile::new(0, "a.tui", "one\ntwo\nthree");
        assert_eq!(file.line_at(1), Some("one"));
        assert_eq!(file.line_at(2), Some("two"));
        assert_eq!(file.line_at(3), Some("three"));
        assert_eq!(file.line_at(4), None);
        assert_eq!(file.line_at(0), None);
    }

    #[test]
    fn test_extract() {
        let file = SourceFile::new(0, "a.tui", "package main");
        assert_eq!(file.extract(0, 7).unwrap(), "package");
        assert!(file.extract(5, 4).is_err());
        assert!(file.extract(0, 100).is_err());
    }

    #[test]
    fn test_source_map_add_and_get() {
        let mut map = SourceMap::new();
        let a = map.add_file("a.tui", "package a");
        let b = map.add_file("b.tui", "package b");
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(a).unwrap().name(), "a.tui");
        assert_eq!(map.get(b).unwrap().name(), "b.tui");
    }

    #[test]
    fn test_source_map_file_named() {
        let mut map = SourceMap::new();
        map.add_file("a.tui", "package a");
        assert!(map.file_named("a.tui").is_ok());
        assert!(map.file_named("missing.tui").is_err());
    }
}
