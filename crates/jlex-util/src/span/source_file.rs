//! Source file with a precomputed line index.
//!
//! [`SourceFile`] maps byte offsets back to lines so diagnostics can quote
//! the offending source line.

use std::sync::Arc;

use crate::error::{SourceMapError, SourceMapResult};

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use jlex_util::span::SourceFile;
///
/// let file = SourceFile::new("Main.java", "class Main {}");
/// assert_eq!(file.name(), "Main.java");
/// assert_eq!(file.content(), "class Main {}");
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    /// Compute line start offsets from content
    fn line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];

        for (i, byte) in content.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(i + 1);
            }
        }

        line_starts.into()
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
    ///
    /// # Examples
    ///
    /// ```
    /// use jlex_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.java", "line1\nline2\nline3");
    /// assert_eq!(file.line_count(), 3);
    /// ```
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the byte offset where a line starts (0-indexed line number)
    #[inline]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Get a specific source line (1-indexed), without its line terminator
    ///
    /// # Examples
    ///
    /// ```
    /// use jlex_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.java", "line1\r\nline2\nline3");
    /// assert_eq!(file.line_at(1), Some("line1"));
    /// assert_eq!(file.line_at(3), Some("line3"));
    /// assert_eq!(file.line_at(4), None);
    /// ```
    pub fn line_at(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let start = self.line_start(line - 1)?;
        let end = self.line_start(line).unwrap_or(self.content.len());

        Some(self.content[start..end].trim_end_matches(['\n', '\r']))
    }

    /// Extract a substring from the file content with bounds checking
    ///
    /// # Examples
    ///
    /// ```
    /// use jlex_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.java", "int x;");
    /// assert_eq!(file.extract_range(4, 5).unwrap(), "x");
    /// assert!(file.extract_range(4, 50).is_err());
    /// ```
    pub fn extract_range(&self, start: usize, end: usize) -> SourceMapResult<&str> {
        if start > end {
            return Err(SourceMapError::InvalidSpan { start, end });
        }
        if end > self.content.len() {
            return Err(SourceMapError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: start,
                span_end: end,
            });
        }

        if !self.content.is_char_boundary(start) || !self.content.is_char_boundary(end) {
            return Err(SourceMapError::ExtractFailed(
                "Range is not on character boundaries".to_string(),
            ));
        }

        Ok(&self.content[start..end])
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_has_one_line() {
        let file = SourceFile::new("empty.java", "");
        assert_eq!(file.line_count(), 1);
        assert_eq!(file.line_at(1), Some(""));
    }

    #[test]
    fn test_trailing_newline_opens_a_line() {
        let file = SourceFile::new("a.java", "x\n");
        assert_eq!(file.line_count(), 2);
        assert_eq!(file.line_at(2), Some(""));
    }

    #[test]
    fn test_extract_range_errors() {
        let file = SourceFile::new("a.java", "héllo");
        assert!(matches!(
            file.extract_range(3, 1),
            Err(SourceMapError::InvalidSpan { .. })
        ));
        assert!(matches!(
            file.extract_range(0, 2),
            Err(SourceMapError::ExtractFailed(_))
        ));
        assert_eq!(file.extract_range(0, 3), Ok("hé"));
    }
}
