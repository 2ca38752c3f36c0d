//! Span module - Source location tracking.
//!
//! This module provides types for representing source code locations:
//! byte offsets into a buffer plus the line/column of the first character.
//!
//! # Examples
//!
//! ```
//! use jlex_util::span::Span;
//!
//! // `x` in `int x;`
//! let span = Span::new(4, 5, 1, 5);
//! assert_eq!(span.len(), 1);
//! ```

mod source_file;

pub use source_file::SourceFile;

use std::fmt;

/// Source location span
///
/// A `Span` represents a half-open byte range `start..end` in a source
/// buffer, together with the line and column of its first character.
/// Lines and columns are both 1-based.
///
/// # Examples
///
/// ```
/// use jlex_util::span::Span;
///
/// let span = Span::new(10, 20, 1, 11);
/// assert_eq!(span.start, 10);
/// assert_eq!(span.end, 20);
///
/// // Zero-width span, e.g. for end of input
/// let eof = Span::point(20, 2, 1);
/// assert!(eof.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use jlex_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.end, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset (exclusive)
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create a zero-width span at the given offset
    #[inline]
    pub fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// Returns true if this span is empty (start == end)
    ///
    /// # Examples
    ///
    /// ```
    /// use jlex_util::span::Span;
    ///
    /// assert!(Span::new(10, 10, 1, 5).is_empty());
    /// assert!(!Span::new(10, 20, 1, 5).is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns the byte range covered by this span
    ///
    /// # Examples
    ///
    /// ```
    /// use jlex_util::span::Span;
    ///
    /// let source = "int x;";
    /// let span = Span::new(4, 5, 1, 5);
    /// assert_eq!(&source[span.range()], "x");
    /// ```
    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
