//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source code characters. It handles UTF-8 encoding
//! correctly and tracks line/column information for error reporting.

use crate::error::{ScanError, ScanResult};

/// Tab stop width used when none is configured.
pub const DEFAULT_TAB_WIDTH: u32 = 4;

/// A cursor for traversing source code character by character.
///
/// The cursor owns the scan position and is the only thing that moves it.
/// Lookahead never fails: past the end it simply returns `None`. Consuming
/// past the end is a programming error reported as [`ScanError::EndOfInput`].
///
/// # Example
///
/// ```
/// use jlex_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("int x;");
///
/// assert_eq!(cursor.peek(0), Some('i'));
/// assert_eq!(cursor.advance(), Ok('i'));
/// assert_eq!(cursor.peek(0), Some('n'));
/// assert_eq!(cursor.column(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters, tabs expanded).
    column: u32,

    /// Distance between tab stops.
    tab_width: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self::with_tab_width(source, DEFAULT_TAB_WIDTH)
    }

    /// Creates a cursor that expands tabs to stops every `tab_width` columns.
    ///
    /// A width of zero is treated as one.
    ///
    /// # Example
    ///
    /// ```
    /// use jlex_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::with_tab_width("\tx", 8);
    /// cursor.advance().unwrap();
    /// assert_eq!(cursor.column(), 9);
    /// ```
    pub fn with_tab_width(source: &'a str, tab_width: u32) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
            tab_width: tab_width.max(1),
        }
    }

    /// Returns the character `offset` characters ahead of the cursor.
    ///
    /// `peek(0)` is the current character. Returns `None` past the end.
    ///
    /// # Example
    ///
    /// ```
    /// use jlex_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("ab");
    /// assert_eq!(cursor.peek(0), Some('a'));
    /// assert_eq!(cursor.peek(1), Some('b'));
    /// assert_eq!(cursor.peek(2), None);
    /// ```
    #[inline]
    pub fn peek(&self, offset: usize) -> Option<char> {
        let rest = self.remaining();
        let bytes = rest.as_bytes();

        // Fast path: every byte up to `offset` is ASCII, so bytes == chars
        if offset < bytes.len() && bytes[..=offset].is_ascii() {
            return Some(bytes[offset] as char);
        }

        rest.chars().nth(offset)
    }

    /// Returns the current character, if any.
    #[inline]
    pub fn first(&self) -> Option<char> {
        self.peek(0)
    }

    /// Consumes and returns the current character.
    ///
    /// Updates line and column tracking: `\n` starts a new line, `\t` moves
    /// to the next tab stop, anything else moves one column.
    ///
    /// # Errors
    ///
    /// [`ScanError::EndOfInput`] if the cursor is already at the end.
    ///
    /// # Example
    ///
    /// ```
    /// use jlex_lex::cursor::Cursor;
    /// use jlex_lex::ScanError;
    ///
    /// let mut cursor = Cursor::new("a");
    /// assert_eq!(cursor.advance(), Ok('a'));
    /// assert_eq!(cursor.advance(), Err(ScanError::EndOfInput { offset: 1 }));
    /// ```
    pub fn advance(&mut self) -> ScanResult<char> {
        let c = self.first().ok_or(ScanError::EndOfInput {
            offset: self.position,
        })?;
        self.bump(c);
        Ok(c)
    }

    /// Moves past `c`, which must be the current character.
    #[inline]
    fn bump(&mut self, c: char) {
        self.position += c.len_utf8();
        match c {
            '\n' => {
                self.line += 1;
                self.column = 1;
            },
            '\t' => {
                self.column = ((self.column - 1) / self.tab_width + 1) * self.tab_width + 1;
            },
            _ => self.column += 1,
        }
    }

    /// Skips a byte order mark at the very start of the source.
    ///
    /// The mark does not occupy a column. Returns true if one was skipped.
    pub fn skip_bom(&mut self) -> bool {
        if self.position == 0 && self.source.starts_with('\u{FEFF}') {
            self.position = '\u{FEFF}'.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consumes the current character if it equals `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use jlex_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("<=");
    /// assert!(cursor.matches('<'));
    /// assert!(!cursor.matches('<'));
    /// assert!(cursor.matches('='));
    /// ```
    pub fn matches(&mut self, expected: char) -> bool {
        if self.first() == Some(expected) {
            self.bump(expected);
            true
        } else {
            false
        }
    }

    /// Consumes `text` if the remaining input starts with it.
    pub fn matches_str(&mut self, text: &str) -> bool {
        if !self.remaining().starts_with(text) {
            return false;
        }
        for c in text.chars() {
            self.bump(c);
        }
        true
    }

    /// Consumes characters while `predicate` holds; returns how many.
    ///
    /// # Example
    ///
    /// ```
    /// use jlex_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("123abc");
    /// assert_eq!(cursor.eat_while(|c| c.is_ascii_digit()), 3);
    /// assert_eq!(cursor.first(), Some('a'));
    /// ```
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> usize {
        let mut count = 0;
        while let Some(c) = self.first() {
            if !predicate(c) {
                break;
            }
            self.bump(c);
            count += 1;
        }
        count
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the configured tab width.
    #[inline]
    pub fn tab_width(&self) -> u32 {
        self.tab_width
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source from `start` up to the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use jlex_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("return x;");
    /// let start = cursor.position();
    /// cursor.eat_while(|c| c.is_ascii_alphabetic());
    /// assert_eq!(cursor.slice_from(start), "return");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the full source text.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }
}
