//! Diagnostic codes for categorizing errors and warnings.
//!
//! # Examples
//!
//! ```
//! use jlex_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_MALFORMED_NUMBER;
//! assert_eq!(code.as_str(), "E1001");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where the prefix is
/// "E" for errors or "W" for warnings and the number is zero-padded to four
/// digits. Lexer codes live in the 1000 range.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    ///
    /// # Examples
    ///
    /// ```
    /// use jlex_util::diagnostic::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::new("W", 7);
    /// assert_eq!(code.as_str(), "W0007");
    /// ```
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the full code string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXER ERROR CODES (E1001-E1099)
    // =========================================================================

    /// E1001: Malformed numeric literal (bad hex prefix or exponent)
    pub const E_LEXER_MALFORMED_NUMBER: Self = Self::new("E", 1001);
    /// E1002: String literal not closed before newline or end of input
    pub const E_LEXER_UNTERMINATED_STRING: Self = Self::new("E", 1002);
    /// E1003: Unknown escape sequence in a string literal
    pub const E_LEXER_INVALID_ESCAPE: Self = Self::new("E", 1003);
    /// E1004: Block comment not closed before end of input
    pub const E_LEXER_UNTERMINATED_COMMENT: Self = Self::new("E", 1004);
    /// E1005: Character that starts no token
    pub const E_LEXER_UNEXPECTED_CHAR: Self = Self::new("E", 1005);
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}
