//! Error types for the scanner.
//!
//! Two families of errors live here and they are deliberately kept apart:
//!
//! - [`LexError`] / [`LexErrorKind`] describe problems in the *input*. They
//!   never stop the scan; the lexer records them in a side list and flags the
//!   offending token.
//! - [`ScanError`] describes misuse of the scanner itself (pulling past the
//!   end of the stream, advancing the cursor past the end of input, or a
//!   source larger than the configured cap).
//!
//! [`ConfigError`] covers loading a [`LexerConfig`](crate::LexerConfig).

use std::fmt;
use std::path::PathBuf;

use jlex_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode, SourceFile, Span};
use thiserror::Error;

/// Machine-readable category of a lexical error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// Hex literal without digits, or exponent without digits.
    MalformedNumber,
    /// String literal not closed before a newline or end of input.
    UnterminatedString,
    /// Unknown or incomplete escape sequence in a string literal.
    InvalidEscape,
    /// Block comment not closed before end of input.
    UnterminatedComment,
    /// Character that cannot start any token.
    UnexpectedCharacter,
}

impl LexErrorKind {
    /// Stable diagnostic code for this kind of error.
    pub const fn code(self) -> DiagnosticCode {
        match self {
            LexErrorKind::MalformedNumber => DiagnosticCode::E_LEXER_MALFORMED_NUMBER,
            LexErrorKind::UnterminatedString => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            LexErrorKind::InvalidEscape => DiagnosticCode::E_LEXER_INVALID_ESCAPE,
            LexErrorKind::UnterminatedComment => DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT,
            LexErrorKind::UnexpectedCharacter => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
        }
    }

    fn help(self) -> &'static str {
        match self {
            LexErrorKind::MalformedNumber => {
                "numeric literals need at least one digit after `0x` or an exponent marker"
            },
            LexErrorKind::UnterminatedString => "add a closing `\"` before the end of the line",
            LexErrorKind::InvalidEscape => {
                "valid escapes are \\n \\t \\r \\b \\f \\0 \\\\ \\\" \\' and \\uXXXX"
            },
            LexErrorKind::UnterminatedComment => "close the block comment with `*/`",
            LexErrorKind::UnexpectedCharacter => {
                "remove the character or place it inside a string literal"
            },
        }
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LexErrorKind::MalformedNumber => "malformed number",
            LexErrorKind::UnterminatedString => "unterminated string",
            LexErrorKind::InvalidEscape => "invalid escape",
            LexErrorKind::UnterminatedComment => "unterminated comment",
            LexErrorKind::UnexpectedCharacter => "unexpected character",
        };
        f.write_str(name)
    }
}

/// A recoverable lexical error with its location.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} at {span}: {message}")]
pub struct LexError {
    /// What went wrong.
    pub kind: LexErrorKind,
    /// Offending source range.
    pub span: Span,
    /// Human-readable description.
    pub message: String,
}

impl LexError {
    /// Create a new lexical error.
    pub fn new(kind: LexErrorKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            message: message.into(),
        }
    }

    /// Diagnostic code for this error.
    pub fn code(&self) -> DiagnosticCode {
        self.kind.code()
    }

    /// Convert into a [`Diagnostic`] quoting the offending line of `file`.
    pub fn to_diagnostic(&self, file: &SourceFile) -> Diagnostic {
        let mut builder = DiagnosticBuilder::error(self.message.clone())
            .code(self.code())
            .span(self.span)
            .snippet_from(file, self.kind.to_string())
            .help(self.kind.help());

        if let Ok(text) = file.extract_range(self.span.start, self.span.end) {
            if !text.is_empty() && !text.contains('\n') {
                builder = builder.note(format!("found `{}`", text));
            }
        }

        builder.build()
    }
}

/// Misuse of the scanner. Unlike [`LexError`] these are always fatal.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScanError {
    /// The cursor was asked to consume a character past the end of input.
    #[error("cannot advance past end of input at byte {offset}")]
    EndOfInput {
        /// Byte offset of the end of input.
        offset: usize,
    },

    /// `next_token` was called after the end-of-input token was produced.
    #[error("token stream already reached end of input")]
    StreamExhausted,

    /// The source exceeds the configured `max_source_len`.
    #[error("source is {len} bytes, limit is {limit} bytes")]
    SourceTooLarge {
        /// Length of the rejected source.
        len: usize,
        /// Configured limit.
        limit: usize,
    },
}

/// Result type alias for scanner operations.
pub type ScanResult<T> = std::result::Result<T, ScanError>;

/// Error type for loading and validating a [`LexerConfig`](crate::LexerConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file does not exist.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Reading the configuration file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The TOML text could not be parsed into a configuration.
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be rendered as TOML.
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A field holds a value outside its allowed range.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
