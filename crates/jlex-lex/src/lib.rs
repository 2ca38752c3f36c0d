//! jlex-lex - Lexical Analyzer for Java-like Source Text
//!
//! This crate turns source text into a stream of classified tokens with
//! precise locations. Malformed input never aborts the scan: each problem is
//! recorded as a [`LexError`] and the offending token is flagged, so a
//! consumer can report every error in a file in one pass.
//!
//! # Example Usage
//!
//! ```
//! use jlex_lex::{tokenize, Lexer, LexerConfig, TokenKind};
//!
//! let source = "if (x <= 0xFF) return 1.5e10;";
//!
//! // Pull tokens one at a time
//! let mut lexer = Lexer::new(source);
//! assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Keyword);
//!
//! // Or scan the whole buffer
//! let out = tokenize(source, &LexerConfig::default()).unwrap();
//! assert_eq!(out.tokens.last().unwrap().kind, TokenKind::EndOfInput);
//! assert_eq!(out.reconstruct(), source);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`chars`] - Character classes
//! - [`keywords`] - Keyword sets and language profiles
//! - [`config`] - Lexer configuration, loadable from TOML
//! - [`error`] - Lexical, scanner and configuration errors
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! Membership in the active [`KeywordSet`]. The Java profile holds the Java
//! reserved words plus `true`, `false`, `null` and `String`; the C profile
//! holds the C11 keywords.
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z_][a-zA-Z0-9_]*`
//!
//! ## Literals
//!
//! - **Integer**: `42`, `0xFF` (leading zeros are decimal)
//! - **Float**: `2.5`, `.5`, `1.5e10`, `2.3E-5`, `1.5f`
//! - **String**: `"hello"`, `"tab\there"`, `"é"`
//!
//! ## Operators
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`, `%`, `++`, `--`
//! - **Comparison**: `==`, `!=`, `<`, `>`, `<=`, `>=`
//! - **Logical**: `&&`, `||`, `!`, `?`, `:`
//! - **Assignment**: `=`, `+=`, `-=`, `*=`, `/=`, `%=`, `&=`, `|=`, `^=`, `<<=`, `>>=`, `>>>=`
//! - **Bitwise**: `&`, `|`, `^`, `~`, `<<`, `>>`, `>>>`
//! - **Other**: `->`, `::`
//!
//! ## Punctuation
//!
//! `(`, `)`, `{`, `}`, `[`, `]`, `;`, `,`, `.`, `...`, `@`
//!
//! ## Special
//!
//! - **Comment**: only surfaced with `keep_comments`
//! - **EndOfInput**: produced exactly once, at the end
//! - **Invalid**: unrecognized characters and malformed literals

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod config;
pub mod cursor;
pub mod error;
pub mod keywords;
pub mod lexer;
pub mod token;
mod tokenized;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use config::LexerConfig;
pub use cursor::Cursor;
pub use error::{ConfigError, ConfigResult, LexError, LexErrorKind, ScanError, ScanResult};
pub use keywords::{KeywordSet, Profile};
pub use lexer::{Lexer, SYMBOLS};
pub use token::{
    FloatSuffix, FloatValue, IntegerValue, LiteralValue, Operator, Punctuation, Radix, Token,
    TokenKind, Trivia, TriviaKind,
};
pub use tokenized::{tokenize, Tokenized};
