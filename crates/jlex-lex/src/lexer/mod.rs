//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, dispatch and the token stream state machine
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Integer and floating-point literal lexing
//! - `string` - String literal lexing and escape decoding
//! - `operator` - Operator and punctuation lexing
//! - `comment` - Comment lexing and whitespace skipping

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use core::Lexer;
pub use operator::SYMBOLS;
