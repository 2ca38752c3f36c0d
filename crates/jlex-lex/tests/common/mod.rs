//! Shared helpers for the jlex-lex integration tests.

#![allow(dead_code)]

use jlex_lex::{tokenize, LexerConfig, Token, TokenKind, Tokenized};

/// Java fixture exercising every token category.
pub const JAVA_FIXTURE: &str = include_str!("../fixtures/TestClass.java");

/// C fixture scanned with the C profile.
pub const C_FIXTURE: &str = include_str!("../fixtures/program.c");

/// Tokenizes `source`, panicking on scanner misuse.
pub fn scan<'a>(source: &'a str, config: &LexerConfig) -> Tokenized<'a> {
    tokenize(source, config).expect("source within limits")
}

/// First token with the given lexeme.
pub fn find<'t, 'a>(tokens: &'t [Token<'a>], lexeme: &str) -> &'t Token<'a> {
    tokens
        .iter()
        .find(|t| t.lexeme == lexeme)
        .unwrap_or_else(|| panic!("no token `{}`", lexeme))
}

/// Number of tokens of `kind`.
pub fn count(tokens: &[Token<'_>], kind: TokenKind) -> usize {
    tokens.iter().filter(|t| t.kind == kind).count()
}

/// Asserts that spans are in source order and do not overlap.
pub fn assert_spans_ordered(out: &Tokenized<'_>) {
    for pair in out.tokens.windows(2) {
        assert!(
            pair[0].span.end <= pair[1].span.start,
            "{} overlaps {}",
            pair[0],
            pair[1]
        );
    }
}
