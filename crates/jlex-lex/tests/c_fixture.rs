//! Scanning C source with the C keyword profile.

mod common;

use common::{count, find, scan, C_FIXTURE};
use jlex_lex::{LexErrorKind, LexerConfig, Operator, Profile, TokenKind};

fn c_config() -> LexerConfig {
    LexerConfig::for_profile(Profile::C)
}

#[test]
fn test_preprocessor_hash_is_unexpected() {
    let out = scan(C_FIXTURE, &c_config());

    assert_eq!(out.errors.len(), 2);
    assert!(out
        .errors
        .iter()
        .all(|e| e.kind == LexErrorKind::UnexpectedCharacter));
    assert_eq!(out.errors[0].span.line, 5);
    assert_eq!(out.errors[1].span.line, 6);

    // Scanning resumes right after each `#`
    let include = find(&out.tokens, "include");
    assert_eq!(include.kind, TokenKind::Identifier);
    assert_eq!(include.span.column, 2);
}

#[test]
fn test_c_keywords() {
    let out = scan(C_FIXTURE, &c_config());
    for word in ["int", "float", "double", "char", "void", "for", "while", "continue", "return"] {
        assert_eq!(find(&out.tokens, word).kind, TokenKind::Keyword, "{word}");
    }
    // Not a C keyword
    assert_eq!(find(&out.tokens, "printf").kind, TokenKind::Identifier);
}

#[test]
fn test_increment_and_decrement() {
    let out = scan(C_FIXTURE, &c_config());
    assert_eq!(count(&out.tokens, TokenKind::Operator(Operator::PlusPlus)), 1);
    assert_eq!(count(&out.tokens, TokenKind::Operator(Operator::MinusMinus)), 1);
}

#[test]
fn test_c_literals() {
    let out = scan(C_FIXTURE, &c_config());
    assert_eq!(find(&out.tokens, "0xFF00AA").integer().unwrap().value, Some(0xFF00AA));
    assert_eq!(find(&out.tokens, "0x10").integer().unwrap().value, Some(16));
    assert_eq!(find(&out.tokens, "6.626e-34").kind, TokenKind::FloatLiteral);
    assert_eq!(find(&out.tokens, "1e-5").kind, TokenKind::FloatLiteral);

    let backslash = out
        .tokens
        .iter()
        .find_map(|t| t.string().filter(|s| s.starts_with("Windows")))
        .unwrap();
    assert_eq!(backslash, r"Windows path: C:\Program Files\App");
}

#[test]
fn test_c_fixture_round_trips() {
    let out = scan(C_FIXTURE, &c_config());
    assert_eq!(out.reconstruct(), C_FIXTURE);
}

#[test]
fn test_java_profile_treats_c_words_as_identifiers() {
    let out = scan(C_FIXTURE, &LexerConfig::default());
    // `int` is shared, `main` is never a keyword
    assert_eq!(find(&out.tokens, "int").kind, TokenKind::Keyword);
    assert_eq!(find(&out.tokens, "main").kind, TokenKind::Identifier);
}
