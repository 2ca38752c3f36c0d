//! Edge case tests for jlex-lex

use crate::{tokenize, LexErrorKind, Lexer, LexerConfig, Operator, Token, TokenKind};

fn lex_all(source: &str) -> Vec<Token<'_>> {
    Lexer::new(source).filter(|t| !t.is_eof()).collect()
}

fn errors_of(source: &str) -> Vec<LexErrorKind> {
    let out = tokenize(source, &LexerConfig::default()).unwrap();
    out.errors.iter().map(|e| e.kind).collect()
}

// ==================== IDENTIFIERS ====================

#[test]
fn test_edge_single_char_ident() {
    let t = lex_all("x");
    assert_eq!(t[0].kind, TokenKind::Identifier);
}

#[test]
fn test_edge_long_identifier() {
    let name = "a".repeat(10000);
    let source = format!("int {} = 1;", name);
    let t = lex_all(&source);
    assert_eq!(t[1].lexeme.len(), 10000);
    assert_eq!(t[1].kind, TokenKind::Identifier);
}

#[test]
fn test_edge_underscore_identifiers() {
    let t = lex_all("_ _underscore __multiple_underscores__ _123mixed");
    assert_eq!(t.len(), 4);
    assert!(t.iter().all(|t| t.kind == TokenKind::Identifier));
}

#[test]
fn test_edge_keywords_not_idents() {
    let t = lex_all("class int if");
    assert!(t.iter().all(|t| t.kind == TokenKind::Keyword));
}

// ==================== NUMBERS ====================

#[test]
fn test_edge_hex_bounds() {
    let t = lex_all("0x0 0xFF 0xFFFFFFFFFFFFFFFF 0x10000000000000000");
    assert_eq!(t[0].integer().unwrap().value, Some(0));
    assert_eq!(t[1].integer().unwrap().value, Some(255));
    assert_eq!(t[2].integer().unwrap().value, Some(u64::MAX));
    assert!(t[3].integer().unwrap().overflowed());
}

#[test]
fn test_edge_int_max_boundary() {
    let t = lex_all("2147483647 2147483648");
    assert!(t[0].integer().unwrap().fits_i32());
    assert!(!t[1].integer().unwrap().fits_i32());
    assert_eq!(t[1].kind, TokenKind::IntegerLiteral);
}

#[test]
fn test_edge_hex_prefix_then_identifier() {
    // `0xg` has no hex digits; `g` starts a new token
    let t = lex_all("0xg");
    assert_eq!(t[0].kind, TokenKind::Invalid);
    assert_eq!(t[1].lexeme, "g");
}

#[test]
fn test_edge_range_like_dots() {
    let t = lex_all("1..2");
    assert_eq!(t[0].lexeme, "1");
    assert_eq!(t[1].lexeme, ".");
    assert_eq!(t[2].lexeme, ".2");
    assert_eq!(t[2].kind, TokenKind::FloatLiteral);
}

#[test]
fn test_edge_exponent_sign_operator() {
    let t = lex_all("1e5-2");
    assert_eq!(t[0].lexeme, "1e5");
    assert_eq!(t[1].kind, TokenKind::Operator(Operator::Minus));
    assert_eq!(t[2].lexeme, "2");
}

// ==================== STRINGS ====================

#[test]
fn test_edge_string_with_comment_markers() {
    let t = lex_all(r#""// not a comment /* nor this */""#);
    assert_eq!(t.len(), 1);
    assert_eq!(t[0].string(), Some("// not a comment /* nor this */"));
}

#[test]
fn test_edge_multiple_bad_escapes() {
    assert_eq!(
        errors_of(r#""\q\w""#),
        vec![LexErrorKind::InvalidEscape, LexErrorKind::InvalidEscape]
    );
}

#[test]
fn test_edge_crlf_ends_string() {
    let t = lex_all("\"abc\r\nx");
    assert_eq!(t[0].error, Some(LexErrorKind::UnterminatedString));
    assert_eq!(t[0].lexeme, "\"abc");
    assert_eq!(t[1].span.line, 2);
}

// ==================== COMMENTS ====================

#[test]
fn test_edge_comment_directly_after_token() {
    let t = lex_all("a//b\nc/**/d");
    let lexemes: Vec<_> = t.iter().map(|t| t.lexeme).collect();
    assert_eq!(lexemes, vec!["a", "c", "d"]);
}

#[test]
fn test_edge_empty_block_comment() {
    assert!(errors_of("/**/").is_empty());
    assert_eq!(errors_of("/*/"), vec![LexErrorKind::UnterminatedComment]);
}

// ==================== MISC ====================

#[test]
fn test_edge_every_error_kind_once() {
    let errors = errors_of("0x 1e \"\\q\" # \"open\n/* end");
    assert_eq!(
        errors,
        vec![
            LexErrorKind::MalformedNumber,
            LexErrorKind::MalformedNumber,
            LexErrorKind::InvalidEscape,
            LexErrorKind::UnexpectedCharacter,
            LexErrorKind::UnterminatedString,
            LexErrorKind::UnterminatedComment,
        ]
    );
}

#[test]
fn test_edge_tabs_in_columns() {
    let t = lex_all("\ta\t\tb");
    assert_eq!(t[0].span.column, 5);
    assert_eq!(t[1].span.column, 13);
}

#[test]
fn test_edge_large_input_finishes() {
    let source = "x = x + 1;\n".repeat(5000);
    let out = tokenize(&source, &LexerConfig::default()).unwrap();
    assert_eq!(out.tokens.len(), 6 * 5000 + 1);
    assert_eq!(out.tokens.last().unwrap().span.line, 5001);
}

#[test]
fn test_edge_only_invalid_characters() {
    let t = lex_all("§¶");
    assert_eq!(t.len(), 2);
    assert!(t.iter().all(|t| t.kind == TokenKind::Invalid));
    assert_eq!(t[1].span.start, "§".len());
}
