//! Property-based tests over arbitrary inputs.

mod common;

use common::{assert_spans_ordered, scan};
use jlex_lex::{Lexer, LexerConfig, Radix, TokenKind};
use proptest::prelude::*;

fn significant(source: &str) -> Vec<jlex_lex::Token<'_>> {
    Lexer::new(source).filter(|t| !t.is_eof()).collect()
}

proptest! {
    #[test]
    fn test_property_any_input_round_trips(input in "\\PC{0,200}") {
        let out = scan(&input, &LexerConfig::default());
        prop_assert_eq!(out.reconstruct(), input.clone());
        prop_assert!(out.tokens.last().is_some_and(|t| t.is_eof()));
        assert_spans_ordered(&out);
    }

    #[test]
    fn test_property_java_like_input_round_trips(
        input in "[a-z0-9_ .+\\-*/=<>!&|\"\\\\\n\t(){};]{0,200}"
    ) {
        let config = LexerConfig::default().keep_comments(true);
        let out = scan(&input, &config);
        prop_assert_eq!(out.reconstruct(), input.clone());
    }

    #[test]
    fn test_property_spans_match_lexemes(input in "\\PC{0,120}") {
        let mut lexer = Lexer::new(&input);
        for token in lexer.by_ref() {
            prop_assert_eq!(&input[token.span.range()], token.lexeme);
        }
        prop_assert!(lexer.is_done());
    }

    #[test]
    fn test_property_identifier_strings(input in "[a-zA-Z_][a-zA-Z0-9_]{0,100}") {
        let tokens = significant(&input);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert!(matches!(tokens[0].kind, TokenKind::Identifier | TokenKind::Keyword));
        prop_assert_eq!(tokens[0].lexeme, input.as_str());
    }

    #[test]
    fn test_property_decimal_number_strings(input in "[0-9]{1,25}") {
        let tokens = significant(&input);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::IntegerLiteral);
        let value = tokens[0].integer().unwrap();
        prop_assert_eq!(value.radix, Radix::Decimal);
        prop_assert_eq!(value.value, input.parse::<u64>().ok());
    }

    #[test]
    fn test_property_hex_number_strings(digits in "[0-9a-fA-F]{1,16}") {
        let input = format!("0x{}", digits);
        let tokens = significant(&input);
        prop_assert_eq!(tokens.len(), 1);
        let value = tokens[0].integer().unwrap();
        prop_assert_eq!(value.value, u64::from_str_radix(&digits, 16).ok());
        prop_assert_eq!(value.radix, Radix::Hexadecimal);
    }

    #[test]
    fn test_property_string_literals(input in "[^\"\\\\\n]{0,100}") {
        let source = format!("\"{}\"", input);
        let tokens = significant(&source);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        prop_assert_eq!(tokens[0].string(), Some(input.as_str()));
    }

    #[test]
    fn test_property_floats_parse_like_std(
        int in "[0-9]{1,6}",
        frac in "[0-9]{1,6}",
        exp in proptest::option::of(-30i32..30),
    ) {
        let source = match exp {
            Some(e) => format!("{}.{}e{}", int, frac, e),
            None => format!("{}.{}", int, frac),
        };
        let tokens = significant(&source);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::FloatLiteral);
        let value = tokens[0].float().unwrap();
        prop_assert_eq!(value.value, source.parse::<f64>().unwrap());
        prop_assert_eq!(value.has_exponent, exp.is_some());
    }
}
