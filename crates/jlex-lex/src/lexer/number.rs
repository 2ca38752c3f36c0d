//! Number literal lexing.
//!
//! This module handles lexing of integer and floating-point literals.
//!
//! # Number Formats
//!
//! - Decimal: `42`, `0`, `007` (leading zeros are decimal, not octal)
//! - Hexadecimal: `0xFF`, `0XdeadBEEF`
//! - Float: `2.75`, `.5`, `1e10`, `2.5e-3`, `5e+3`, `1.5f`, `2D`
//!
//! Values that do not fit are not errors here: integers beyond `u64` keep a
//! `None` value and floats beyond `f64` become infinite.

use crate::error::{LexErrorKind, ScanResult};
use crate::token::{
    FloatSuffix, FloatValue, IntegerValue, LiteralValue, Radix, Token, TokenKind,
};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal starting at a digit, or at `.` followed by a digit.
    pub(super) fn lex_number(&mut self) -> ScanResult<Token<'a>> {
        if self.cursor.first() == Some('0') && matches!(self.cursor.peek(1), Some('x' | 'X')) {
            return self.lex_hex();
        }

        self.cursor.eat_while(|c| c.is_ascii_digit());

        let mut is_float = false;
        if self.cursor.first() == Some('.')
            && self.cursor.peek(1).is_some_and(|c| c.is_ascii_digit())
        {
            self.cursor.advance()?;
            self.cursor.eat_while(|c| c.is_ascii_digit());
            is_float = true;
        }

        let mut has_exponent = false;
        let mut exponent_digits = 0;
        if matches!(self.cursor.first(), Some('e' | 'E')) {
            self.cursor.advance()?;
            if matches!(self.cursor.first(), Some('+' | '-')) {
                self.cursor.advance()?;
            }
            exponent_digits = self.cursor.eat_while(|c| c.is_ascii_digit());
            has_exponent = true;
        }

        if has_exponent && exponent_digits == 0 {
            let token = self.make_token(TokenKind::Invalid);
            return Ok(self.flag(token, LexErrorKind::MalformedNumber, "no digits in exponent"));
        }

        let suffix = match self.cursor.first() {
            Some('f' | 'F') => Some(FloatSuffix::Float),
            Some('d' | 'D') => Some(FloatSuffix::Double),
            _ => None,
        };
        if suffix.is_some() {
            self.cursor.advance()?;
        }

        if is_float || has_exponent || suffix.is_some() {
            let token = self.make_token(TokenKind::FloatLiteral);
            let digits = match suffix {
                Some(_) => &token.lexeme[..token.lexeme.len() - 1],
                None => token.lexeme,
            };
            // The grammar above only admits text `f64` can parse
            let value = digits.parse::<f64>().unwrap_or(f64::INFINITY);
            return Ok(token.with_value(LiteralValue::Float(FloatValue {
                value,
                has_exponent,
                suffix,
            })));
        }

        let token = self.make_token(TokenKind::IntegerLiteral);
        let value = token.lexeme.parse::<u64>().ok();
        Ok(token.with_value(LiteralValue::Integer(IntegerValue {
            value,
            radix: Radix::Decimal,
        })))
    }

    /// Lexes a `0x`/`0X` literal.
    fn lex_hex(&mut self) -> ScanResult<Token<'a>> {
        self.cursor.advance()?;
        self.cursor.advance()?;

        let digits = self.cursor.eat_while(|c| c.is_ascii_hexdigit());
        let token = self.make_token(TokenKind::IntegerLiteral);
        if digits == 0 {
            let token = Token {
                kind: TokenKind::Invalid,
                ..token
            };
            return Ok(self.flag(
                token,
                LexErrorKind::MalformedNumber,
                "no digits after hex prefix",
            ));
        }

        let value = u64::from_str_radix(&token.lexeme[2..], 16).ok();
        Ok(token.with_value(LiteralValue::Integer(IntegerValue {
            value,
            radix: Radix::Hexadecimal,
        })))
    }
}
