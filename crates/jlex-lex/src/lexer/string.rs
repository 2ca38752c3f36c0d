//! String literal lexing.
//!
//! This module handles double-quoted string literals and their escape
//! sequences. Strings may not span lines.

use jlex_util::Span;

use crate::chars::parse_unicode_escape;
use crate::error::{LexErrorKind, ScanResult};
use crate::token::{LiteralValue, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal.
    ///
    /// The token's value holds the unescaped contents. If the literal is
    /// unterminated or contains a bad escape the token is `Invalid`, still
    /// carrying the best-effort value.
    pub(super) fn lex_string(&mut self) -> ScanResult<Token<'a>> {
        self.cursor.advance()?;

        let mut value = String::new();
        let mut bad_escape = false;
        let mut terminated = false;

        while !self.at_line_end() {
            match self.cursor.first() {
                Some('"') => {
                    self.cursor.advance()?;
                    terminated = true;
                    break;
                },
                Some('\\') => {
                    if !self.lex_escape(&mut value)? {
                        bad_escape = true;
                    }
                },
                _ => {
                    let run_start = self.cursor.position();
                    self.cursor.advance()?;
                    self.cursor.eat_while(|c| !matches!(c, '"' | '\\' | '\n' | '\r'));
                    value.push_str(self.cursor.slice_from(run_start));
                },
            }
        }

        let token = self
            .make_token(TokenKind::StringLiteral)
            .with_value(LiteralValue::Str(value));

        if !terminated {
            let token = Token {
                kind: TokenKind::Invalid,
                ..token
            };
            return Ok(self.flag(
                token,
                LexErrorKind::UnterminatedString,
                "unterminated string literal",
            ));
        }

        if bad_escape {
            // Each bad escape was already reported with its own span
            return Ok(Token {
                kind: TokenKind::Invalid,
                error: Some(LexErrorKind::InvalidEscape),
                ..token
            });
        }

        Ok(token)
    }

    /// Decodes one escape sequence starting at the backslash.
    ///
    /// Pushes the decoded character onto `value` and returns true. An unknown
    /// or incomplete escape is reported, kept verbatim in `value`, and false
    /// is returned.
    fn lex_escape(&mut self, value: &mut String) -> ScanResult<bool> {
        let start = self.cursor.position();
        let line = self.cursor.line();
        let column = self.cursor.column();
        self.cursor.advance()?;

        if self.at_line_end() {
            // Leave the line break (or end of input) for the caller
            value.push('\\');
            let span = Span::new(start, self.cursor.position(), line, column);
            self.report(LexErrorKind::InvalidEscape, span, "incomplete escape sequence");
            return Ok(false);
        }

        let decoded = match self.cursor.first() {
            Some('n') => Some('\n'),
            Some('t') => Some('\t'),
            Some('r') => Some('\r'),
            Some('0') => Some('\0'),
            Some('b') => Some('\u{0008}'),
            Some('f') => Some('\u{000C}'),
            Some('\\') => Some('\\'),
            Some('"') => Some('"'),
            Some('\'') => Some('\''),
            Some('u') => return self.lex_unicode_escape(value, start, line, column),
            _ => None,
        };

        let c = self.cursor.advance()?;
        match decoded {
            Some(ch) => {
                value.push(ch);
                Ok(true)
            },
            None => {
                value.push('\\');
                value.push(c);
                let span = Span::new(start, self.cursor.position(), line, column);
                self.report(
                    LexErrorKind::InvalidEscape,
                    span,
                    format!("unknown escape sequence `\\{}`", c),
                );
                Ok(false)
            },
        }
    }

    /// True at `\n`, at a `\r\n` pair, or at end of input.
    fn at_line_end(&self) -> bool {
        match self.cursor.first() {
            None | Some('\n') => true,
            Some('\r') => self.cursor.peek(1) == Some('\n'),
            Some(_) => false,
        }
    }

    /// Decodes `\uXXXX`; the cursor is at the `u`.
    fn lex_unicode_escape(
        &mut self,
        value: &mut String,
        start: usize,
        line: u32,
        column: u32,
    ) -> ScanResult<bool> {
        self.cursor.advance()?;

        let hex_start = self.cursor.position();
        let mut digits = 0;
        self.cursor.eat_while(|c| {
            digits += 1;
            digits <= 4 && c.is_ascii_hexdigit()
        });
        let hex = self.cursor.slice_from(hex_start);

        if let Some(ch) = parse_unicode_escape(hex) {
            value.push(ch);
            return Ok(true);
        }

        value.push_str(self.cursor.slice_from(start));
        let span = Span::new(start, self.cursor.position(), line, column);
        let message = if hex.len() == 4 {
            format!("`\\u{}` is not a valid character", hex)
        } else {
            "`\\u` must be followed by exactly four hex digits".to_string()
        };
        self.report(LexErrorKind::InvalidEscape, span, message);
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::LexErrorKind;
    use crate::token::{Token, TokenKind};
    use crate::Lexer;

    fn lex_string(source: &str) -> Token<'_> {
        Lexer::new(source).next_token().unwrap()
    }

    #[test]
    fn test_simple_string() {
        let token = lex_string("\"hello\"");
        assert_eq!(token.kind, TokenKind::StringLiteral);
        assert_eq!(token.lexeme, "\"hello\"");
        assert_eq!(token.string(), Some("hello"));
    }

    #[test]
    fn test_empty_string() {
        let token = lex_string("\"\"");
        assert_eq!(token.kind, TokenKind::StringLiteral);
        assert_eq!(token.string(), Some(""));
    }

    #[test]
    fn test_escapes() {
        let token = lex_string(r#""a\nb\tc\\d\"e\'f\r\0\b\f""#);
        assert_eq!(token.kind, TokenKind::StringLiteral);
        assert_eq!(token.string(), Some("a\nb\tc\\d\"e'f\r\0\u{8}\u{c}"));
    }

    #[test]
    fn test_windows_path() {
        let token = lex_string(r#""Path: C:\\Users\\Documents""#);
        assert_eq!(token.string(), Some(r"Path: C:\Users\Documents"));
    }

    #[test]
    fn test_unicode_escape() {
        let token = lex_string(r#""caf\u00e9 \u0041""#);
        assert_eq!(token.kind, TokenKind::StringLiteral);
        assert_eq!(token.string(), Some("café A"));
    }

    #[test]
    fn test_short_unicode_escape() {
        let mut lexer = Lexer::new(r#""\u12x""#);
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::Invalid);
        assert_eq!(token.error, Some(LexErrorKind::InvalidEscape));
        assert_eq!(token.string(), Some(r"\u12x"));
        assert_eq!(lexer.errors()[0].span.range(), 1..5);
    }

    #[test]
    fn test_surrogate_unicode_escape() {
        let mut lexer = Lexer::new(r#""\uD800""#);
        let token = lexer.next_token().unwrap();
        assert_eq!(token.error, Some(LexErrorKind::InvalidEscape));
        assert!(lexer.errors()[0].message.contains("D800"));
    }

    #[test]
    fn test_unknown_escape_kept_verbatim() {
        let mut lexer = Lexer::new(r#""a\qb" x"#);
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::Invalid);
        assert_eq!(token.lexeme, r#""a\qb""#);
        assert_eq!(token.string(), Some(r"a\qb"));
        assert_eq!(lexer.errors().len(), 1);
        assert_eq!(lexer.errors()[0].span.range(), 2..4);
        assert_eq!(lexer.next_token().unwrap().lexeme, "x");
    }

    #[test]
    fn test_unterminated_at_newline() {
        let mut lexer = Lexer::new("\"abc\nx");
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::Invalid);
        assert_eq!(token.lexeme, "\"abc");
        assert_eq!(token.error, Some(LexErrorKind::UnterminatedString));
        assert_eq!(token.string(), Some("abc"));

        let next = lexer.next_token().unwrap();
        assert_eq!(next.lexeme, "x");
        assert_eq!(next.span.line, 2);
    }

    #[test]
    fn test_unterminated_before_crlf() {
        let mut lexer = Lexer::new("\"abc\r\nx");
        let token = lexer.next_token().unwrap();
        assert_eq!(token.lexeme, "\"abc");
        assert_eq!(token.span.range(), 0..4);
        assert_eq!(token.string(), Some("abc"));
        assert_eq!(lexer.next_token().unwrap().span.line, 2);
    }

    #[test]
    fn test_backslash_before_crlf() {
        let mut lexer = Lexer::new("\"a\\\r\n");
        let token = lexer.next_token().unwrap();
        assert_eq!(token.lexeme, "\"a\\");
        assert_eq!(token.string(), Some("a\\"));
        let kinds: Vec<_> = lexer.errors().iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![
            LexErrorKind::InvalidEscape,
            LexErrorKind::UnterminatedString,
        ]);
    }

    #[test]
    fn test_lone_carriage_return_is_content() {
        let token = lex_string("\"a\rb\"");
        assert_eq!(token.kind, TokenKind::StringLiteral);
        assert_eq!(token.string(), Some("a\rb"));
    }

    #[test]
    fn test_unterminated_at_eof() {
        let mut lexer = Lexer::new("\"abc");
        let token = lexer.next_token().unwrap();
        assert_eq!(token.error, Some(LexErrorKind::UnterminatedString));
        assert!(lexer.next_token().unwrap().is_eof());
        assert_eq!(lexer.errors().len(), 1);
    }

    #[test]
    fn test_trailing_backslash() {
        let mut lexer = Lexer::new("\"abc\\");
        let token = lexer.next_token().unwrap();
        assert_eq!(token.error, Some(LexErrorKind::UnterminatedString));
        assert_eq!(token.string(), Some("abc\\"));
        let kinds: Vec<_> = lexer.errors().iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![LexErrorKind::InvalidEscape, LexErrorKind::UnterminatedString]
        );
    }

    #[test]
    fn test_non_ascii_content() {
        let token = lex_string("\"héllo wörld\"");
        assert_eq!(token.string(), Some("héllo wörld"));
        assert_eq!(token.span.len(), "\"héllo wörld\"".len());
    }
}
