//! Comment lexing.
//!
//! This module handles line and block comments and the whitespace between
//! tokens. Block comments do not nest: the first `*/` closes the comment.

use jlex_util::Span;

use crate::chars::is_whitespace;
use crate::error::{LexErrorKind, ScanResult};
use crate::token::{Token, TokenKind, Trivia, TriviaKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace, recording the run as trivia.
    ///
    /// A byte order mark at the start of the source is part of the first
    /// whitespace run.
    pub(super) fn skip_whitespace(&mut self) {
        let start = self.cursor.position();
        let line = self.cursor.line();
        let column = self.cursor.column();

        self.cursor.skip_bom();
        self.cursor.eat_while(is_whitespace);

        if self.cursor.position() > start {
            self.trivia.push(Trivia {
                kind: TriviaKind::Whitespace,
                span: Span::new(start, self.cursor.position(), line, column),
            });
        }
    }

    /// Lexes a comment starting at `//` or `/*`.
    pub(super) fn lex_comment(&mut self) -> ScanResult<Token<'a>> {
        self.cursor.advance()?;

        if self.cursor.matches('/') {
            self.cursor.eat_while(|c| c != '\n');
            return Ok(self.make_token(TokenKind::Comment));
        }

        self.cursor.advance()?;
        loop {
            self.cursor.eat_while(|c| c != '*');
            if self.cursor.matches_str("*/") {
                return Ok(self.make_token(TokenKind::Comment));
            }
            if self.cursor.is_at_end() {
                break;
            }
            // A lone '*' inside the comment
            self.cursor.advance()?;
        }

        let token = self.make_token(TokenKind::Comment);
        Ok(self.flag(token, LexErrorKind::UnterminatedComment, "unterminated block comment"))
    }
}
