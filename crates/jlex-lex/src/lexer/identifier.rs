//! Identifier and keyword lexing.
//!
//! This module handles lexing of identifiers and keywords.

use crate::chars::is_ident_continue;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Identifiers start with a letter or underscore, followed by letters,
    /// digits or underscores. The full name is then looked up in the active
    /// keyword set.
    pub(super) fn lex_identifier(&mut self) -> Token<'a> {
        self.cursor.eat_while(is_ident_continue);

        let token = self.make_token(TokenKind::Identifier);
        if self.keywords.contains(token.lexeme) {
            Token {
                kind: TokenKind::Keyword,
                ..token
            }
        } else {
            token
        }
    }
}
