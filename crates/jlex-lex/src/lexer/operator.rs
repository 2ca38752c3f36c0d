//! Operator and punctuation lexing.
//!
//! Symbols are matched against a single static table ordered longest first,
//! so the first entry that matches is the maximal munch.

use crate::error::{LexErrorKind, ScanResult};
use crate::token::{Operator, Punctuation, Token, TokenKind};
use crate::Lexer;

const fn op(op: Operator) -> TokenKind {
    TokenKind::Operator(op)
}

const fn punct(p: Punctuation) -> TokenKind {
    TokenKind::Punctuation(p)
}

/// Every operator and punctuation symbol, longest first.
pub static SYMBOLS: &[(&str, TokenKind)] = &[
    (">>>=", op(Operator::UShrEq)),
    ("<<=", op(Operator::ShlEq)),
    (">>=", op(Operator::ShrEq)),
    (">>>", op(Operator::UShr)),
    ("...", punct(Punctuation::Ellipsis)),
    ("==", op(Operator::EqEq)),
    ("!=", op(Operator::NotEq)),
    ("<=", op(Operator::LtEq)),
    (">=", op(Operator::GtEq)),
    ("&&", op(Operator::AndAnd)),
    ("||", op(Operator::OrOr)),
    ("++", op(Operator::PlusPlus)),
    ("--", op(Operator::MinusMinus)),
    ("+=", op(Operator::PlusEq)),
    ("-=", op(Operator::MinusEq)),
    ("*=", op(Operator::StarEq)),
    ("/=", op(Operator::SlashEq)),
    ("%=", op(Operator::PercentEq)),
    ("&=", op(Operator::AmpEq)),
    ("|=", op(Operator::PipeEq)),
    ("^=", op(Operator::CaretEq)),
    ("<<", op(Operator::Shl)),
    (">>", op(Operator::Shr)),
    ("->", op(Operator::Arrow)),
    ("::", op(Operator::ColonColon)),
    ("+", op(Operator::Plus)),
    ("-", op(Operator::Minus)),
    ("*", op(Operator::Star)),
    ("/", op(Operator::Slash)),
    ("%", op(Operator::Percent)),
    ("=", op(Operator::Eq)),
    ("<", op(Operator::Lt)),
    (">", op(Operator::Gt)),
    ("!", op(Operator::Bang)),
    ("&", op(Operator::Amp)),
    ("|", op(Operator::Pipe)),
    ("^", op(Operator::Caret)),
    ("~", op(Operator::Tilde)),
    ("?", op(Operator::Question)),
    (":", op(Operator::Colon)),
    ("(", punct(Punctuation::LParen)),
    (")", punct(Punctuation::RParen)),
    ("{", punct(Punctuation::LBrace)),
    ("}", punct(Punctuation::RBrace)),
    ("[", punct(Punctuation::LBracket)),
    ("]", punct(Punctuation::RBracket)),
    (";", punct(Punctuation::Semicolon)),
    (",", punct(Punctuation::Comma)),
    (".", punct(Punctuation::Dot)),
    ("@", punct(Punctuation::At)),
];

impl<'a> Lexer<'a> {
    /// Lexes an operator or punctuation symbol.
    ///
    /// A character that starts no symbol becomes a one-character `Invalid`
    /// token and scanning resumes right after it.
    pub(super) fn lex_operator(&mut self) -> ScanResult<Token<'a>> {
        let rest = self.cursor.remaining();
        if let Some(&(text, kind)) = SYMBOLS.iter().find(|(text, _)| rest.starts_with(text)) {
            self.cursor.matches_str(text);
            return Ok(self.make_token(kind));
        }

        let c = self.cursor.advance()?;
        let token = self.make_token(TokenKind::Invalid);
        Ok(self.flag(
            token,
            LexErrorKind::UnexpectedCharacter,
            format!("unexpected character '{}'", c.escape_debug()),
        ))
    }
}
