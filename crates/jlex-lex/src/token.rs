//! Token definitions.
//!
//! A [`Token`] borrows its lexeme from the source buffer, so a token stream
//! never outlives the text it was scanned from.

use std::fmt;

use jlex_util::Span;

use crate::error::LexErrorKind;

/// Category of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Name that is not in the active keyword set.
    Identifier,
    /// Reserved word of the active language profile.
    Keyword,
    /// Decimal or hexadecimal integer literal.
    IntegerLiteral,
    /// Literal with a fraction, an exponent or a float suffix.
    FloatLiteral,
    /// Double-quoted string literal.
    StringLiteral,
    /// Operator such as `+` or `<=`.
    Operator(Operator),
    /// Grouping and separator symbols.
    Punctuation(Punctuation),
    /// Line or block comment; only surfaced when comments are kept.
    Comment,
    /// Zero-width marker produced once at the end of input.
    EndOfInput,
    /// Input that could not be scanned as any valid token.
    Invalid,
}

impl TokenKind {
    /// Returns true for any operator.
    pub fn is_operator(&self) -> bool {
        matches!(self, TokenKind::Operator(_))
    }

    /// Returns true for any punctuation symbol.
    pub fn is_punctuation(&self) -> bool {
        matches!(self, TokenKind::Punctuation(_))
    }

    /// Returns true for integer, float and string literals.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::IntegerLiteral | TokenKind::FloatLiteral | TokenKind::StringLiteral
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::Keyword => write!(f, "keyword"),
            TokenKind::IntegerLiteral => write!(f, "integer literal"),
            TokenKind::FloatLiteral => write!(f, "float literal"),
            TokenKind::StringLiteral => write!(f, "string literal"),
            TokenKind::Operator(op) => write!(f, "operator `{}`", op),
            TokenKind::Punctuation(p) => write!(f, "`{}`", p),
            TokenKind::Comment => write!(f, "comment"),
            TokenKind::EndOfInput => write!(f, "end of input"),
            TokenKind::Invalid => write!(f, "invalid token"),
        }
    }
}

/// Operators, named after their glyphs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `=`
    Eq,
    /// `==`
    EqEq,
    /// `!=`
    NotEq,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    LtEq,
    /// `>=`
    GtEq,
    /// `&&`
    AndAnd,
    /// `||`
    OrOr,
    /// `!`
    Bang,
    /// `&`
    Amp,
    /// `|`
    Pipe,
    /// `^`
    Caret,
    /// `~`
    Tilde,
    /// `?`
    Question,
    /// `:`
    Colon,
    /// `::`
    ColonColon,
    /// `->`
    Arrow,
    /// `++`
    PlusPlus,
    /// `--`
    MinusMinus,
    /// `+=`
    PlusEq,
    /// `-=`
    MinusEq,
    /// `*=`
    StarEq,
    /// `/=`
    SlashEq,
    /// `%=`
    PercentEq,
    /// `&=`
    AmpEq,
    /// `|=`
    PipeEq,
    /// `^=`
    CaretEq,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
    /// `>>>`
    UShr,
    /// `<<=`
    ShlEq,
    /// `>>=`
    ShrEq,
    /// `>>>=`
    UShrEq,
}

impl Operator {
    /// Source text of the operator.
    pub const fn as_str(self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Star => "*",
            Operator::Slash => "/",
            Operator::Percent => "%",
            Operator::Eq => "=",
            Operator::EqEq => "==",
            Operator::NotEq => "!=",
            Operator::Lt => "<",
            Operator::Gt => ">",
            Operator::LtEq => "<=",
            Operator::GtEq => ">=",
            Operator::AndAnd => "&&",
            Operator::OrOr => "||",
            Operator::Bang => "!",
            Operator::Amp => "&",
            Operator::Pipe => "|",
            Operator::Caret => "^",
            Operator::Tilde => "~",
            Operator::Question => "?",
            Operator::Colon => ":",
            Operator::ColonColon => "::",
            Operator::Arrow => "->",
            Operator::PlusPlus => "++",
            Operator::MinusMinus => "--",
            Operator::PlusEq => "+=",
            Operator::MinusEq => "-=",
            Operator::StarEq => "*=",
            Operator::SlashEq => "/=",
            Operator::PercentEq => "%=",
            Operator::AmpEq => "&=",
            Operator::PipeEq => "|=",
            Operator::CaretEq => "^=",
            Operator::Shl => "<<",
            Operator::Shr => ">>",
            Operator::UShr => ">>>",
            Operator::ShlEq => "<<=",
            Operator::ShrEq => ">>=",
            Operator::UShrEq => ">>>=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grouping and separator symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Punctuation {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `...`
    Ellipsis,
    /// `@`
    At,
}

impl Punctuation {
    /// Source text of the symbol.
    pub const fn as_str(self) -> &'static str {
        match self {
            Punctuation::LParen => "(",
            Punctuation::RParen => ")",
            Punctuation::LBrace => "{",
            Punctuation::RBrace => "}",
            Punctuation::LBracket => "[",
            Punctuation::RBracket => "]",
            Punctuation::Semicolon => ";",
            Punctuation::Comma => ",",
            Punctuation::Dot => ".",
            Punctuation::Ellipsis => "...",
            Punctuation::At => "@",
        }
    }
}

impl fmt::Display for Punctuation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric base of an integer literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Radix {
    /// Base 10, including literals with leading zeros.
    Decimal,
    /// Base 16, written with a `0x`/`0X` prefix.
    Hexadecimal,
}

impl Radix {
    /// The base as a number.
    pub const fn base(self) -> u32 {
        match self {
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }
}

/// Type suffix on a floating-point literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FloatSuffix {
    /// `f` or `F`
    Float,
    /// `d` or `D`
    Double,
}

/// Value of an integer literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntegerValue {
    /// Parsed value, or `None` when it does not fit in 64 bits.
    pub value: Option<u64>,
    /// Base the literal was written in.
    pub radix: Radix,
}

impl IntegerValue {
    /// Returns true if the literal exceeded 64 bits.
    pub fn overflowed(&self) -> bool {
        self.value.is_none()
    }

    /// Returns true if the value fits in a 32-bit signed integer.
    ///
    /// # Example
    ///
    /// ```
    /// use jlex_lex::token::{IntegerValue, Radix};
    ///
    /// let v = IntegerValue { value: Some(0xDEADBEEF), radix: Radix::Hexadecimal };
    /// assert!(!v.fits_i32());
    /// ```
    pub fn fits_i32(&self) -> bool {
        self.value.is_some_and(|v| v <= i32::MAX as u64)
    }
}

/// Value of a floating-point literal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatValue {
    /// Parsed value; infinite when the literal is out of `f64` range.
    pub value: f64,
    /// Whether the literal was written with an exponent.
    pub has_exponent: bool,
    /// Optional `f`/`d` suffix.
    pub suffix: Option<FloatSuffix>,
}

/// Normalized value carried by literal tokens.
#[derive(Clone, Debug, PartialEq)]
pub enum LiteralValue {
    /// Integer literal value.
    Integer(IntegerValue),
    /// Floating-point literal value.
    Float(FloatValue),
    /// Unescaped string contents.
    Str(String),
}

/// A single token.
///
/// # Example
///
/// ```
/// use jlex_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("count");
/// let token = lexer.next_token().unwrap();
/// assert_eq!(token.kind, TokenKind::Identifier);
/// assert_eq!(token.lexeme, "count");
/// assert_eq!(token.span.column, 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Token<'a> {
    /// Category of the token.
    pub kind: TokenKind,
    /// Exact source text of the token.
    pub lexeme: &'a str,
    /// Literal value, for literal tokens.
    pub value: Option<LiteralValue>,
    /// Source location.
    pub span: Span,
    /// Set when the token is the site of a lexical error.
    pub error: Option<LexErrorKind>,
}

impl<'a> Token<'a> {
    /// Creates an error-free token.
    pub fn new(kind: TokenKind, lexeme: &'a str, span: Span) -> Self {
        Self {
            kind,
            lexeme,
            value: None,
            span,
            error: None,
        }
    }

    /// Attaches a literal value.
    pub fn with_value(mut self, value: LiteralValue) -> Self {
        self.value = Some(value);
        self
    }

    /// Returns true for the end-of-input marker.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// Returns true if a lexical error was reported for this token.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Integer value, for integer literals.
    pub fn integer(&self) -> Option<IntegerValue> {
        match self.value {
            Some(LiteralValue::Integer(v)) => Some(v),
            _ => None,
        }
    }

    /// Float value, for float literals.
    pub fn float(&self) -> Option<FloatValue> {
        match self.value {
            Some(LiteralValue::Float(v)) => Some(v),
            _ => None,
        }
    }

    /// Unescaped contents, for string literals.
    pub fn string(&self) -> Option<&str> {
        match &self.value {
            Some(LiteralValue::Str(s)) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} at {}", self.kind, self.lexeme, self.span)
    }
}

/// What a trivia region consists of.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriviaKind {
    /// A run of whitespace (including a leading byte order mark).
    Whitespace,
    /// A comment that was filtered out of the token stream.
    Comment,
}

/// Source region skipped between tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Trivia {
    /// What was skipped.
    pub kind: TriviaKind,
    /// Where it was.
    pub span: Span,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_predicates() {
        assert!(TokenKind::Operator(Operator::LtEq).is_operator());
        assert!(TokenKind::Punctuation(Punctuation::Semicolon).is_punctuation());
        assert!(TokenKind::FloatLiteral.is_literal());
        assert!(!TokenKind::Keyword.is_literal());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TokenKind::Operator(Operator::UShrEq).to_string(), "operator `>>>=`");
        assert_eq!(TokenKind::Punctuation(Punctuation::Ellipsis).to_string(), "`...`");
        assert_eq!(TokenKind::EndOfInput.to_string(), "end of input");
    }

    #[test]
    fn test_integer_value_ranges() {
        let max = IntegerValue {
            value: Some(i32::MAX as u64),
            radix: Radix::Decimal,
        };
        assert!(max.fits_i32());
        let overflow = IntegerValue {
            value: None,
            radix: Radix::Decimal,
        };
        assert!(overflow.overflowed());
        assert!(!overflow.fits_i32());
        assert_eq!(Radix::Hexadecimal.base(), 16);
    }

    #[test]
    fn test_value_accessors() {
        let token = Token::new(TokenKind::StringLiteral, "\"a\"", Span::new(0, 3, 1, 1))
            .with_value(LiteralValue::Str("a".to_string()));
        assert_eq!(token.string(), Some("a"));
        assert_eq!(token.integer(), None);
        assert_eq!(token.float(), None);
        assert!(!token.is_error());
    }

    #[test]
    fn test_token_display() {
        let token = Token::new(TokenKind::Keyword, "int", Span::new(0, 3, 2, 5));
        assert_eq!(token.to_string(), "keyword \"int\" at 2:5");
    }
}
