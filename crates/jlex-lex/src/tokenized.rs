//! Whole-buffer tokenization.

use jlex_util::{Handler, SourceFile};

use crate::config::LexerConfig;
use crate::error::{LexError, ScanResult};
use crate::token::{Token, TokenKind, Trivia};
use crate::Lexer;

/// Everything produced by scanning one source buffer.
#[derive(Clone, Debug)]
pub struct Tokenized<'a> {
    /// The scanned text.
    pub source: &'a str,
    /// Tokens in source order, ending with [`TokenKind::EndOfInput`].
    pub tokens: Vec<Token<'a>>,
    /// Whitespace and filtered comments in source order.
    pub trivia: Vec<Trivia>,
    /// Lexical errors in source order.
    pub errors: Vec<LexError>,
}

/// Scans `source` to the end.
///
/// # Errors
///
/// [`ScanError::SourceTooLarge`](crate::ScanError::SourceTooLarge) if the
/// source exceeds the configured limit. Lexical errors are not `Err`; they
/// are collected in [`Tokenized::errors`].
///
/// # Example
///
/// ```
/// use jlex_lex::{tokenize, LexerConfig, TokenKind};
///
/// let out = tokenize("int x = 0xFF;", &LexerConfig::default()).unwrap();
/// assert_eq!(out.tokens.len(), 6);
/// assert_eq!(out.tokens[3].integer().unwrap().value, Some(255));
/// assert_eq!(out.reconstruct(), "int x = 0xFF;");
/// assert!(!out.has_errors());
/// ```
pub fn tokenize<'a>(source: &'a str, config: &LexerConfig) -> ScanResult<Tokenized<'a>> {
    let mut lexer = Lexer::with_config(source, config)?;
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token.is_eof();
        tokens.push(token);
        if done {
            break;
        }
    }

    let (errors, trivia) = lexer.finish();
    Ok(Tokenized {
        source,
        tokens,
        trivia,
        errors,
    })
}

impl<'a> Tokenized<'a> {
    /// Returns true if any lexical error was found.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Token kinds in order.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }

    /// Tokens excluding the end-of-input marker.
    pub fn significant(&self) -> &[Token<'a>] {
        match self.tokens.split_last() {
            Some((last, rest)) if last.is_eof() => rest,
            _ => &self.tokens,
        }
    }

    /// Rebuilds the source text from token and trivia spans.
    ///
    /// Every byte of the input belongs to exactly one token or trivia span,
    /// so the result equals [`source`](Tokenized::source).
    pub fn reconstruct(&self) -> String {
        let mut ranges: Vec<_> = self
            .tokens
            .iter()
            .map(|t| t.span.range())
            .chain(self.trivia.iter().map(|t| t.span.range()))
            .filter(|r| !r.is_empty())
            .collect();
        ranges.sort_unstable_by_key(|r| r.start);

        let mut out = String::with_capacity(self.source.len());
        for range in ranges {
            out.push_str(&self.source[range]);
        }
        out
    }

    /// Emits one diagnostic per lexical error to `handler`.
    pub fn report(&self, handler: &Handler, file: &SourceFile) {
        for error in &self.errors {
            handler.emit_diagnostic(error.to_diagnostic(file));
        }
    }
}
