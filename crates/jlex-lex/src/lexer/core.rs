//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the dispatch on the first
//! character of each token, and the bookkeeping shared by the recognizers.

use std::borrow::Cow;
use std::iter::FusedIterator;

use jlex_util::Span;

use crate::chars::is_ident_start;
use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::error::{LexError, LexErrorKind, ScanError, ScanResult};
use crate::keywords::KeywordSet;
use crate::token::{Token, TokenKind, Trivia, TriviaKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Scanning,
    Done,
}

/// Lexer for Java-like source text.
///
/// The lexer is a pull-based token stream: each call to
/// [`next_token`](Lexer::next_token) scans exactly one token. Lexical errors
/// never stop the scan; they are collected in [`errors`](Lexer::errors) and
/// the offending token carries the error kind.
///
/// # Example
///
/// ```
/// use jlex_lex::{Lexer, TokenKind};
///
/// let kinds: Vec<_> = Lexer::new("return x;").map(|t| t.kind).collect();
/// assert_eq!(kinds.len(), 4);
/// assert_eq!(kinds[0], TokenKind::Keyword);
/// assert_eq!(kinds[3], TokenKind::EndOfInput);
/// ```
#[derive(Debug)]
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(super) cursor: Cursor<'a>,

    /// Words classified as keywords.
    pub(super) keywords: Cow<'a, KeywordSet>,

    /// Surface comments as tokens instead of trivia.
    keep_comments: bool,

    /// Starting position of the current token (byte offset).
    pub(super) token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,

    state: State,

    /// Lexical errors in source order.
    errors: Vec<LexError>,

    /// Skipped regions in source order.
    pub(super) trivia: Vec<Trivia>,

    /// Tokens produced so far, excluding end of input.
    token_count: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer with the default Java configuration.
    pub fn new(source: &'a str) -> Self {
        Self::build(source, Cursor::new(source), Cow::Borrowed(KeywordSet::java()), false)
    }

    /// Creates a lexer using `config`.
    ///
    /// # Errors
    ///
    /// [`ScanError::SourceTooLarge`] if the source exceeds
    /// `config.max_source_len`.
    ///
    /// # Example
    ///
    /// ```
    /// use jlex_lex::{Lexer, LexerConfig, ScanError};
    ///
    /// let config = LexerConfig::default().max_source_len(4);
    /// let err = Lexer::with_config("int x;", &config).unwrap_err();
    /// assert_eq!(err, ScanError::SourceTooLarge { len: 6, limit: 4 });
    /// ```
    pub fn with_config(source: &'a str, config: &LexerConfig) -> ScanResult<Self> {
        if let Some(limit) = config.max_source_len {
            if source.len() > limit {
                return Err(ScanError::SourceTooLarge {
                    len: source.len(),
                    limit,
                });
            }
        }

        Ok(Self::build(
            source,
            Cursor::with_tab_width(source, config.tab_width),
            config.keyword_set(),
            config.keep_comments,
        ))
    }

    fn build(
        source: &'a str,
        cursor: Cursor<'a>,
        keywords: Cow<'a, KeywordSet>,
        keep_comments: bool,
    ) -> Self {
        tracing::debug!(
            len = source.len(),
            keywords = keywords.len(),
            tab_width = cursor.tab_width(),
            keep_comments,
            "created lexer"
        );
        Self {
            cursor,
            keywords,
            keep_comments,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            state: State::Scanning,
            errors: Vec::new(),
            trivia: Vec::new(),
            token_count: 0,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// Skips whitespace (and comments unless they are kept), then dispatches
    /// on the current character. At the end of input a single
    /// [`TokenKind::EndOfInput`] token is returned.
    ///
    /// # Errors
    ///
    /// [`ScanError::StreamExhausted`] once the end-of-input token has been
    /// returned.
    pub fn next_token(&mut self) -> ScanResult<Token<'a>> {
        if self.state == State::Done {
            return Err(ScanError::StreamExhausted);
        }

        loop {
            self.skip_whitespace();
            self.start_token();

            let Some(c) = self.cursor.first() else {
                return Ok(self.end_of_input());
            };

            let token = match c {
                '/' if matches!(self.cursor.peek(1), Some('/' | '*')) => self.lex_comment()?,
                '"' => self.lex_string()?,
                c if c.is_ascii_digit() => self.lex_number()?,
                '.' if self.cursor.peek(1).is_some_and(|n| n.is_ascii_digit()) => {
                    self.lex_number()?
                },
                c if is_ident_start(c) => self.lex_identifier(),
                _ => self.lex_operator()?,
            };

            if token.kind == TokenKind::Comment && !self.keep_comments {
                self.trivia.push(Trivia {
                    kind: TriviaKind::Comment,
                    span: token.span,
                });
                continue;
            }

            self.token_count += 1;
            return Ok(token);
        }
    }

    fn start_token(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    fn end_of_input(&mut self) -> Token<'a> {
        self.state = State::Done;
        tracing::debug!(
            tokens = self.token_count,
            errors = self.errors.len(),
            trivia = self.trivia.len(),
            "scan complete"
        );
        Token::new(
            TokenKind::EndOfInput,
            "",
            Span::point(self.cursor.position(), self.cursor.line(), self.cursor.column()),
        )
    }

    /// Span from the start of the current token to the cursor.
    pub(super) fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Token of `kind` covering everything consumed since the token start.
    pub(super) fn make_token(&self, kind: TokenKind) -> Token<'a> {
        Token::new(kind, self.cursor.slice_from(self.token_start), self.token_span())
    }

    /// Records a lexical error.
    pub(super) fn report(&mut self, kind: LexErrorKind, span: Span, message: impl Into<String>) {
        let error = LexError::new(kind, span, message);
        tracing::trace!(code = %error.code(), %span, "{}", error.message);
        self.errors.push(error);
    }

    /// Records an error covering `token` and marks the token with it.
    pub(super) fn flag(
        &mut self,
        mut token: Token<'a>,
        kind: LexErrorKind,
        message: impl Into<String>,
    ) -> Token<'a> {
        self.report(kind, token.span, message);
        token.error = Some(kind);
        token
    }

    /// Lexical errors reported so far, in source order.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Whitespace and filtered comments skipped so far, in source order.
    pub fn trivia(&self) -> &[Trivia] {
        &self.trivia
    }

    /// Keyword set in use.
    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    /// Returns true once the end-of-input token has been produced.
    pub fn is_done(&self) -> bool {
        self.state == State::Done
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Consumes the lexer, returning the collected errors and trivia.
    pub fn finish(self) -> (Vec<LexError>, Vec<Trivia>) {
        (self.errors, self.trivia)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    /// Yields every token including the final end-of-input token, then `None`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.is_done() {
            return None;
        }
        match self.next_token() {
            Ok(token) => Some(token),
            Err(err) => {
                tracing::error!(%err, position = self.cursor.position(), "scan aborted");
                self.state = State::Done;
                None
            },
        }
    }
}

impl FusedIterator for Lexer<'_> {}
