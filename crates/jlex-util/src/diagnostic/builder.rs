//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, including source code snippets.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::span::{SourceFile, Span};

/// A source code snippet for display in diagnostics
///
/// Contains the source line affected by the diagnostic, with optional
/// highlighting of the specific range.
///
/// # Examples
///
/// ```
/// use jlex_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("int x = 0x;", 1, 9, 11, Some("no hex digits"));
/// let formatted = snippet.format();
/// assert!(formatted.contains("int x = 0x;"));
/// assert!(formatted.contains("^^ no hex digits"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based, in characters of `line`)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive, in characters of `line`)
    pub end_column: usize,
    /// Optional label to display under the highlighted range
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Create a new source snippet
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
        label: Option<impl Into<String>>,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: label.map(Into::into),
        }
    }

    /// Build a snippet for `span` from the line it starts on
    ///
    /// Columns are recomputed from the span's byte offsets as character
    /// counts within the line, so they ignore tab expansion. The highlight is
    /// clipped to the end of that line. Returns `None` when the span's line
    /// does not exist in `file`.
    pub fn from_span(file: &SourceFile, span: Span) -> Option<Self> {
        let line_number = span.line as usize;
        let line = file.line_at(line_number)?;
        let line_start = file.line_start(line_number - 1)?;
        let offset_in_line = span.start.saturating_sub(line_start).min(line.len());
        let before = line.get(..offset_in_line)?;
        let rest = line.get(offset_in_line..)?;
        let highlighted = rest.get(..span.len().min(rest.len())).unwrap_or(rest);

        let start_column = before.chars().count() + 1;
        let width = highlighted.chars().count().max(1);

        Some(Self {
            line: line.to_string(),
            line_number,
            start_column,
            end_column: start_column + width,
            label: None,
        })
    }

    /// Set the label for this snippet
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Format the snippet for display
    ///
    /// Returns the source line followed by a caret line pointing to the
    /// highlighted range. Tabs before the range are repeated in the caret
    /// line so the carets line up whatever the terminal's tab width.
    pub fn format(&self) -> String {
        let line_num_width = self.line_number.to_string().len().max(3);
        let mut result = String::new();

        result.push_str(&format!(
            "{:>width$} | {}\n",
            self.line_number,
            self.line,
            width = line_num_width
        ));

        result.push_str(&format!("{:>width$} | ", "", width = line_num_width));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);

        let mut indented = 0;
        for c in self.line.chars().take(underline_start) {
            indented += 1;
            match c {
                '\t' => result.push('\t'),
                '\u{FEFF}' => {},
                _ => result.push(' '),
            }
        }
        result.push_str(&" ".repeat(underline_start - indented));
        result.push_str(&"^".repeat(underline_len));

        if let Some(ref label) = self.label {
            result.push_str(&format!(" {}", label));
        }

        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use jlex_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
/// use jlex_util::Span;
///
/// let diag = DiagnosticBuilder::error("unterminated string literal")
///     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
///     .span(Span::new(4, 10, 1, 5))
///     .help("add a closing `\"`")
///     .build();
///
/// assert_eq!(diag.level, Level::Error);
/// assert_eq!(diag.helps.len(), 1);
/// ```
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
    snippets: Vec<SourceSnippet>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a warning builder
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a note to the diagnostic
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion to the diagnostic
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Add a pre-built source snippet
    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Quote the line under the current span from `file`, labelled
    ///
    /// Does nothing if the span does not map to a line of `file`, so call
    /// [`DiagnosticBuilder::span`] first.
    pub fn snippet_from(mut self, file: &SourceFile, label: impl Into<String>) -> Self {
        if let Some(snippet) = SourceSnippet::from_span(file, self.span) {
            self.snippets.push(snippet.with_label(label));
        }
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
            snippets: self.snippets,
        }
    }

    /// Build and emit the diagnostic to the given handler
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
