//! jlex-util - Core Utilities and Foundation Types
//!
//! Foundation types shared by the scanner and by whatever consumes its
//! token stream:
//!
//! - [`span`] - source locations ([`Span`]) and line indexing ([`SourceFile`])
//! - [`diagnostic`] - error/warning reporting ([`Diagnostic`], [`Handler`])
//! - [`error`] - error types for the operations in this crate
//!
//! # Example
//!
//! ```
//! use jlex_util::{DiagnosticBuilder, Handler, SourceFile, Span};
//!
//! let file = SourceFile::new("Main.java", "int x = 0x;");
//! let handler = Handler::new();
//!
//! DiagnosticBuilder::error("no digits after hex prefix")
//!     .span(Span::new(8, 10, 1, 9))
//!     .snippet_from(&file, "here")
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use error::{SourceMapError, SourceMapResult};
pub use span::{SourceFile, Span};
