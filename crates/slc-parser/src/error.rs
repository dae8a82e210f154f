//! Error and diagnostic system for the SLC parser.
//!
//! This module provides:
//! - Error codes grouped into structural, naming and parameter families
//! - Labeled spans for rich error context
//! - Severity levels
//! - A collector for the multi-diagnostic line lint
//!
//! # Overview
//!
//! Parsing is fail-fast: [`parse`](crate::parse) returns the first
//! [`Diagnostic`] it hits, already resolved to a 1-based line and column.
//!
//! # Example
//!
//! ```
//! # use slc_parser::error::{Diagnostic, ErrorCode};
//! # use slc_parser::Span;
//!
//! let diag = Diagnostic::error("duplicate shape name 'Sq1'")
//!     .with_code(ErrorCode::E205)
//!     .with_label(Span::new(100..120), "duplicate name")
//!     .with_secondary_label(Span::new(50..70), "first declared here")
//!     .with_help("shape names must be unique within a list");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::{ErrorCategory, ErrorCode};
pub use label::Label;
pub use severity::Severity;

/// A type alias for `Result<T, Diagnostic>`.
pub(crate) type Result<T> = std::result::Result<T, Diagnostic>;
