//! Syntax error type shared by the lexer and parser.

use crate::Span;
use serde::Serialize;
use thiserror::Error;

/// A fatal syntax error.
///
/// Lexing and parsing are fail-fast: the first malformed construct aborts
/// the pipeline before the standardizer runs. The error serializes to
/// JSON so front ends can consume diagnostics structurally.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message} at {span}")]
pub struct SyntaxError {
    /// Human-readable description of what went wrong.
    pub message: String,
    /// Source location of the offending token or character.
    pub span: Span,
}

impl SyntaxError {
    /// Create a new syntax error.
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }

    /// Convenience constructor for "expected X but found Y" errors.
    pub fn expected(expected: &str, found: impl std::fmt::Display, span: Span) -> Self {
        Self::new(format!("expected {expected} but found \"{found}\""), span)
    }
}
