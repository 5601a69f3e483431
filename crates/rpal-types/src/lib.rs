//! Shared types for the RPAL interpreter.
//!
//! This crate defines the AST node types, source spans, and syntax error
//! types used across the pipeline stages.

mod error;
mod span;
pub mod ast;

pub use ast::{AstKind, AstNode, BinOp};
pub use error::SyntaxError;
pub use span::Span;

/// Result type used by the lexer and parser.
pub type Result<T> = std::result::Result<T, SyntaxError>;
