//! RPAL interpreter: orchestrates the full pipeline.
//!
//! ```text
//! RPAL Source → Lexer → Parser → Standardizer → Control Structures → CSE Machine
//! ```
//!
//! [`interpret`] runs a program from source text to its final value plus
//! printed output. The intermediate stages are exposed for tooling that
//! wants to stop early (the `myrpal` binary uses them for its `-ast` and
//! `-st` dumps).

use rpal_types::AstNode;
use thiserror::Error;

pub use rpal_eval::{CsNode, Evaluation};

/// Any failure the pipeline can produce.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterpretError {
    #[error("syntax error: {0}")]
    Syntax(#[from] rpal_types::SyntaxError),
    #[error("evaluation failed: {0}")]
    Eval(#[from] rpal_eval::EvalError),
}

/// Parse source text into the raw (sugared) AST.
pub fn parse(source: &str) -> Result<AstNode, InterpretError> {
    Ok(rpal_parser::parse(source)?)
}

/// Parse and standardize source text into the canonical AST.
pub fn standardize(source: &str) -> Result<AstNode, InterpretError> {
    Ok(rpal_standardizer::standardize(rpal_parser::parse(source)?))
}

/// Run a program from source text to completion.
pub fn interpret(source: &str) -> Result<Evaluation, InterpretError> {
    let canonical = rpal_standardizer::standardize(rpal_parser::parse(source)?);
    Ok(rpal_eval::evaluate(&canonical)?)
}
