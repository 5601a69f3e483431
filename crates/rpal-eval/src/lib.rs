//! Control structure generation and the CSE machine.
//!
//! Takes a canonical AST (see `rpal-standardizer`), flattens it into
//! control structures, and runs them on a control/stack/environment
//! machine. [`evaluate`] is the one-call entry point; [`generate`] and
//! [`Machine`] are exposed separately so callers can inspect the control
//! structures between the two stages.

pub mod builtins;
mod csgen;
mod env;
mod error;
mod machine;
mod node;
mod ops;

pub use csgen::generate;
pub use error::{EvalError, Result};
pub use machine::{Evaluation, Machine};
pub use node::{Closure, CsNode};

use rpal_types::AstNode;

/// Evaluate a canonical AST, returning the final value and the text
/// printed while it ran.
pub fn evaluate(root: &AstNode) -> Result<Evaluation> {
    Machine::new(generate(root)).run()
}
