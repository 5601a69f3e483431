//! RPAL parser: recursive descent over the RPAL grammar, producing the
//! raw (non-canonical) AST consumed by the standardizer.

mod decl;
mod expr;
mod parser;

pub use parser::Parser;

use rpal_lexer::Lexer;
use rpal_types::{AstNode, Result};

/// Lex and parse a complete RPAL program.
pub fn parse(source: &str) -> Result<AstNode> {
    let tokens = Lexer::new(source).lex()?;
    Parser::new(tokens).parse()
}
