//! Control and stack node representation.
//!
//! A single enum serves both stacks of the CSE machine. The generator
//! emits the instruction-like variants (`Gamma`, `Binop`, `Tau`, `Beta`,
//! `Lambda`, constants); the machine itself adds the runtime-only ones
//! (`Tuple`, `Eta`, `ConcPartial`, `EnvMarker`).

use std::fmt;

use rpal_types::BinOp;

/// A lambda closure: parameter names, the index of the control structure
/// holding the body, and the environment captured at push time.
///
/// `env` is `None` on the generator's output and is filled in when the
/// closure crosses from control to the operand stack.
#[derive(Debug, Clone, PartialEq)]
pub struct Closure {
    pub params: Vec<String>,
    pub body: usize,
    pub env: Option<usize>,
}

/// One element of the control or operand stack.
#[derive(Debug, Clone, PartialEq)]
pub enum CsNode {
    Integer(i64),
    Str(String),
    Truth(bool),
    Dummy,
    /// The empty tuple, a distinct constant.
    Nil,
    Tuple(Vec<CsNode>),
    Identifier(String),
    Binop(BinOp),
    Not,
    Neg,
    Gamma,
    /// Fixed point combinator awaiting a closure.
    YStar,
    Lambda(Closure),
    /// Recursive closure produced by applying `Y*`.
    Eta(Closure),
    /// `Conc` applied to its first string, waiting for the second.
    ConcPartial(String),
    /// Tuple formation over the top `arity` stack values.
    Tau { arity: usize },
    /// Conditional branch between two control structures.
    Beta { then_delta: usize, else_delta: usize },
    /// Environment boundary. `restore` is the environment that was
    /// current when the marker was pushed, reinstated on exit.
    EnvMarker { id: usize, restore: usize },
}

impl CsNode {
    /// Short type name used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            CsNode::Integer(_) => "integer",
            CsNode::Str(_) => "string",
            CsNode::Truth(_) => "truthvalue",
            CsNode::Dummy => "dummy",
            CsNode::Nil => "nil",
            CsNode::Tuple(_) => "tuple",
            CsNode::Identifier(_) => "identifier",
            CsNode::Binop(_) => "operator",
            CsNode::Not => "not",
            CsNode::Neg => "neg",
            CsNode::Gamma => "gamma",
            CsNode::YStar => "Y*",
            CsNode::Lambda(_) => "lambda closure",
            CsNode::Eta(_) => "eta closure",
            CsNode::ConcPartial(_) => "partial Conc",
            CsNode::Tau { .. } => "tau",
            CsNode::Beta { .. } => "beta",
            CsNode::EnvMarker { .. } => "environment marker",
        }
    }
}

/// Renders a value the way `Print` shows it. String escape sequences for
/// newline and tab are expanded here and nowhere else; everywhere else in
/// the machine strings keep their source spelling.
impl fmt::Display for CsNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsNode::Integer(n) => write!(f, "{n}"),
            CsNode::Str(s) => f.write_str(&unescape(s)),
            CsNode::Truth(b) => write!(f, "{b}"),
            CsNode::Dummy => f.write_str("dummy"),
            CsNode::Nil => f.write_str("nil"),
            CsNode::Tuple(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(")")
            }
            CsNode::Lambda(c) | CsNode::Eta(c) => {
                write!(f, "[lambda closure: {}: {}]", c.params.join(", "), c.body)
            }
            other => f.write_str(other.kind_name()),
        }
    }
}

fn unescape(s: &str) -> String {
    s.replace("\\n", "\n").replace("\\t", "\t")
}
