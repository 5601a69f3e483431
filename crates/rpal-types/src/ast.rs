//! AST node types for RPAL.
//!
//! A single [`AstNode`] shape carries both the raw tree produced by the
//! parser and the canonical tree produced by the standardizer; the two
//! differ only in which [`AstKind`]s appear. Children are owned in a
//! `Vec`, so tree rewrites build new subtrees by value instead of
//! re-linking shared siblings.

use std::fmt;

/// Binary operator tags shared by the parser and the evaluation machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Eq,
    Ne,
    Ls,
    Gr,
    Le,
    Ge,
    Or,
    And,
    Aug,
}

impl BinOp {
    /// Returns the operator's surface spelling, for error messages and
    /// tree dumps.
    pub fn as_str(&self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Pow => "**",
            BinOp::Eq => "eq",
            BinOp::Ne => "ne",
            BinOp::Ls => "ls",
            BinOp::Gr => "gr",
            BinOp::Le => "le",
            BinOp::Ge => "ge",
            BinOp::Or => "or",
            BinOp::And => "&",
            BinOp::Aug => "aug",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of an AST node.
///
/// Sugar kinds (`Let` through `InfixApply`) only appear in the raw tree;
/// the standardizer rewrites them away. `Gamma`, `Lambda`, `Tau`, `Y`,
/// `Arrow`, `Comma`, `Not`, `Neg`, operators, and leaves make up the
/// canonical tree.
#[derive(Debug, Clone, PartialEq)]
pub enum AstKind {
    // ── Sugar (raw tree only) ──
    /// `let D in E`
    Let,
    /// `E where Dr`
    Where,
    /// `Da within D`
    Within,
    /// `rec Db`
    Rec,
    /// `f v1 v2 ... = E`
    FcnForm,
    /// `Dr and Dr ...`
    And,
    /// `e1 @ <id> e2`
    InfixApply,

    // ── Core forms ──
    /// Function application.
    Gamma,
    /// `fn V . E` — one parameter child (identifier, comma list, or `()`)
    /// followed by the body once standardized.
    Lambda,
    /// Tuple construction `(e1, ..., en)`.
    Tau,
    /// Conditional `B -> Tc | Tc` with children `[cond, then, else]`.
    Arrow,
    /// Definition `V = E`. Produced by the grammar and by the `within`,
    /// `rec`, `fcn_form`, and `and` rewrites; always consumed by an
    /// enclosing `let`/`where` rewrite.
    Equal,
    /// Parameter list `x, y, z` in a tuple definition or lambda.
    Comma,
    /// Empty parameter list `()`.
    EmptyParams,
    /// The fixed-point combinator, introduced by the `rec` rewrite.
    Y,
    /// Unary logical negation.
    Not,
    /// Unary arithmetic negation.
    Neg,
    /// A binary operator.
    Op(BinOp),

    // ── Leaves ──
    Ident(String),
    Integer(i64),
    /// String literal contents, quotes stripped. Backslash escapes are
    /// kept verbatim; only `Print` unescapes them.
    Str(String),
    True,
    False,
    Nil,
    Dummy,
}

impl fmt::Display for AstKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AstKind::Let => write!(f, "let"),
            AstKind::Where => write!(f, "where"),
            AstKind::Within => write!(f, "within"),
            AstKind::Rec => write!(f, "rec"),
            AstKind::FcnForm => write!(f, "fcn_form"),
            AstKind::And => write!(f, "and"),
            AstKind::InfixApply => write!(f, "@"),
            AstKind::Gamma => write!(f, "gamma"),
            AstKind::Lambda => write!(f, "lambda"),
            AstKind::Tau => write!(f, "tau"),
            AstKind::Arrow => write!(f, "->"),
            AstKind::Equal => write!(f, "="),
            AstKind::Comma => write!(f, ","),
            AstKind::EmptyParams => write!(f, "()"),
            AstKind::Y => write!(f, "Y"),
            AstKind::Not => write!(f, "not"),
            AstKind::Neg => write!(f, "neg"),
            AstKind::Op(op) => write!(f, "{op}"),
            AstKind::Ident(name) => write!(f, "<ID:{name}>"),
            AstKind::Integer(n) => write!(f, "<INT:{n}>"),
            AstKind::Str(s) => write!(f, "<STR:'{s}'>"),
            AstKind::True => write!(f, "<true>"),
            AstKind::False => write!(f, "<false>"),
            AstKind::Nil => write!(f, "<nil>"),
            AstKind::Dummy => write!(f, "<dummy>"),
        }
    }
}

/// A node in the raw or canonical AST.
#[derive(Debug, Clone, PartialEq)]
pub struct AstNode {
    pub kind: AstKind,
    pub children: Vec<AstNode>,
}

impl AstNode {
    /// Create a leaf node.
    pub fn leaf(kind: AstKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    /// Create an interior node with the given children.
    pub fn node(kind: AstKind, children: Vec<AstNode>) -> Self {
        Self { kind, children }
    }

    /// Render the tree in the traditional RPAL dump format: one node per
    /// line, depth shown as a `. ` prefix per level.
    pub fn pretty(&self) -> String {
        let mut out = String::new();
        self.pretty_into(&mut out, 0);
        out
    }

    fn pretty_into(&self, out: &mut String, depth: usize) {
        for _ in 0..depth {
            out.push_str(". ");
        }
        out.push_str(&self.kind.to_string());
        out.push('\n');
        for child in &self.children {
            child.pretty_into(out, depth + 1);
        }
    }
}
