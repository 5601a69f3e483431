//! Token types for the RPAL lexer.

use rpal_types::Span;
use std::fmt;

/// The reserved words of RPAL. An identifier matching one of these is
/// re-tagged as the corresponding keyword token after scanning.
pub const KEYWORDS: &[&str] = &[
    "let", "in", "fn", "where", "aug", "or", "not", "gr", "ge", "ls", "le", "eq", "ne", "true",
    "false", "nil", "dummy", "within", "and", "rec",
];

/// A single token with its source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Every lexeme in the RPAL surface syntax.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// `[A-Za-z][A-Za-z0-9_]*`, not a reserved word.
    Identifier(String),
    /// `[0-9]+`
    Integer(i64),
    /// Single-quoted string literal, quotes stripped. Backslash escape
    /// sequences are kept verbatim.
    Str(String),

    // ── Keywords ──
    Let,
    In,
    Fn,
    Where,
    Aug,
    Or,
    Not,
    Gr,
    Ge,
    Ls,
    Le,
    Eq,
    Ne,
    True,
    False,
    Nil,
    Dummy,
    Within,
    And,
    Rec,

    // ── Operators ──
    Plus,
    Minus,
    Star,
    Slash,
    Power,
    Less,
    LessEq,
    Greater,
    GreaterEq,
    Equals,
    Arrow,
    Bar,
    Amp,
    At,
    Dot,

    // ── Punctuation ──
    LParen,
    RParen,
    Comma,
    Semicolon,

    /// End of input; the token stream always ends with this.
    Eof,
}

impl TokenKind {
    /// Translate a scanned identifier into a keyword kind, if reserved.
    pub fn keyword(word: &str) -> Option<TokenKind> {
        let kind = match word {
            "let" => TokenKind::Let,
            "in" => TokenKind::In,
            "fn" => TokenKind::Fn,
            "where" => TokenKind::Where,
            "aug" => TokenKind::Aug,
            "or" => TokenKind::Or,
            "not" => TokenKind::Not,
            "gr" => TokenKind::Gr,
            "ge" => TokenKind::Ge,
            "ls" => TokenKind::Ls,
            "le" => TokenKind::Le,
            "eq" => TokenKind::Eq,
            "ne" => TokenKind::Ne,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "nil" => TokenKind::Nil,
            "dummy" => TokenKind::Dummy,
            "within" => TokenKind::Within,
            "and" => TokenKind::And,
            "rec" => TokenKind::Rec,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Identifier(name) => write!(f, "{name}"),
            TokenKind::Integer(n) => write!(f, "{n}"),
            TokenKind::Str(s) => write!(f, "'{s}'"),
            TokenKind::Let => write!(f, "let"),
            TokenKind::In => write!(f, "in"),
            TokenKind::Fn => write!(f, "fn"),
            TokenKind::Where => write!(f, "where"),
            TokenKind::Aug => write!(f, "aug"),
            TokenKind::Or => write!(f, "or"),
            TokenKind::Not => write!(f, "not"),
            TokenKind::Gr => write!(f, "gr"),
            TokenKind::Ge => write!(f, "ge"),
            TokenKind::Ls => write!(f, "ls"),
            TokenKind::Le => write!(f, "le"),
            TokenKind::Eq => write!(f, "eq"),
            TokenKind::Ne => write!(f, "ne"),
            TokenKind::True => write!(f, "true"),
            TokenKind::False => write!(f, "false"),
            TokenKind::Nil => write!(f, "nil"),
            TokenKind::Dummy => write!(f, "dummy"),
            TokenKind::Within => write!(f, "within"),
            TokenKind::And => write!(f, "and"),
            TokenKind::Rec => write!(f, "rec"),
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Minus => write!(f, "-"),
            TokenKind::Star => write!(f, "*"),
            TokenKind::Slash => write!(f, "/"),
            TokenKind::Power => write!(f, "**"),
            TokenKind::Less => write!(f, "<"),
            TokenKind::LessEq => write!(f, "<="),
            TokenKind::Greater => write!(f, ">"),
            TokenKind::GreaterEq => write!(f, ">="),
            TokenKind::Equals => write!(f, "="),
            TokenKind::Arrow => write!(f, "->"),
            TokenKind::Bar => write!(f, "|"),
            TokenKind::Amp => write!(f, "&"),
            TokenKind::At => write!(f, "@"),
            TokenKind::Dot => write!(f, "."),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
            TokenKind::Comma => write!(f, ","),
            TokenKind::Semicolon => write!(f, ";"),
            TokenKind::Eof => write!(f, "EOF"),
        }
    }
}
