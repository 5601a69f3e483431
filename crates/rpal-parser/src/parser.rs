//! Core parser infrastructure: token cursor and helpers.

use rpal_lexer::token::{Token, TokenKind};
use rpal_types::{AstNode, Result, Span, SyntaxError};

/// The RPAL parser.
///
/// Consumes a token stream produced by the lexer and builds the raw AST.
/// Parsing is fail-fast: the first syntax error aborts.
pub struct Parser {
    /// The token stream, always terminated by [`TokenKind::Eof`].
    tokens: Vec<Token>,
    /// Current index into `tokens`.
    pos: usize,
}

impl Parser {
    /// Create a new parser from a token stream. A missing terminating
    /// [`TokenKind::Eof`] is appended so the cursor always has a token
    /// to rest on.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !matches!(tokens.last(), Some(token) if token.kind == TokenKind::Eof) {
            let span = tokens.last().map_or_else(|| Span::new(1, 1), |t| t.span);
            tokens.push(Token::new(TokenKind::Eof, span));
        }
        Self { tokens, pos: 0 }
    }

    /// Parse a complete program: a single expression followed by EOF.
    pub fn parse(mut self) -> Result<AstNode> {
        let root = self.expression()?;
        self.expect(&TokenKind::Eof)?;
        Ok(root)
    }

    // ── Token Cursor ──────────────────────────────────────────────────────

    /// Returns the current token without advancing. The cursor parks on
    /// the final Eof token once the stream is exhausted.
    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// Returns the kind of the current token.
    pub(crate) fn peek_kind(&self) -> &TokenKind {
        &self.peek().kind
    }

    /// Look ahead by `n` tokens from the current position.
    pub(crate) fn look_ahead(&self, n: usize) -> &TokenKind {
        let idx = (self.pos + n).min(self.tokens.len().saturating_sub(1));
        &self.tokens[idx].kind
    }

    /// Advance the cursor by one and return the consumed token.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Returns the span of the current token.
    pub(crate) fn current_span(&self) -> Span {
        self.peek().span
    }

    /// Check whether the current token matches the given kind exactly.
    pub(crate) fn at(&self, kind: &TokenKind) -> bool {
        self.peek_kind() == kind
    }

    /// If the current token matches, advance and return `true`.
    pub(crate) fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.at(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of the given kind or fail.
    pub(crate) fn expect(&mut self, kind: &TokenKind) -> Result<Token> {
        if self.at(kind) {
            Ok(self.advance())
        } else {
            Err(SyntaxError::expected(
                &kind.to_string(),
                self.peek_kind(),
                self.current_span(),
            ))
        }
    }

    /// Consume an identifier token, returning its name.
    pub(crate) fn expect_identifier(&mut self) -> Result<String> {
        match self.peek_kind() {
            TokenKind::Identifier(_) => {
                let token = self.advance();
                match token.kind {
                    TokenKind::Identifier(name) => Ok(name),
                    _ => unreachable!("matched above"),
                }
            }
            found => Err(SyntaxError::expected(
                "an identifier",
                found,
                self.current_span(),
            )),
        }
    }

    /// Returns `true` if the current token can start an operand
    /// (an `Rn` production: literal, identifier, or parenthesized
    /// expression).
    pub(crate) fn at_operand(&self) -> bool {
        matches!(
            self.peek_kind(),
            TokenKind::Identifier(_)
                | TokenKind::Integer(_)
                | TokenKind::Str(_)
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Nil
                | TokenKind::Dummy
                | TokenKind::LParen
        )
    }

    /// Build an error at the current token.
    pub(crate) fn unexpected(&self, while_parsing: &str) -> SyntaxError {
        SyntaxError::new(
            format!(
                "unexpected token \"{}\" in {while_parsing}",
                self.peek_kind()
            ),
            self.current_span(),
        )
    }
}
