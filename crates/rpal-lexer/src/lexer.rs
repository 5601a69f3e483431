//! Core RPAL lexer — converts source text to a token stream.
//!
//! Features:
//! - Identifiers, integers, single-quoted strings, operators, punctuation
//! - Reserved words re-tagged after scanning (see [`crate::KEYWORDS`])
//! - Single-line comments stripped (`//`)
//! - Fail-fast: the first lexical error aborts with a [`SyntaxError`]

use rpal_types::{Result, Span, SyntaxError};

use crate::token::{Token, TokenKind};

/// The RPAL lexer.
///
/// Converts source text into a vector of [`Token`]s terminated by
/// [`TokenKind::Eof`].
pub struct Lexer<'src> {
    /// The full source text as bytes.
    source: &'src [u8],
    /// Current byte offset into `source`.
    pos: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    col: u32,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source text.
    pub fn new(source: &'src str) -> Self {
        Self {
            source: source.as_bytes(),
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    /// Lex the entire source into a token stream.
    pub fn lex(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.scan()?;
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    // ─────────────────────────────────────────────────────────────
    // Character-level helpers
    // ─────────────────────────────────────────────────────────────

    fn peek(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.source.get(self.pos + offset).copied()
    }

    fn advance(&mut self) -> Option<u8> {
        let ch = self.source.get(self.pos).copied()?;
        self.pos += 1;
        if ch == b'\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn current_span(&self) -> Span {
        Span::new(self.line, self.col)
    }

    // ─────────────────────────────────────────────────────────────
    // Scanning
    // ─────────────────────────────────────────────────────────────

    fn scan(&mut self) -> Result<Token> {
        self.skip_trivia();

        let span = self.current_span();
        let Some(ch) = self.peek() else {
            return Ok(Token::new(TokenKind::Eof, span));
        };

        match ch {
            b'A'..=b'Z' | b'a'..=b'z' => Ok(self.scan_word(span)),
            b'0'..=b'9' => self.scan_integer(span),
            b'\'' => self.scan_string(span),
            b'(' => self.single(TokenKind::LParen, span),
            b')' => self.single(TokenKind::RParen, span),
            b',' => self.single(TokenKind::Comma, span),
            b';' => self.single(TokenKind::Semicolon, span),
            _ => self.scan_operator(span),
        }
    }

    /// Skip whitespace and `//` comments.
    fn skip_trivia(&mut self) {
        loop {
            match self.peek() {
                Some(b' ' | b'\t' | b'\r' | b'\n') => {
                    self.advance();
                }
                Some(b'/') if self.peek_at(1) == Some(b'/') => {
                    while let Some(ch) = self.peek() {
                        if ch == b'\n' {
                            break;
                        }
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }

    /// Scan an identifier and re-tag it as a keyword if reserved.
    fn scan_word(&mut self, span: Span) -> Token {
        let mut word = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == b'_' {
                word.push(ch as char);
                self.advance();
            } else {
                break;
            }
        }
        let kind = TokenKind::keyword(&word).unwrap_or(TokenKind::Identifier(word));
        Token::new(kind, span)
    }

    fn scan_integer(&mut self, span: Span) -> Result<Token> {
        let mut digits = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                digits.push(ch as char);
                self.advance();
            } else {
                break;
            }
        }
        let value: i64 = digits
            .parse()
            .map_err(|_| SyntaxError::new(format!("integer literal {digits} is too large"), span))?;
        Ok(Token::new(TokenKind::Integer(value), span))
    }

    /// Scan a `'...'` string literal. The surrounding quotes are
    /// stripped; backslash escapes are kept verbatim (a `\` always
    /// carries the following character into the literal, so `\'` does
    /// not terminate the string).
    fn scan_string(&mut self, span: Span) -> Result<Token> {
        self.advance(); // opening quote
        let start = self.pos;
        loop {
            match self.advance() {
                Some(b'\'') => break,
                Some(b'\\') => {
                    if self.advance().is_none() {
                        return Err(SyntaxError::new("unterminated string literal", span));
                    }
                }
                Some(_) => {}
                None => return Err(SyntaxError::new("unterminated string literal", span)),
            }
        }
        // The contents are the raw source between the quotes. Both
        // delimiters are ASCII, so the slice stays on char boundaries
        // and multi-byte characters pass through intact.
        let contents = String::from_utf8_lossy(&self.source[start..self.pos - 1]).into_owned();
        Ok(Token::new(TokenKind::Str(contents), span))
    }

    fn scan_operator(&mut self, span: Span) -> Result<Token> {
        let first = self.advance().unwrap_or(b' ');
        let second = self.peek();

        // Two-character operators first.
        let two = match (first, second) {
            (b'*', Some(b'*')) => Some(TokenKind::Power),
            (b'-', Some(b'>')) => Some(TokenKind::Arrow),
            (b'<', Some(b'=')) => Some(TokenKind::LessEq),
            (b'>', Some(b'=')) => Some(TokenKind::GreaterEq),
            _ => None,
        };
        if let Some(kind) = two {
            self.advance();
            return Ok(Token::new(kind, span));
        }

        let kind = match first {
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'*' => TokenKind::Star,
            b'/' => TokenKind::Slash,
            b'<' => TokenKind::Less,
            b'>' => TokenKind::Greater,
            b'=' => TokenKind::Equals,
            b'|' => TokenKind::Bar,
            b'&' => TokenKind::Amp,
            b'@' => TokenKind::At,
            b'.' => TokenKind::Dot,
            other => {
                return Err(SyntaxError::new(
                    format!("unexpected character '{}'", other as char),
                    span,
                ));
            }
        };
        Ok(Token::new(kind, span))
    }

    fn single(&mut self, kind: TokenKind, span: Span) -> Result<Token> {
        self.advance();
        Ok(Token::new(kind, span))
    }
}
