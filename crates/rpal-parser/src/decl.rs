//! Definition productions of the RPAL grammar (`let`/`where` bodies).

use crate::parser::Parser;
use rpal_lexer::token::TokenKind;
use rpal_types::{AstKind, AstNode, Result};

impl Parser {
    /// D -> Da `within` D | Da  (right-associative)
    pub(crate) fn definition(&mut self) -> Result<AstNode> {
        let first = self.and_definition()?;
        if self.eat(&TokenKind::Within) {
            let rest = self.definition()?;
            return Ok(AstNode::node(AstKind::Within, vec![first, rest]));
        }
        Ok(first)
    }

    /// Da -> Dr (`and` Dr)*  — two or more form an `and` block.
    fn and_definition(&mut self) -> Result<AstNode> {
        let first = self.rec_definition()?;
        if !self.at(&TokenKind::And) {
            return Ok(first);
        }
        let mut defs = vec![first];
        while self.eat(&TokenKind::And) {
            defs.push(self.rec_definition()?);
        }
        Ok(AstNode::node(AstKind::And, defs))
    }

    /// Dr -> `rec` Db | Db
    pub(crate) fn rec_definition(&mut self) -> Result<AstNode> {
        if self.eat(&TokenKind::Rec) {
            let def = self.basic_definition()?;
            return Ok(AstNode::node(AstKind::Rec, vec![def]));
        }
        self.basic_definition()
    }

    /// Db -> `(` D `)` | V1 `=` E | <id> Vb+ `=` E
    fn basic_definition(&mut self) -> Result<AstNode> {
        if self.eat(&TokenKind::LParen) {
            let def = self.definition()?;
            self.expect(&TokenKind::RParen)?;
            return Ok(def);
        }
        if !matches!(self.peek_kind(), TokenKind::Identifier(_)) {
            return Err(self.unexpected("a definition"));
        }

        // Second token selects between a variable definition (`x = E`,
        // `x, y = E`) and a function form (`f v1 ... = E`).
        if matches!(self.look_ahead(1), TokenKind::Equals | TokenKind::Comma) {
            let var = self.var_list()?;
            self.expect(&TokenKind::Equals)?;
            let value = self.expression()?;
            return Ok(AstNode::node(AstKind::Equal, vec![var, value]));
        }

        let name = self.expect_identifier()?;
        let mut children = vec![AstNode::leaf(AstKind::Ident(name))];
        children.push(self.var_binding()?);
        while matches!(self.peek_kind(), TokenKind::Identifier(_) | TokenKind::LParen) {
            children.push(self.var_binding()?);
        }
        self.expect(&TokenKind::Equals)?;
        children.push(self.expression()?);
        Ok(AstNode::node(AstKind::FcnForm, children))
    }

    /// Vb -> <id> | `(` V1 `)` | `()`
    pub(crate) fn var_binding(&mut self) -> Result<AstNode> {
        if matches!(self.peek_kind(), TokenKind::Identifier(_)) {
            let name = self.expect_identifier()?;
            return Ok(AstNode::leaf(AstKind::Ident(name)));
        }
        if self.eat(&TokenKind::LParen) {
            if self.eat(&TokenKind::RParen) {
                return Ok(AstNode::leaf(AstKind::EmptyParams));
            }
            let vars = self.var_list()?;
            self.expect(&TokenKind::RParen)?;
            return Ok(vars);
        }
        Err(self.unexpected("a parameter"))
    }

    /// V1 -> <id> (`,` <id>)*  — two or more form a `comma` list.
    fn var_list(&mut self) -> Result<AstNode> {
        let first = self.expect_identifier()?;
        if !self.at(&TokenKind::Comma) {
            return Ok(AstNode::leaf(AstKind::Ident(first)));
        }
        let mut names = vec![AstNode::leaf(AstKind::Ident(first))];
        while self.eat(&TokenKind::Comma) {
            let name = self.expect_identifier()?;
            names.push(AstNode::leaf(AstKind::Ident(name)));
        }
        Ok(AstNode::node(AstKind::Comma, names))
    }
}
