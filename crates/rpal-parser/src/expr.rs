//! Expression productions of the RPAL grammar.
//!
//! Precedence, loosest first: `let`/`fn` bodies, `where`, tuple commas,
//! `aug`, the conditional arrow, `or`, `&`, `not`, comparisons, additive,
//! multiplicative, `**` (right-associative), `@` infix application, and
//! juxtaposition (`gamma`, left-associative).

use crate::parser::Parser;
use rpal_lexer::token::TokenKind;
use rpal_types::{AstKind, AstNode, BinOp, Result};

impl Parser {
    /// E -> `let` D `in` E | `fn` Vb+ `.` E | Ew
    pub(crate) fn expression(&mut self) -> Result<AstNode> {
        if self.eat(&TokenKind::Let) {
            let def = self.definition()?;
            self.expect(&TokenKind::In)?;
            let body = self.expression()?;
            return Ok(AstNode::node(AstKind::Let, vec![def, body]));
        }
        if self.eat(&TokenKind::Fn) {
            let mut children = vec![self.var_binding()?];
            while matches!(self.peek_kind(), TokenKind::Identifier(_) | TokenKind::LParen) {
                children.push(self.var_binding()?);
            }
            self.expect(&TokenKind::Dot)?;
            children.push(self.expression()?);
            return Ok(AstNode::node(AstKind::Lambda, children));
        }
        self.where_expr()
    }

    /// Ew -> T (`where` Dr)?
    fn where_expr(&mut self) -> Result<AstNode> {
        let body = self.tuple_expr()?;
        if self.eat(&TokenKind::Where) {
            let def = self.rec_definition()?;
            return Ok(AstNode::node(AstKind::Where, vec![body, def]));
        }
        Ok(body)
    }

    /// T -> Ta (`,` Ta)*  — two or more elements form a `tau`.
    fn tuple_expr(&mut self) -> Result<AstNode> {
        let first = self.aug_expr()?;
        if !self.at(&TokenKind::Comma) {
            return Ok(first);
        }
        let mut elements = vec![first];
        while self.eat(&TokenKind::Comma) {
            elements.push(self.aug_expr()?);
        }
        Ok(AstNode::node(AstKind::Tau, elements))
    }

    /// Ta -> Ta `aug` Tc | Tc  (left-associative)
    fn aug_expr(&mut self) -> Result<AstNode> {
        let mut left = self.cond_expr()?;
        while self.eat(&TokenKind::Aug) {
            let right = self.cond_expr()?;
            left = AstNode::node(AstKind::Op(BinOp::Aug), vec![left, right]);
        }
        Ok(left)
    }

    /// Tc -> B `->` Tc `|` Tc | B
    fn cond_expr(&mut self) -> Result<AstNode> {
        let cond = self.or_expr()?;
        if self.eat(&TokenKind::Arrow) {
            let then_branch = self.cond_expr()?;
            self.expect(&TokenKind::Bar)?;
            let else_branch = self.cond_expr()?;
            return Ok(AstNode::node(
                AstKind::Arrow,
                vec![cond, then_branch, else_branch],
            ));
        }
        Ok(cond)
    }

    /// B -> B `or` Bt | Bt  (left-associative)
    fn or_expr(&mut self) -> Result<AstNode> {
        let mut left = self.and_expr()?;
        while self.eat(&TokenKind::Or) {
            let right = self.and_expr()?;
            left = AstNode::node(AstKind::Op(BinOp::Or), vec![left, right]);
        }
        Ok(left)
    }

    /// Bt -> Bt `&` Bs | Bs  (left-associative)
    fn and_expr(&mut self) -> Result<AstNode> {
        let mut left = self.not_expr()?;
        while self.eat(&TokenKind::Amp) {
            let right = self.not_expr()?;
            left = AstNode::node(AstKind::Op(BinOp::And), vec![left, right]);
        }
        Ok(left)
    }

    /// Bs -> `not` Bp | Bp
    fn not_expr(&mut self) -> Result<AstNode> {
        if self.eat(&TokenKind::Not) {
            let operand = self.comparison_expr()?;
            return Ok(AstNode::node(AstKind::Not, vec![operand]));
        }
        self.comparison_expr()
    }

    /// Bp -> A (comparison A)?  — at most one comparison, no chaining.
    fn comparison_expr(&mut self) -> Result<AstNode> {
        let left = self.additive_expr()?;
        let op = match self.peek_kind() {
            TokenKind::Gr | TokenKind::Greater => BinOp::Gr,
            TokenKind::Ge | TokenKind::GreaterEq => BinOp::Ge,
            TokenKind::Ls | TokenKind::Less => BinOp::Ls,
            TokenKind::Le | TokenKind::LessEq => BinOp::Le,
            TokenKind::Eq => BinOp::Eq,
            TokenKind::Ne => BinOp::Ne,
            _ => return Ok(left),
        };
        self.advance();
        let right = self.additive_expr()?;
        Ok(AstNode::node(AstKind::Op(op), vec![left, right]))
    }

    /// A -> [`+`|`-`] At ((`+`|`-`) At)*  — a leading `-` is `neg`.
    fn additive_expr(&mut self) -> Result<AstNode> {
        let mut left = if self.eat(&TokenKind::Minus) {
            let operand = self.multiplicative_expr()?;
            AstNode::node(AstKind::Neg, vec![operand])
        } else {
            // A leading `+` is a no-op.
            self.eat(&TokenKind::Plus);
            self.multiplicative_expr()?
        };
        loop {
            let op = match self.peek_kind() {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Sub,
                _ => break,
            };
            self.advance();
            let right = self.multiplicative_expr()?;
            left = AstNode::node(AstKind::Op(op), vec![left, right]);
        }
        Ok(left)
    }

    /// At -> At (`*`|`/`) Af | Af  (left-associative)
    fn multiplicative_expr(&mut self) -> Result<AstNode> {
        let mut left = self.power_expr()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Star => BinOp::Mul,
                TokenKind::Slash => BinOp::Div,
                _ => break,
            };
            self.advance();
            let right = self.power_expr()?;
            left = AstNode::node(AstKind::Op(op), vec![left, right]);
        }
        Ok(left)
    }

    /// Af -> Ap `**` Af | Ap  (right-associative)
    fn power_expr(&mut self) -> Result<AstNode> {
        let base = self.infix_apply_expr()?;
        if self.eat(&TokenKind::Power) {
            let exponent = self.power_expr()?;
            return Ok(AstNode::node(AstKind::Op(BinOp::Pow), vec![base, exponent]));
        }
        Ok(base)
    }

    /// Ap -> Ap `@` <id> R | R  (left-associative)
    fn infix_apply_expr(&mut self) -> Result<AstNode> {
        let mut left = self.application_expr()?;
        while self.eat(&TokenKind::At) {
            let name = self.expect_identifier()?;
            let right = self.application_expr()?;
            left = AstNode::node(
                AstKind::InfixApply,
                vec![left, AstNode::leaf(AstKind::Ident(name)), right],
            );
        }
        Ok(left)
    }

    /// R -> R Rn | Rn  — juxtaposition builds `gamma`, left-associative.
    fn application_expr(&mut self) -> Result<AstNode> {
        let mut rator = self.operand()?;
        while self.at_operand() {
            let rand = self.operand()?;
            rator = AstNode::node(AstKind::Gamma, vec![rator, rand]);
        }
        Ok(rator)
    }

    /// Rn -> <id> | <int> | <str> | `true` | `false` | `nil` | `dummy`
    ///     | `(` E `)`
    fn operand(&mut self) -> Result<AstNode> {
        let kind = match self.peek_kind() {
            TokenKind::Identifier(name) => AstKind::Ident(name.clone()),
            TokenKind::Integer(value) => AstKind::Integer(*value),
            TokenKind::Str(contents) => AstKind::Str(contents.clone()),
            TokenKind::True => AstKind::True,
            TokenKind::False => AstKind::False,
            TokenKind::Nil => AstKind::Nil,
            TokenKind::Dummy => AstKind::Dummy,
            TokenKind::LParen => {
                self.advance();
                let inner = self.expression()?;
                self.expect(&TokenKind::RParen)?;
                return Ok(inner);
            }
            _ => return Err(self.unexpected("an expression")),
        };
        self.advance();
        Ok(AstNode::leaf(kind))
    }
}
