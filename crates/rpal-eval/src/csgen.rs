//! Control structure generation.
//!
//! Flattens a canonical (standardized) AST into a list of control
//! structures. Structure 0 holds the whole program; every lambda body and
//! every conditional branch gets its own structure, numbered in the order
//! it is reserved. A structure is a preorder walk of its subtree, so when
//! it is expanded onto the control stack the last instruction lands on
//! top and operands evaluate right to left.

use std::collections::VecDeque;

use rpal_types::{AstKind, AstNode};

use crate::node::{Closure, CsNode};

/// Flatten a canonical AST into its control structures.
pub fn generate(root: &AstNode) -> Vec<Vec<CsNode>> {
    let mut generator = Generator {
        pending: VecDeque::new(),
        reserved: 0,
    };
    generator.pending.push_back(root);

    let mut deltas = Vec::new();
    while let Some(subtree) = generator.pending.pop_front() {
        let mut delta = Vec::new();
        generator.walk(subtree, &mut delta);
        deltas.push(delta);
    }
    deltas
}

struct Generator<'ast> {
    /// Subtrees still owed a control structure, in reservation order.
    pending: VecDeque<&'ast AstNode>,
    /// Highest structure index reserved so far.
    reserved: usize,
}

impl<'ast> Generator<'ast> {
    fn walk(&mut self, node: &'ast AstNode, delta: &mut Vec<CsNode>) {
        match &node.kind {
            AstKind::Lambda => {
                self.reserved += 1;
                delta.push(CsNode::Lambda(Closure {
                    params: binding_names(&node.children[0]),
                    body: self.reserved,
                    env: None,
                }));
                self.pending.push_back(&node.children[1]);
            }

            AstKind::Arrow => {
                delta.push(CsNode::Beta {
                    then_delta: self.reserved + 1,
                    else_delta: self.reserved + 2,
                });
                self.reserved += 2;
                self.pending.push_back(&node.children[1]);
                self.pending.push_back(&node.children[2]);
                self.walk(&node.children[0], delta);
            }

            AstKind::Tau => {
                delta.push(CsNode::Tau {
                    arity: node.children.len(),
                });
                for child in &node.children {
                    self.walk(child, delta);
                }
            }

            AstKind::Gamma => {
                delta.push(CsNode::Gamma);
                for child in &node.children {
                    self.walk(child, delta);
                }
            }

            AstKind::Op(op) => {
                delta.push(CsNode::Binop(*op));
                for child in &node.children {
                    self.walk(child, delta);
                }
            }

            AstKind::Not => {
                delta.push(CsNode::Not);
                self.walk(&node.children[0], delta);
            }
            AstKind::Neg => {
                delta.push(CsNode::Neg);
                self.walk(&node.children[0], delta);
            }

            AstKind::Ident(name) => delta.push(CsNode::Identifier(name.clone())),
            AstKind::Integer(n) => delta.push(CsNode::Integer(*n)),
            AstKind::Str(s) => delta.push(CsNode::Str(s.clone())),
            AstKind::True => delta.push(CsNode::Truth(true)),
            AstKind::False => delta.push(CsNode::Truth(false)),
            AstKind::Nil => delta.push(CsNode::Nil),
            AstKind::Dummy => delta.push(CsNode::Dummy),
            AstKind::Y => delta.push(CsNode::YStar),

            sugar => unreachable!("sugar node {sugar} survived standardization"),
        }
    }
}

/// Parameter names of a lambda binding: a single identifier, a `,` list
/// of identifiers, or `()` for no parameters at all.
fn binding_names(binding: &AstNode) -> Vec<String> {
    match &binding.kind {
        AstKind::Ident(name) => vec![name.clone()],
        AstKind::Comma => binding
            .children
            .iter()
            .map(|child| match &child.kind {
                AstKind::Ident(name) => name.clone(),
                other => unreachable!("non-identifier {other} in a binding list"),
            })
            .collect(),
        AstKind::EmptyParams => Vec::new(),
        other => unreachable!("invalid lambda binding {other}"),
    }
}
