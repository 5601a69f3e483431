//! AST standardization.
//!
//! Rewrites the sugared parse tree into the canonical subset the control
//! structure generator understands. Each sugar form (`let`, `where`,
//! `within`, `rec`, `fcn_form`, `and`, `@`) is replaced by an equivalent
//! tree built from `gamma`, `lambda`, `tau`, `=` and `Y`. Rewriting is
//! bottom-up, so by the time a parent rule fires every nested sugar form
//! has already been eliminated.
//!
//! Multi-binding functions are curried: `fn x y. E` and `f x y = E` both
//! become nested single-binding lambdas. A canonical lambda therefore has
//! exactly two children, one binding (an identifier, a `,` list, or `()`)
//! and a body.

use rpal_types::{AstKind, AstNode};

/// Standardize a raw parse tree into canonical form.
pub fn standardize(node: AstNode) -> AstNode {
    let AstNode { kind, children } = node;
    let children: Vec<AstNode> = children.into_iter().map(standardize).collect();
    rewrite(kind, children)
}

fn rewrite(kind: AstKind, mut children: Vec<AstNode>) -> AstNode {
    match kind {
        // let (= X E) P  =>  gamma (lambda X P) E
        AstKind::Let => {
            let body = children.pop().unwrap_or_else(|| malformed("let"));
            let (name, value) = split_equal(children.pop().unwrap_or_else(|| malformed("let")));
            apply_binding(name, body, value)
        }

        // P where (= X E)  =>  gamma (lambda X P) E
        AstKind::Where => {
            let (name, value) = split_equal(children.pop().unwrap_or_else(|| malformed("where")));
            let body = children.pop().unwrap_or_else(|| malformed("where"));
            apply_binding(name, body, value)
        }

        // (= X1 E1) within (= X2 E2)  =>  = X2 (gamma (lambda X1 E2) E1)
        AstKind::Within => {
            let (outer_name, outer_value) =
                split_equal(children.pop().unwrap_or_else(|| malformed("within")));
            let (inner_name, inner_value) =
                split_equal(children.pop().unwrap_or_else(|| malformed("within")));
            let gamma = AstNode::node(
                AstKind::Gamma,
                vec![
                    AstNode::node(AstKind::Lambda, vec![inner_name, outer_value]),
                    inner_value,
                ],
            );
            AstNode::node(AstKind::Equal, vec![outer_name, gamma])
        }

        // rec (= X E)  =>  = X (gamma Y (lambda X E))
        AstKind::Rec => {
            let (name, value) = split_equal(children.pop().unwrap_or_else(|| malformed("rec")));
            let lambda = AstNode::node(AstKind::Lambda, vec![name.clone(), value]);
            let gamma = AstNode::node(
                AstKind::Gamma,
                vec![AstNode::leaf(AstKind::Y), lambda],
            );
            AstNode::node(AstKind::Equal, vec![name, gamma])
        }

        // F V1 .. Vn = E  =>  = F (lambda V1 (.. (lambda Vn E)))
        AstKind::FcnForm => {
            let body = children.pop().unwrap_or_else(|| malformed("fcn_form"));
            let name = children.remove(0);
            AstNode::node(AstKind::Equal, vec![name, curry(children, body)])
        }

        // fn V1 .. Vn. E  =>  lambda V1 (.. (lambda Vn E))
        AstKind::Lambda if children.len() > 2 => {
            let body = children.pop().unwrap_or_else(|| malformed("lambda"));
            curry(children, body)
        }

        // E1 @ N E2  =>  gamma (gamma N E1) E2
        AstKind::InfixApply => {
            let right = children.pop().unwrap_or_else(|| malformed("@"));
            let name = children.pop().unwrap_or_else(|| malformed("@"));
            let left = children.pop().unwrap_or_else(|| malformed("@"));
            let inner = AstNode::node(AstKind::Gamma, vec![name, left]);
            AstNode::node(AstKind::Gamma, vec![inner, right])
        }

        // (= X1 E1) and .. and (= Xn En)  =>  = (, X1 .. Xn) (tau E1 .. En)
        AstKind::And => {
            let mut names = Vec::with_capacity(children.len());
            let mut values = Vec::with_capacity(children.len());
            for definition in children {
                let (name, value) = split_equal(definition);
                names.push(name);
                values.push(value);
            }
            AstNode::node(
                AstKind::Equal,
                vec![
                    AstNode::node(AstKind::Comma, names),
                    AstNode::node(AstKind::Tau, values),
                ],
            )
        }

        _ => AstNode { kind, children },
    }
}

/// Build `gamma (lambda NAME BODY) VALUE`, the shared shape of the `let`
/// and `where` rewrites.
fn apply_binding(name: AstNode, body: AstNode, value: AstNode) -> AstNode {
    AstNode::node(
        AstKind::Gamma,
        vec![AstNode::node(AstKind::Lambda, vec![name, body]), value],
    )
}

/// Fold a binding list into nested single-binding lambdas around `body`.
fn curry(bindings: Vec<AstNode>, body: AstNode) -> AstNode {
    bindings.into_iter().rev().fold(body, |inner, binding| {
        AstNode::node(AstKind::Lambda, vec![binding, inner])
    })
}

/// Pull the name and value out of a standardized definition. Bottom-up
/// rewriting guarantees every definition position holds an `=` node here.
fn split_equal(node: AstNode) -> (AstNode, AstNode) {
    match node {
        AstNode {
            kind: AstKind::Equal,
            mut children,
        } if children.len() == 2 => {
            let value = children.pop().unwrap_or_else(|| malformed("="));
            let name = children.pop().unwrap_or_else(|| malformed("="));
            (name, value)
        }
        other => unreachable!("definition did not standardize to an = node: {}", other.kind),
    }
}

fn malformed(rule: &str) -> AstNode {
    unreachable!("malformed {rule} node survived parsing")
}
