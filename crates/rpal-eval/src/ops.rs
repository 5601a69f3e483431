//! Binary and unary operator implementations.

use rpal_types::BinOp;

use crate::error::{EvalError, Result};
use crate::node::CsNode;

/// Apply a binary operator. `left` is the value popped first from the
/// operand stack, which is the left operand of the source expression.
pub fn binary(op: BinOp, left: CsNode, right: CsNode) -> Result<CsNode> {
    match op {
        BinOp::Add => arithmetic(op, left, right, |a, b| Ok(a.wrapping_add(b))),
        BinOp::Sub => arithmetic(op, left, right, |a, b| Ok(a.wrapping_sub(b))),
        BinOp::Mul => arithmetic(op, left, right, |a, b| Ok(a.wrapping_mul(b))),
        BinOp::Div => arithmetic(op, left, right, |a, b| {
            if b == 0 {
                Err(EvalError::DivisionByZero)
            } else {
                // Floor division: the quotient rounds toward negative
                // infinity, so (-7) / 2 is -4 and (-7) / (-2) is 3.
                let q = a.wrapping_div(b);
                if a.wrapping_rem(b) != 0 && (a < 0) != (b < 0) {
                    Ok(q - 1)
                } else {
                    Ok(q)
                }
            }
        }),
        BinOp::Pow => arithmetic(op, left, right, |a, b| {
            Ok((a as f64).powf(b as f64) as i64)
        }),

        BinOp::Eq => equality(op, left, right, true),
        BinOp::Ne => equality(op, left, right, false),

        BinOp::Ls => comparison(op, left, right, |o| o.is_lt()),
        BinOp::Gr => comparison(op, left, right, |o| o.is_gt()),
        BinOp::Le => comparison(op, left, right, |o| o.is_le()),
        BinOp::Ge => comparison(op, left, right, |o| o.is_ge()),

        BinOp::Or => logical(op, left, right, |a, b| a | b),
        BinOp::And => logical(op, left, right, |a, b| a & b),

        BinOp::Aug => augment(left, right),
    }
}

/// Apply `not` or `neg` to the popped operand.
pub fn unary(op: &CsNode, operand: CsNode) -> Result<CsNode> {
    match (op, operand) {
        (CsNode::Not, CsNode::Truth(b)) => Ok(CsNode::Truth(!b)),
        (CsNode::Neg, CsNode::Integer(n)) => Ok(CsNode::Integer(n.wrapping_neg())),
        (op, operand) => Err(EvalError::TypeMismatch(format!(
            "{} applied to a {}",
            op.kind_name(),
            operand.kind_name()
        ))),
    }
}

fn arithmetic(
    op: BinOp,
    left: CsNode,
    right: CsNode,
    apply: impl FnOnce(i64, i64) -> Result<i64>,
) -> Result<CsNode> {
    match (left, right) {
        (CsNode::Integer(a), CsNode::Integer(b)) => apply(a, b).map(CsNode::Integer),
        (left, right) => Err(operand_error(op, &left, &right)),
    }
}

/// `eq` and `ne` compare integers, strings and truthvalues; the operands
/// must be of the same type.
fn equality(op: BinOp, left: CsNode, right: CsNode, want_equal: bool) -> Result<CsNode> {
    let equal = match (&left, &right) {
        (CsNode::Integer(a), CsNode::Integer(b)) => a == b,
        (CsNode::Str(a), CsNode::Str(b)) => a == b,
        (CsNode::Truth(a), CsNode::Truth(b)) => a == b,
        _ => return Err(operand_error(op, &left, &right)),
    };
    Ok(CsNode::Truth(equal == want_equal))
}

/// Ordering comparisons work on integer pairs and on string pairs
/// (lexicographic).
fn comparison(
    op: BinOp,
    left: CsNode,
    right: CsNode,
    accept: impl FnOnce(std::cmp::Ordering) -> bool,
) -> Result<CsNode> {
    let ordering = match (&left, &right) {
        (CsNode::Integer(a), CsNode::Integer(b)) => a.cmp(b),
        (CsNode::Str(a), CsNode::Str(b)) => a.cmp(b),
        _ => return Err(operand_error(op, &left, &right)),
    };
    Ok(CsNode::Truth(accept(ordering)))
}

fn logical(
    op: BinOp,
    left: CsNode,
    right: CsNode,
    apply: impl FnOnce(bool, bool) -> bool,
) -> Result<CsNode> {
    match (left, right) {
        (CsNode::Truth(a), CsNode::Truth(b)) => Ok(CsNode::Truth(apply(a, b))),
        (left, right) => Err(operand_error(op, &left, &right)),
    }
}

/// `aug` appends to a copy of the tuple, leaving the original value (and
/// any other binding that shares it) untouched. `nil aug x` builds the
/// one-element tuple.
fn augment(left: CsNode, right: CsNode) -> Result<CsNode> {
    match left {
        CsNode::Tuple(mut items) => {
            items.push(right);
            Ok(CsNode::Tuple(items))
        }
        CsNode::Nil => Ok(CsNode::Tuple(vec![right])),
        other => Err(EvalError::TypeMismatch(format!(
            "cannot augment a {}",
            other.kind_name()
        ))),
    }
}

fn operand_error(op: BinOp, left: &CsNode, right: &CsNode) -> EvalError {
    EvalError::TypeMismatch(format!(
        "{} applied to a {} and a {}",
        op.as_str(),
        left.kind_name(),
        right.kind_name()
    ))
}
