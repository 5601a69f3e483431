//! Control structure generator tests: delta contents and numbering.

use rpal_eval::{generate, Closure, CsNode};
use rpal_parser::parse;
use rpal_standardizer::standardize;
use rpal_types::BinOp;

fn deltas(source: &str) -> Vec<Vec<CsNode>> {
    generate(&standardize(parse(source).expect("parse failure")))
}

fn closure(params: &[&str], body: usize) -> CsNode {
    CsNode::Lambda(Closure {
        params: params.iter().map(|p| p.to_string()).collect(),
        body,
        env: None,
    })
}

fn ident(name: &str) -> CsNode {
    CsNode::Identifier(name.into())
}

#[test]
fn straight_line_program_is_one_delta() {
    assert_eq!(
        deltas("1 + 2"),
        vec![vec![
            CsNode::Binop(BinOp::Add),
            CsNode::Integer(1),
            CsNode::Integer(2),
        ]]
    );
}

#[test]
fn lambda_body_gets_its_own_delta() {
    let ds = deltas("let x = 5 in x");
    assert_eq!(
        ds,
        vec![
            vec![CsNode::Gamma, closure(&["x"], 1), CsNode::Integer(5)],
            vec![ident("x")],
        ]
    );
}

#[test]
fn conditional_reserves_then_before_else() {
    let ds = deltas("true -> 1 | 2");
    assert_eq!(
        ds,
        vec![
            vec![
                CsNode::Beta {
                    then_delta: 1,
                    else_delta: 2,
                },
                CsNode::Truth(true),
            ],
            vec![CsNode::Integer(1)],
            vec![CsNode::Integer(2)],
        ]
    );
}

#[test]
fn tuple_records_its_arity() {
    let ds = deltas("1, 2, 3");
    assert_eq!(ds[0][0], CsNode::Tau { arity: 3 });
}

#[test]
fn recursive_factorial_numbering() {
    let ds = deltas("let rec f n = n eq 0 -> 1 | n * f (n - 1) in f 5");
    assert_eq!(
        ds,
        vec![
            // gamma (lambda f ..) (gamma Y (lambda f ..))
            vec![
                CsNode::Gamma,
                closure(&["f"], 1),
                CsNode::Gamma,
                CsNode::YStar,
                closure(&["f"], 2),
            ],
            // f 5
            vec![CsNode::Gamma, ident("f"), CsNode::Integer(5)],
            // lambda n
            vec![closure(&["n"], 3)],
            // the conditional body
            vec![
                CsNode::Beta {
                    then_delta: 4,
                    else_delta: 5,
                },
                CsNode::Binop(BinOp::Eq),
                ident("n"),
                CsNode::Integer(0),
            ],
            vec![CsNode::Integer(1)],
            vec![
                CsNode::Binop(BinOp::Mul),
                ident("n"),
                CsNode::Gamma,
                ident("f"),
                CsNode::Binop(BinOp::Sub),
                ident("n"),
                CsNode::Integer(1),
            ],
        ]
    );
}

#[test]
fn tuple_binding_keeps_all_names_in_one_closure() {
    let ds = deltas("let f (x, y) = x in f");
    assert_eq!(ds[0][1], closure(&["f"], 1));
    assert_eq!(ds[0][2], closure(&["x", "y"], 2));
    assert_eq!(ds[2], vec![ident("x")]);
}

#[test]
fn empty_binding_has_no_parameter_names() {
    let ds = deltas("let f () = 1 in f");
    assert_eq!(ds[0][2], closure(&[], 2));
    assert_eq!(ds[2], vec![CsNode::Integer(1)]);
}
