//! Integration tests for the standardizer: canonical shapes for each
//! rewrite rule.

use rpal_parser::parse;
use rpal_standardizer::standardize;
use rpal_types::{AstKind, AstNode, BinOp};

fn canonical(source: &str) -> AstNode {
    standardize(parse(source).expect("parse failure"))
}

fn ident(name: &str) -> AstNode {
    AstNode::leaf(AstKind::Ident(name.into()))
}

fn int(value: i64) -> AstNode {
    AstNode::leaf(AstKind::Integer(value))
}

fn lambda(binding: AstNode, body: AstNode) -> AstNode {
    AstNode::node(AstKind::Lambda, vec![binding, body])
}

fn gamma(rator: AstNode, rand: AstNode) -> AstNode {
    AstNode::node(AstKind::Gamma, vec![rator, rand])
}

#[test]
fn let_becomes_application() {
    let expected = gamma(
        lambda(
            ident("x"),
            AstNode::node(AstKind::Op(BinOp::Add), vec![ident("x"), int(1)]),
        ),
        int(5),
    );
    assert_eq!(canonical("let x = 5 in x + 1"), expected);
}

#[test]
fn where_matches_let() {
    assert_eq!(
        canonical("x + 1 where x = 5"),
        canonical("let x = 5 in x + 1")
    );
}

#[test]
fn within_nests_the_inner_definition() {
    // = b (gamma (lambda a 2) 1)
    let t = canonical("let a = 1 within b = a + a in b");
    let AstKind::Gamma = t.kind else { panic!("let did not rewrite") };
    let binding = &t.children[1];
    assert_eq!(
        *binding,
        gamma(
            lambda(
                ident("a"),
                AstNode::node(AstKind::Op(BinOp::Add), vec![ident("a"), ident("a")]),
            ),
            int(1),
        )
    );
}

#[test]
fn rec_introduces_the_fixed_point_combinator() {
    let t = canonical("let rec f = f in f");
    // gamma (lambda f f) (gamma Y (lambda f f))
    let value = &t.children[1];
    assert_eq!(
        *value,
        gamma(
            AstNode::leaf(AstKind::Y),
            lambda(ident("f"), ident("f")),
        )
    );
}

#[test]
fn fcn_form_curries_parameters() {
    let t = canonical("let f x y = x in f");
    let value = &t.children[1];
    assert_eq!(
        *value,
        lambda(ident("x"), lambda(ident("y"), ident("x")))
    );
}

#[test]
fn multi_binding_lambda_curries() {
    assert_eq!(
        canonical("fn x y. x"),
        lambda(ident("x"), lambda(ident("y"), ident("x")))
    );
}

#[test]
fn tuple_binding_lambda_stays_flat() {
    let expected = lambda(
        AstNode::node(AstKind::Comma, vec![ident("x"), ident("y")]),
        ident("x"),
    );
    assert_eq!(canonical("fn (x, y). x"), expected);
}

#[test]
fn infix_application_becomes_double_gamma() {
    assert_eq!(
        canonical("1 @add 2"),
        gamma(gamma(ident("add"), int(1)), int(2))
    );
}

#[test]
fn and_zips_names_with_a_tuple_of_values() {
    let t = canonical("let a = 1 and b = 2 in a + b");
    let value = &t.children[1];
    assert_eq!(*value, AstNode::node(AstKind::Tau, vec![int(1), int(2)]));
    let binding = &t.children[0].children[0];
    assert_eq!(
        *binding,
        AstNode::node(AstKind::Comma, vec![ident("a"), ident("b")])
    );
}

#[test]
fn nested_sugar_standardizes_inside_out() {
    // The where inside the let body must be gone by the time the let
    // rewrite runs.
    let t = canonical("let x = 1 in (y where y = x)");
    let body = &t.children[0].children[1];
    assert_eq!(*body, gamma(lambda(ident("y"), ident("y")), ident("x")));
}

#[test]
fn core_nodes_pass_through_untouched() {
    let expected = AstNode::node(
        AstKind::Arrow,
        vec![
            AstNode::leaf(AstKind::True),
            int(1),
            AstNode::node(AstKind::Neg, vec![int(2)]),
        ],
    );
    assert_eq!(canonical("true -> 1 | -2"), expected);
}
