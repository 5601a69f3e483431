//! CSE machine integration tests: full programs through the parser,
//! standardizer, generator and machine.

use rpal_eval::{evaluate, CsNode, EvalError, Evaluation};
use rpal_parser::parse;
use rpal_standardizer::standardize;

fn run(source: &str) -> Evaluation {
    let canonical = standardize(parse(source).expect("parse failure"));
    evaluate(&canonical).expect("evaluation failure")
}

fn value(source: &str) -> CsNode {
    run(source).value
}

fn run_err(source: &str) -> EvalError {
    let canonical = standardize(parse(source).expect("parse failure"));
    evaluate(&canonical).expect_err("evaluation unexpectedly succeeded")
}

// ── Arithmetic and comparison ────────────────────────────────────────

#[test]
fn subtraction_is_left_minus_right() {
    assert_eq!(value("5 - 3"), CsNode::Integer(2));
}

#[test]
fn comparison_is_left_against_right() {
    assert_eq!(value("1 gr 0"), CsNode::Truth(true));
    assert_eq!(value("0 gr 1"), CsNode::Truth(false));
}

#[test]
fn operator_precedence_end_to_end() {
    assert_eq!(value("2 + 3 * 4"), CsNode::Integer(14));
    assert_eq!(value("2 ** 3 ** 2"), CsNode::Integer(512));
}

#[test]
fn division_floors() {
    assert_eq!(value("7 / 2"), CsNode::Integer(3));
    assert_eq!(value("(-7) / 2"), CsNode::Integer(-4));
    assert_eq!(value("(-7) / (-2)"), CsNode::Integer(3));
}

#[test]
fn leading_minus_negates_the_whole_term() {
    // A -> '-' At, so the negation wraps the division.
    assert_eq!(value("-7 / 2"), CsNode::Integer(-3));
}

#[test]
fn power_of_zero_is_one() {
    assert_eq!(value("5 ** 0"), CsNode::Integer(1));
    assert_eq!(value("0 ** 0"), CsNode::Integer(1));
}

#[test]
fn unary_operators() {
    assert_eq!(value("-5 + 2"), CsNode::Integer(-3));
    assert_eq!(value("not false"), CsNode::Truth(true));
}

#[test]
fn logical_connectives() {
    assert_eq!(value("true & false"), CsNode::Truth(false));
    assert_eq!(value("false or true"), CsNode::Truth(true));
}

// ── Bindings and functions ───────────────────────────────────────────

#[test]
fn let_binds_a_name() {
    assert_eq!(value("let x = 5 in x + 1"), CsNode::Integer(6));
}

#[test]
fn where_binds_after_the_body() {
    assert_eq!(value("x + 1 where x = 5"), CsNode::Integer(6));
}

#[test]
fn curried_application() {
    assert_eq!(value("let f x y = x - y in f 10 3"), CsNode::Integer(7));
}

#[test]
fn tuple_parameter_binds_componentwise() {
    assert_eq!(
        value("let f (x, y) = x - y in f (10, 3)"),
        CsNode::Integer(7)
    );
}

#[test]
fn scoping_is_static() {
    // f captures the x = 1 environment; the later x = 10 must not leak in.
    assert_eq!(
        value("let x = 1 in let f y = x + y in let x = 10 in f 5"),
        CsNode::Integer(6)
    );
}

#[test]
fn within_scopes_the_inner_definition() {
    assert_eq!(
        value("let a = 2 within b = a * a in b + 1"),
        CsNode::Integer(5)
    );
}

#[test]
fn and_definitions_are_simultaneous() {
    assert_eq!(
        value("let a = 1 and b = 2 in a + b"),
        CsNode::Integer(3)
    );
}

#[test]
fn infix_application_operator() {
    assert_eq!(
        value("let add x y = x + y in 1 @add 2"),
        CsNode::Integer(3)
    );
}

#[test]
fn recursive_factorial() {
    assert_eq!(
        value("let rec fact n = n eq 0 -> 1 | n * fact (n - 1) in fact 5"),
        CsNode::Integer(120)
    );
}

#[test]
fn deep_recursion_unrolls_many_etas() {
    assert_eq!(
        value("let rec sum n = n eq 0 -> 0 | n + sum (n - 1) in sum 100"),
        CsNode::Integer(5050)
    );
}

// ── Conditionals ─────────────────────────────────────────────────────

#[test]
fn conditional_picks_a_branch() {
    assert_eq!(value("true -> 1 | 2"), CsNode::Integer(1));
    assert_eq!(value("false -> 1 | 2"), CsNode::Integer(2));
}

#[test]
fn untaken_branch_is_never_evaluated() {
    // The else branch divides by zero; picking then must not touch it.
    assert_eq!(value("true -> 1 | 1 / 0"), CsNode::Integer(1));
}

#[test]
fn non_truth_guard_is_an_error() {
    assert!(matches!(run_err("1 -> 2 | 3"), EvalError::TypeMismatch(_)));
}

// ── Tuples and nil ───────────────────────────────────────────────────

#[test]
fn tuple_formation_preserves_order() {
    assert_eq!(
        value("(1, 2, 3)"),
        CsNode::Tuple(vec![
            CsNode::Integer(1),
            CsNode::Integer(2),
            CsNode::Integer(3),
        ])
    );
}

#[test]
fn tuple_selection_is_one_based() {
    assert_eq!(value("let t = (4, 5, 6) in t 1"), CsNode::Integer(4));
    assert_eq!(value("let t = (4, 5, 6) in t 3"), CsNode::Integer(6));
}

#[test]
fn selection_out_of_range_is_an_error() {
    assert_eq!(
        run_err("let t = (1, 2) in t 5"),
        EvalError::IndexOutOfRange { index: 5, order: 2 }
    );
    assert_eq!(
        run_err("let t = (1, 2) in t 0"),
        EvalError::IndexOutOfRange { index: 0, order: 2 }
    );
}

#[test]
fn nil_is_the_empty_tuple() {
    assert_eq!(value("Null nil"), CsNode::Truth(true));
    assert_eq!(value("Istuple nil"), CsNode::Truth(true));
    assert_eq!(value("Order nil"), CsNode::Integer(0));
}

#[test]
fn aug_grows_a_tuple_from_nil() {
    assert_eq!(
        value("nil aug 1 aug 2"),
        CsNode::Tuple(vec![CsNode::Integer(1), CsNode::Integer(2)])
    );
}

#[test]
fn aug_chain_matches_direct_construction() {
    assert_eq!(value("nil aug 1 aug 2 aug 3"), value("(1, 2, 3)"));
}

#[test]
fn aug_leaves_the_original_tuple_alone() {
    assert_eq!(
        value("let t = (1, 2) in let u = t aug 3 in Order t"),
        CsNode::Integer(2)
    );
}

// ── Builtins ─────────────────────────────────────────────────────────

#[test]
fn string_builtins() {
    assert_eq!(value("Stem 'abc'"), CsNode::Str("a".into()));
    assert_eq!(value("Stern 'abc'"), CsNode::Str("bc".into()));
    assert_eq!(value("Conc 'ab' 'cd'"), CsNode::Str("abcd".into()));
}

#[test]
fn non_ascii_strings_round_trip() {
    assert_eq!(value("'é'"), CsNode::Str("é".into()));
    assert_eq!(value("Stem 'été'"), CsNode::Str("é".into()));
    assert_eq!(value("Stern 'été'"), CsNode::Str("té".into()));
}

#[test]
fn conc_can_be_partially_applied() {
    assert_eq!(
        value("let greet = Conc 'hello ' in greet 'world'"),
        CsNode::Str("hello world".into())
    );
}

#[test]
fn type_predicates() {
    assert_eq!(value("Isinteger 1"), CsNode::Truth(true));
    assert_eq!(value("Isstring 1"), CsNode::Truth(false));
    assert_eq!(value("Istruthvalue true"), CsNode::Truth(true));
    assert_eq!(value("Isdummy dummy"), CsNode::Truth(true));
    assert_eq!(value("Isfunction (fn x. x)"), CsNode::Truth(true));
    assert_eq!(value("Isfunction 1"), CsNode::Truth(false));
}

#[test]
fn itos_formats_an_integer() {
    assert_eq!(value("ItoS 42"), CsNode::Str("42".into()));
    assert_eq!(value("Conc (ItoS 4) 'th'"), CsNode::Str("4th".into()));
}

#[test]
fn order_counts_tuple_elements() {
    assert_eq!(value("Order (1, 2, 3)"), CsNode::Integer(3));
}

#[test]
fn builtin_application_passes_bound_values() {
    assert_eq!(value("let p = 1 in Print p"), CsNode::Integer(1));
}

// ── Print and output ─────────────────────────────────────────────────

#[test]
fn print_renders_to_output_and_passes_through() {
    let result = run("Print 5 + 1");
    assert_eq!(result.value, CsNode::Integer(6));
    assert_eq!(result.output, "5");
}

#[test]
fn print_renders_nested_tuples() {
    assert_eq!(run("Print (1, ('a', true), nil)").output, "(1, (a, true), nil)");
}

#[test]
fn print_expands_escapes() {
    assert_eq!(run("Print 'a\\nb\\tc'").output, "a\nb\tc");
}

#[test]
fn prints_accumulate_in_evaluation_order() {
    let result = run("let x = Print 'one ' in Print 'two'");
    assert_eq!(result.output, "one two");
}

// ── Error paths ──────────────────────────────────────────────────────

#[test]
fn unbound_identifier() {
    assert_eq!(run_err("x"), EvalError::UndefinedVariable("x".into()));
}

#[test]
fn division_by_zero() {
    assert_eq!(run_err("1 / 0"), EvalError::DivisionByZero);
}

#[test]
fn adding_a_string_is_a_type_error() {
    assert!(matches!(run_err("1 + 'a'"), EvalError::TypeMismatch(_)));
}

#[test]
fn applying_a_non_function() {
    assert_eq!(run_err("1 2"), EvalError::NotAClosure("integer".into()));
}

#[test]
fn stem_of_the_empty_string() {
    assert_eq!(run_err("Stem ''"), EvalError::EmptyString("Stem"));
    assert_eq!(run_err("Stern ''"), EvalError::EmptyString("Stern"));
}

#[test]
fn tuple_parameter_arity_mismatch() {
    assert!(matches!(
        run_err("let f (x, y) = x in f 1"),
        EvalError::TypeMismatch(_)
    ));
}

#[test]
fn order_of_a_non_tuple() {
    assert_eq!(run_err("Order 1"), EvalError::NotATuple("integer".into()));
}
