//! Built-in functions.
//!
//! Builtin names are not looked up in the environment; the machine pushes
//! them as bare identifiers and applies them when a `gamma` finds one in
//! operator position. They are not reserved words, so a user binding with
//! the same name simply never resolves to it.

use crate::error::{EvalError, Result};
use crate::node::CsNode;

/// Names recognized as built-in functions.
pub const BUILTINS: &[&str] = &[
    "Print",
    "Stem",
    "Stern",
    "Conc",
    "Order",
    "Null",
    "Isinteger",
    "Istruthvalue",
    "Isstring",
    "Istuple",
    "Isfunction",
    "Isdummy",
    "ItoS",
];

pub fn is_builtin(name: &str) -> bool {
    BUILTINS.contains(&name)
}

/// Apply the builtin `name` to `arg`. `Print` renders into `output`;
/// everything else leaves it alone.
pub fn apply(name: &str, arg: CsNode, output: &mut String) -> Result<CsNode> {
    match name {
        // Print passes its argument through so applications compose.
        "Print" => {
            output.push_str(&arg.to_string());
            Ok(arg)
        }

        "Stem" => split_first(arg, "Stem", |first, _rest| first.to_string()),
        "Stern" => split_first(arg, "Stern", |_first, rest| rest.to_string()),

        // Conc curries: the first application captures the left string.
        "Conc" => match arg {
            CsNode::Str(s) => Ok(CsNode::ConcPartial(s)),
            other => Err(string_expected("Conc", &other)),
        },

        "Order" => match arg {
            CsNode::Tuple(items) => Ok(CsNode::Integer(items.len() as i64)),
            CsNode::Nil => Ok(CsNode::Integer(0)),
            other => Err(EvalError::NotATuple(other.kind_name().to_string())),
        },

        "Null" => Ok(CsNode::Truth(matches!(arg, CsNode::Nil))),

        "Isinteger" => Ok(CsNode::Truth(matches!(arg, CsNode::Integer(_)))),
        "Istruthvalue" => Ok(CsNode::Truth(matches!(arg, CsNode::Truth(_)))),
        "Isstring" => Ok(CsNode::Truth(matches!(arg, CsNode::Str(_)))),
        "Istuple" => Ok(CsNode::Truth(matches!(
            arg,
            CsNode::Tuple(_) | CsNode::Nil
        ))),
        "Isfunction" => Ok(CsNode::Truth(matches!(
            arg,
            CsNode::Lambda(_) | CsNode::Eta(_)
        ))),
        "Isdummy" => Ok(CsNode::Truth(matches!(arg, CsNode::Dummy))),

        "ItoS" => match arg {
            CsNode::Integer(n) => Ok(CsNode::Str(n.to_string())),
            other => Err(EvalError::TypeMismatch(format!(
                "ItoS applied to a {}",
                other.kind_name()
            ))),
        },

        _ => Err(EvalError::MachineState(format!(
            "unknown builtin {name}"
        ))),
    }
}

/// Split a string argument at its first character, or fail on the empty
/// string. Boundaries are chars, not bytes.
fn split_first(
    arg: CsNode,
    name: &'static str,
    pick: impl FnOnce(char, &str) -> String,
) -> Result<CsNode> {
    match arg {
        CsNode::Str(s) => match s.chars().next() {
            Some(first) => Ok(CsNode::Str(pick(first, &s[first.len_utf8()..]))),
            None => Err(EvalError::EmptyString(name)),
        },
        other => Err(string_expected(name, &other)),
    }
}

fn string_expected(name: &str, found: &CsNode) -> EvalError {
    EvalError::TypeMismatch(format!("{name} applied to a {}", found.kind_name()))
}
