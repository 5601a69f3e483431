//! The CSE machine.
//!
//! Runs the control structures produced by [`crate::generate`] against an
//! operand stack and an environment tree. Control and stack both start
//! with the marker for environment 0; the run ends when control drains,
//! leaving exactly one value on the stack.

use crate::builtins;
use crate::env::EnvironmentTree;
use crate::error::{EvalError, Result};
use crate::node::CsNode;
use crate::ops;

/// Result of a completed run: the value left on the operand stack and
/// everything `Print` wrote along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub value: CsNode,
    pub output: String,
}

pub struct Machine {
    deltas: Vec<Vec<CsNode>>,
    control: Vec<CsNode>,
    stack: Vec<CsNode>,
    envs: EnvironmentTree,
    current_env: usize,
    output: String,
}

impl Machine {
    pub fn new(deltas: Vec<Vec<CsNode>>) -> Self {
        Self {
            deltas,
            control: Vec::new(),
            stack: Vec::new(),
            envs: EnvironmentTree::new(),
            current_env: 0,
            output: String::new(),
        }
    }

    /// Run to completion.
    pub fn run(mut self) -> Result<Evaluation> {
        let root = self.envs.push(None, Vec::new(), Vec::new());
        let marker = CsNode::EnvMarker {
            id: root,
            restore: root,
        };
        self.control.push(marker.clone());
        self.stack.push(marker);
        self.expand(0)?;

        while let Some(node) = self.control.pop() {
            self.step(node)?;
        }

        let value = self.pop()?;
        if !self.stack.is_empty() {
            return Err(EvalError::MachineState(
                "operand stack not empty after run".into(),
            ));
        }
        Ok(Evaluation {
            value,
            output: self.output,
        })
    }

    fn step(&mut self, node: CsNode) -> Result<()> {
        match node {
            // Rule 1: constants go straight to the stack, identifiers are
            // resolved first. Builtin names stay symbolic until applied.
            CsNode::Integer(_)
            | CsNode::Str(_)
            | CsNode::Truth(_)
            | CsNode::Nil
            | CsNode::Dummy
            | CsNode::YStar => self.stack.push(node),

            CsNode::Identifier(name) => {
                if builtins::is_builtin(&name) {
                    self.stack.push(CsNode::Identifier(name));
                } else {
                    let value = self.envs.lookup(self.current_env, &name)?.clone();
                    self.stack.push(value);
                }
            }

            // Rule 2: a closure captures the current environment as it
            // crosses to the stack.
            CsNode::Lambda(mut closure) => {
                closure.env = Some(self.current_env);
                self.stack.push(CsNode::Lambda(closure));
            }

            // Rules 3, 4, 10, 11, 12, 13 dispatch on the applied value.
            CsNode::Gamma => self.apply()?,

            // Rule 5: leaving an environment. The marker popped from the
            // stack must be the one this control entry belongs to.
            CsNode::EnvMarker { id, restore } => {
                let value = self.pop()?;
                match self.pop()? {
                    CsNode::EnvMarker { id: found, .. } if found == id => {}
                    CsNode::EnvMarker { id: found, .. } => {
                        return Err(EvalError::EnvironmentMismatch {
                            expected: id,
                            found,
                        });
                    }
                    other => {
                        return Err(EvalError::MachineState(format!(
                            "expected an environment marker, found {}",
                            other.kind_name()
                        )));
                    }
                }
                self.stack.push(value);
                self.current_env = restore;
            }

            // Rule 6: the value popped first is the left operand.
            CsNode::Binop(op) => {
                let left = self.pop()?;
                let right = self.pop()?;
                let result = ops::binary(op, left, right)?;
                self.stack.push(result);
            }

            // Rule 7.
            op @ (CsNode::Not | CsNode::Neg) => {
                let operand = self.pop()?;
                let result = ops::unary(&op, operand)?;
                self.stack.push(result);
            }

            // Rule 8: pick a branch structure by the guard value.
            CsNode::Beta {
                then_delta,
                else_delta,
            } => match self.pop()? {
                CsNode::Truth(true) => self.expand(then_delta)?,
                CsNode::Truth(false) => self.expand(else_delta)?,
                other => {
                    return Err(EvalError::TypeMismatch(format!(
                        "conditional guard is a {}",
                        other.kind_name()
                    )));
                }
            },

            // Rule 9: operands were evaluated right to left, so popping
            // restores source order.
            CsNode::Tau { arity } => {
                let mut items = Vec::with_capacity(arity);
                for _ in 0..arity {
                    items.push(self.pop()?);
                }
                self.stack.push(CsNode::Tuple(items));
            }

            other => {
                return Err(EvalError::MachineState(format!(
                    "{} in the control stack",
                    other.kind_name()
                )));
            }
        }
        Ok(())
    }

    /// Apply whatever sits on top of the stack to the value below it.
    fn apply(&mut self) -> Result<()> {
        match self.pop()? {
            // Rule 3: builtins.
            CsNode::Identifier(name) => {
                let arg = self.pop()?;
                let result = builtins::apply(&name, arg, &mut self.output)?;
                self.stack.push(result);
            }

            // Second half of a curried Conc.
            CsNode::ConcPartial(first) => match self.pop()? {
                CsNode::Str(second) => self.stack.push(CsNode::Str(first + &second)),
                other => {
                    return Err(EvalError::TypeMismatch(format!(
                        "Conc applied to a {}",
                        other.kind_name()
                    )));
                }
            },

            // Rules 4 and 11: enter a new environment under the closure's
            // captured parent. The marker remembers the caller's
            // environment and reinstates it on exit.
            CsNode::Lambda(closure) => {
                let rand = self.pop()?;
                let (names, values) = bind(closure.params, rand)?;
                let parent = closure.env.ok_or_else(|| {
                    EvalError::MachineState("closure without a captured environment".into())
                })?;
                let id = self.envs.push(Some(parent), names, values);
                let marker = CsNode::EnvMarker {
                    id,
                    restore: self.current_env,
                };
                self.control.push(marker.clone());
                self.stack.push(marker);
                self.current_env = id;
                self.expand(closure.body)?;
            }

            // Rule 10: tuple selection, 1-based.
            CsNode::Tuple(items) => {
                let index = match self.pop()? {
                    CsNode::Integer(i) => i,
                    other => {
                        return Err(EvalError::TypeMismatch(format!(
                            "tuple selection index is a {}",
                            other.kind_name()
                        )));
                    }
                };
                let order = items.len();
                if index < 1 || index as usize > order {
                    return Err(EvalError::IndexOutOfRange { index, order });
                }
                self.stack.push(items[index as usize - 1].clone());
            }

            // Rule 12: Y* turns a closure into its recursive form.
            CsNode::YStar => match self.pop()? {
                CsNode::Lambda(closure) => self.stack.push(CsNode::Eta(closure)),
                other => {
                    return Err(EvalError::TypeMismatch(format!(
                        "Y applied to a {}",
                        other.kind_name()
                    )));
                }
            },

            // Rule 13: unroll one recursion step. Two gammas go back to
            // control; the eta stays beneath a fresh copy of its closure.
            CsNode::Eta(closure) => {
                self.control.push(CsNode::Gamma);
                self.control.push(CsNode::Gamma);
                self.stack.push(CsNode::Eta(closure.clone()));
                self.stack.push(CsNode::Lambda(closure));
            }

            other => {
                return Err(EvalError::NotAClosure(other.kind_name().to_string()));
            }
        }
        Ok(())
    }

    fn expand(&mut self, delta: usize) -> Result<()> {
        let body = self
            .deltas
            .get(delta)
            .ok_or_else(|| EvalError::MachineState(format!("missing control structure {delta}")))?
            .clone();
        self.control.extend(body);
        Ok(())
    }

    fn pop(&mut self) -> Result<CsNode> {
        self.stack
            .pop()
            .ok_or_else(|| EvalError::MachineState("operand stack underflow".into()))
    }
}

/// Pair parameter names with the applied value. A multi-name binding
/// takes its values from a tuple of matching order; a no-name binding
/// (`fn ()`) discards the argument.
fn bind(params: Vec<String>, rand: CsNode) -> Result<(Vec<String>, Vec<CsNode>)> {
    match params.len() {
        0 => Ok((params, Vec::new())),
        1 => Ok((params, vec![rand])),
        n => match rand {
            CsNode::Tuple(items) if items.len() == n => Ok((params, items)),
            CsNode::Tuple(items) => Err(EvalError::TypeMismatch(format!(
                "expected a {n}-tuple argument, got order {}",
                items.len()
            ))),
            other => Err(EvalError::TypeMismatch(format!(
                "expected a {n}-tuple argument, got a {}",
                other.kind_name()
            ))),
        },
    }
}
