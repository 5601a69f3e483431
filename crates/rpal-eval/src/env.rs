//! Environment tree for the CSE machine.
//!
//! Environments form a tree rooted at the primitive environment 0. A
//! frame is never removed; exiting an environment only changes which
//! frame is current, so closures created inside it stay valid.

use crate::error::{EvalError, Result};
use crate::node::CsNode;

#[derive(Debug)]
struct EnvFrame {
    parent: Option<usize>,
    names: Vec<String>,
    values: Vec<CsNode>,
}

/// Arena of environment frames, indexed by creation order.
#[derive(Debug, Default)]
pub struct EnvironmentTree {
    frames: Vec<EnvFrame>,
}

impl EnvironmentTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a frame and return its id. Ids are dense and start at 0.
    pub fn push(
        &mut self,
        parent: Option<usize>,
        names: Vec<String>,
        values: Vec<CsNode>,
    ) -> usize {
        debug_assert_eq!(names.len(), values.len());
        self.frames.push(EnvFrame {
            parent,
            names,
            values,
        });
        self.frames.len() - 1
    }

    /// Resolve `name` starting from frame `env` and walking toward the
    /// root. Reaching the root without a hit is an undefined variable.
    pub fn lookup(&self, env: usize, name: &str) -> Result<&CsNode> {
        let mut current = Some(env);
        while let Some(id) = current {
            let frame = self
                .frames
                .get(id)
                .ok_or(EvalError::MissingEnvironment(id))?;
            if let Some(pos) = frame.names.iter().position(|n| n == name) {
                return Ok(&frame.values[pos]);
            }
            current = frame.parent;
        }
        Err(EvalError::UndefinedVariable(name.to_string()))
    }
}
