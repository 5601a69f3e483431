//! Runtime error types for the CSE machine.

use thiserror::Error;

/// Evaluation error raised while the CSE machine runs.
///
/// Everything here is a program fault or a machine invariant violation.
/// Syntax problems never reach this stage; they are rejected by the lexer
/// and parser.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// An operator or builtin was handed a value of the wrong type.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),
    /// An identifier with no binding in the environment chain.
    #[error("undefined variable: {0}")]
    UndefinedVariable(String),
    /// An environment marker on the stack did not pair up with the one
    /// popped from control.
    #[error("environment mismatch: expected env {expected}, found env {found}")]
    EnvironmentMismatch { expected: usize, found: usize },
    /// Reference to an environment frame that was never created.
    #[error("missing environment {0}")]
    MissingEnvironment(usize),
    /// Tuple selection outside the 1..order range.
    #[error("tuple index {index} out of range for order {order}")]
    IndexOutOfRange { index: i64, order: usize },
    /// `Order` applied to something that is not a tuple.
    #[error("not a tuple: {0}")]
    NotATuple(String),
    /// `gamma` whose operator position held a non-applicable value.
    #[error("cannot apply a non-function: {0}")]
    NotAClosure(String),
    #[error("division by zero")]
    DivisionByZero,
    /// `Stem` or `Stern` applied to the empty string.
    #[error("{0} applied to an empty string")]
    EmptyString(&'static str),
    /// The control or operand stack reached a shape no rule covers.
    #[error("machine state corrupted: {0}")]
    MachineState(String),
}

/// Result alias for machine operations.
pub type Result<T> = std::result::Result<T, EvalError>;
