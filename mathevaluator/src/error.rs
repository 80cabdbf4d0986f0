use thiserror::Error;

/// Why an expression was rejected.
///
/// Callers of the public API only ever see [`crate::EvalResult::Malformed`];
/// the detail exists for logging and tests.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum EvalError {
    #[error("empty expression")]
    EmptyExpression,
    #[error("bad number literal {0:?}")]
    BadNumber(String),
    #[error("'.' outside a number")]
    StrayDelimiter,
    #[error("missing opening paren")]
    MissingOParen,
    #[error("missing closing paren")]
    MissingCParen,
    #[error("argument separator outside parens")]
    MisplacedSeparator,
    #[error("negation without an operand")]
    DanglingNegation,
    #[error("unknown identifier {0:?} is never assigned")]
    UnboundIdentifier(String),
    #[error("number inside an assignment target")]
    NumberInAssignmentTarget,
    #[error("not enough operands for {0:?}")]
    NotEnoughOperands(&'static str),
    #[error("assignment target is not a variable")]
    AssignToNonVariable,
    #[error("use of undefined variable {0:?}")]
    UndefinedVariable(String),
    #[error("expression left {0} values on the stack")]
    Unbalanced(usize),
}
