//! Evaluates arithmetic expressions written in infix notation.
//!
//! Expressions support the usual operator precedence, unary minus,
//! function-style operators (`sqrt(2)`, `max(a, b)`), bitwise operators,
//! the constants `pi`, `e` and `phi`, and variables that persist in a
//! [`Session`] across evaluations.
//!
//! ```
//! use mathevaluator::{evaluate, Session};
//!
//! assert_eq!(evaluate("2 + 3 * 4", None).value(), Some(14.0));
//! assert!(evaluate("(1 + 2", None).is_error());
//!
//! let mut s = Session::new();
//! s.evaluate("x = 3");
//! assert_eq!(s.evaluate("x + 1").value(), Some(4.0));
//! ```

pub use constants::{find_constant, CONSTANTS};
pub use error::EvalError;
pub use operators::{find_operator, Assoc, Operator, NEGATION, OPERATORS};
pub use parser::ShuntingParser;
pub use result::{format_general, EvalResult, DEFAULT_PRECISION};
pub use session::Session;
pub use symtab::SymbolTable;
pub use token::{RPNExpr, Token};

mod constants;
mod error;
pub mod ffi;
pub mod operators;
mod parser;
#[cfg(test)]
mod parser_test;
mod result;
pub mod rpneval;
mod session;
mod symtab;
mod token;

use log::debug;

/// Evaluate `expr`, reading and assigning variables in `symbols`.
///
/// Without a symbol table the expression runs against an empty scratch
/// table: assignments still produce their value but are then dropped.
pub fn evaluate(expr: &str, symbols: Option<&mut SymbolTable>) -> EvalResult {
    try_evaluate(expr, symbols).into()
}

/// Like [`evaluate`] but reports why an expression was malformed.
pub fn try_evaluate(expr: &str, symbols: Option<&mut SymbolTable>) -> Result<f64, EvalError> {
    let mut scratch = SymbolTable::new();
    let symbols = symbols.unwrap_or(&mut scratch);
    let result = parse_and_eval(expr, symbols);
    if let Err(ref e) = result {
        debug!("malformed {:?}: {}", expr, e);
    }
    result
}

fn parse_and_eval(expr: &str, symbols: &mut SymbolTable) -> Result<f64, EvalError> {
    if expr.is_empty() {
        return Err(EvalError::EmptyExpression);
    }
    let rpn = ShuntingParser::parse_str(expr, symbols)?;
    rpneval::eval(rpn, symbols)
}
