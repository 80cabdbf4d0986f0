use crate::error::EvalError;
use crate::symtab::SymbolTable;
use crate::token::{RPNExpr, Token};
use log::trace;

enum Operand {
    Value(f64),
    Variable(String, Option<f64>),
}

/// Evaluate a postfix expression, writing assignments into `symbols`.
///
/// Variables are looked up when an operator consumes them, not when they
/// are pushed. A variable with no binding in `symbols` falls back to the
/// value it had when the expression was scanned.
pub fn eval(rpn: RPNExpr, symbols: &mut SymbolTable) -> Result<f64, EvalError> {
    let mut operands = Vec::new();

    for token in rpn.0 {
        trace!("eval {} (depth {})", token, operands.len());
        match token {
            Token::Operand(value) => operands.push(Operand::Value(value)),
            Token::Variable(name, value) => operands.push(Operand::Variable(name, value)),
            Token::Assignment => {
                if operands.len() < 2 {
                    return Err(EvalError::NotEnoughOperands("="));
                }
                let value = match operands.pop() {
                    Some(operand) => resolve(operand, symbols)?,
                    None => return Err(EvalError::NotEnoughOperands("=")),
                };
                match operands.pop() {
                    Some(Operand::Variable(name, _)) => {
                        trace!("assign {} = {}", name, value);
                        symbols.set(&name, value);
                        operands.push(Operand::Value(value));
                    }
                    _ => return Err(EvalError::AssignToNonVariable),
                }
            }
            Token::Operator(op) => {
                if operands.len() < op.arity {
                    return Err(EvalError::NotEnoughOperands(op.name));
                }
                let cut = operands.len() - op.arity;
                let table = &*symbols;
                let args = operands
                    .split_off(cut)
                    .into_iter()
                    .map(|arg| resolve(arg, table))
                    .collect::<Result<Vec<f64>, EvalError>>()?;
                operands.push(Operand::Value(op.apply(&args)));
            }
            Token::LeftParen => return Err(EvalError::MissingCParen),
        }
    }

    if operands.len() != 1 {
        return Err(EvalError::Unbalanced(operands.len()));
    }
    match operands.pop() {
        Some(result) => resolve(result, symbols),
        None => Err(EvalError::Unbalanced(0)),
    }
}

fn resolve(operand: Operand, symbols: &SymbolTable) -> Result<f64, EvalError> {
    match operand {
        Operand::Value(value) => Ok(value),
        Operand::Variable(name, snapshot) => symbols
            .get(&name)
            .or(snapshot)
            .ok_or(EvalError::UndefinedVariable(name)),
    }
}
