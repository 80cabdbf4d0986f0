use crate::operators::{Assoc, Operator, ASSIGNMENT_PRECEDENCE};
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Operand(f64),
    /// A name with the value it had in the symbol table when scanned, if any.
    Variable(String, Option<f64>),
    Operator(&'static Operator),
    Assignment,
    /// Only ever lives on the operator stack.
    LeftParen,
}

impl Token {
    pub fn precedence(&self) -> (u8, Assoc) {
        match *self {
            Token::Operator(op) => (op.precedence, op.assoc),
            Token::Assignment => (ASSIGNMENT_PRECEDENCE, Assoc::Right),
            // never compared: operator flushing stops at parens
            _ => (0, Assoc::Left),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Operand(value) => write!(f, "{}", value),
            Token::Variable(name, _) => write!(f, "{}", name),
            Token::Operator(op) => write!(f, "{}", op),
            Token::Assignment => write!(f, "="),
            Token::LeftParen => write!(f, "("),
        }
    }
}

/// An expression in postfix order, as produced by the shunting-yard pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RPNExpr(pub Vec<Token>);

impl std::ops::Deref for RPNExpr {
    type Target = [Token];
    fn deref(&self) -> &[Token] {
        &self.0
    }
}

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut tokens = self.0.iter();
        if let Some(first) = tokens.next() {
            write!(f, "{}", first)?;
        }
        for token in tokens {
            write!(f, " {}", token)?;
        }
        Ok(())
    }
}
