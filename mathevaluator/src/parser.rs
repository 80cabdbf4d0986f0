use crate::constants::find_constant;
use crate::error::EvalError;
use crate::operators::{find_operator, Assoc, NEGATION};
use crate::symtab::SymbolTable;
use crate::token::{RPNExpr, Token};
use lexers::{is_delimiter, is_digit, is_separator, Scanner};
use log::{debug, trace};

/// Tokenizes an infix expression and rewrites it in postfix order in a
/// single left to right pass.
///
/// Identifiers are resolved while scanning, in this order: operator names,
/// constants, variables already in `symbols`. Anything else becomes an
/// unbound variable that is only valid as the target of a following `=`.
pub struct ShuntingParser<'a, I: Iterator<Item = char>> {
    src: Scanner<I>,
    symbols: &'a SymbolTable,
    out: Vec<Token>,
    stack: Vec<Token>,
    // One counter per pending unary minus. A counter of 1 binds to the next
    // atom; each '(' seen while pending adds one, so a counter reaching 2 at
    // a ')' means the whole group just closed is the operand.
    negations: Vec<usize>,
    // true where an operand is expected: a '-' here is a negation
    last_operator: bool,
    // unknown identifier still waiting for its '='
    assigning: Option<String>,
}

impl<'a> ShuntingParser<'a, std::str::Chars<'a>> {
    pub fn parse_str(expr: &'a str, symbols: &'a SymbolTable) -> Result<RPNExpr, EvalError> {
        ShuntingParser::new(expr.chars(), symbols).parse()
    }
}

impl<'a, I: Iterator<Item = char>> ShuntingParser<'a, I> {
    pub fn new(source: I, symbols: &'a SymbolTable) -> Self {
        ShuntingParser {
            src: Scanner::new(source),
            symbols,
            out: Vec::new(),
            stack: Vec::new(),
            negations: Vec::new(),
            last_operator: true,
            assigning: None,
        }
    }

    pub fn parse(mut self) -> Result<RPNExpr, EvalError> {
        while let Some(c) = self.src.peek() {
            match c {
                c if c.is_whitespace() => {
                    self.src.skip_whitespace();
                }
                c if is_digit(c) => self.number()?,
                c if is_delimiter(c) => return Err(EvalError::StrayDelimiter),
                c if is_separator(c) => {
                    self.consume();
                    self.separator()?;
                }
                '=' => {
                    self.consume();
                    self.assigning = None;
                    self.push_operator(Token::Assignment);
                }
                '(' => {
                    self.consume();
                    self.open_paren();
                }
                ')' => {
                    self.consume();
                    self.close_paren()?;
                }
                '-' if self.last_operator => {
                    self.consume();
                    self.negations.push(1);
                }
                c => self.symbol(c)?,
            }
        }
        self.finish()
    }

    fn consume(&mut self) {
        self.src.next();
        self.src.ignore();
    }

    fn emit(&mut self, token: Token) {
        trace!("{:>4}: emit {}", self.src.offset(), token);
        self.out.push(token);
    }

    // operands, constants and variables
    fn emit_atom(&mut self, token: Token) {
        self.emit(token);
        self.last_operator = false;
        self.resolve_negations();
    }

    // one atom settles one pending negation, so `--2` is left dangling
    fn resolve_negations(&mut self) {
        if self.negations.last() == Some(&1) {
            self.negations.pop();
            self.emit(Token::Operator(&NEGATION));
        }
    }

    fn pop_to_output(&mut self) {
        if let Some(token) = self.stack.pop() {
            self.emit(token);
        }
    }

    fn push_operator(&mut self, token: Token) {
        let (prec_rhs, assoc_rhs) = token.precedence();
        while let Some(top) = self.stack.last() {
            if *top == Token::LeftParen {
                break;
            }
            let (prec_lhs, _) = top.precedence();
            if prec_lhs < prec_rhs {
                break;
            } else if prec_lhs > prec_rhs {
                self.pop_to_output();
            } else {
                match assoc_rhs {
                    Assoc::Left => self.pop_to_output(),
                    Assoc::Right => break,
                }
            }
        }
        self.stack.push(token);
        self.last_operator = true;
    }

    // pop operators until the innermost '(' is on top of the stack
    fn flush_group(&mut self) -> Result<(), EvalError> {
        loop {
            match self.stack.last() {
                None => return Err(EvalError::MissingOParen),
                Some(Token::LeftParen) => return Ok(()),
                Some(_) => self.pop_to_output(),
            }
        }
    }

    fn number(&mut self) -> Result<(), EvalError> {
        if self.assigning.is_some() {
            return Err(EvalError::NumberInAssignmentTarget);
        }
        let lexeme = self.src.scan_decimal().unwrap_or_default();
        if self.src.peek().map_or(false, is_delimiter) {
            return Err(EvalError::BadNumber(lexeme));
        }
        let value = lexeme
            .parse::<f64>()
            .map_err(|_| EvalError::BadNumber(lexeme.clone()))?;
        self.emit_atom(Token::Operand(value));
        Ok(())
    }

    // A ',' completes the argument before it by flushing pending operators
    // back to the enclosing '(', so `max(1 + 2, 3)` is 3. A bare delimiter
    // that only reset `last_operator` would read it as `max(1, 2 + 3)`.
    fn separator(&mut self) -> Result<(), EvalError> {
        self.flush_group()
            .map_err(|_| EvalError::MisplacedSeparator)?;
        self.last_operator = true;
        Ok(())
    }

    fn open_paren(&mut self) {
        self.stack.push(Token::LeftParen);
        if let Some(depth) = self.negations.last_mut() {
            *depth += 1;
        }
        self.last_operator = true;
    }

    fn close_paren(&mut self) -> Result<(), EvalError> {
        self.flush_group()?;
        self.stack.pop();
        match self.negations.last().copied() {
            Some(2) => {
                self.negations.pop();
                // keep a function applied to this group inside the negation,
                // so -f(x) is -(f(x)) rather than f(-x)
                let trailing_function = matches!(
                    self.stack.last(),
                    Some(Token::Operator(op)) if op.is_function()
                );
                if trailing_function {
                    self.pop_to_output();
                }
                self.emit(Token::Operator(&NEGATION));
            }
            Some(1) => return Err(EvalError::DanglingNegation),
            Some(_) => {
                if let Some(depth) = self.negations.last_mut() {
                    *depth -= 1;
                }
            }
            None => (),
        }
        self.last_operator = false;
        Ok(())
    }

    fn symbol(&mut self, first: char) -> Result<(), EvalError> {
        let name = match self.src.scan_symbol() {
            Some(name) => name,
            None => {
                self.consume();
                return Err(EvalError::UnboundIdentifier(first.to_string()));
            }
        };
        if let Some(op) = find_operator(&name) {
            self.push_operator(Token::Operator(op));
        } else if let Some(value) = find_constant(&name) {
            self.emit_atom(Token::Operand(value));
        } else if let Some(value) = self.symbols.get(&name) {
            self.emit_atom(Token::Variable(name, Some(value)));
        } else {
            // an assignment target: a pending negation waits for the value,
            // so `-x = 3` stores -3
            self.assigning = Some(name.clone());
            self.emit(Token::Variable(name, None));
        }
        Ok(())
    }

    fn finish(mut self) -> Result<RPNExpr, EvalError> {
        if let Some(name) = self.assigning.take() {
            return Err(EvalError::UnboundIdentifier(name));
        }
        while let Some(token) = self.stack.pop() {
            if token == Token::LeftParen {
                return Err(EvalError::MissingCParen);
            }
            self.emit(token);
        }
        if !self.negations.is_empty() {
            return Err(EvalError::DanglingNegation);
        }
        let rpn = RPNExpr(self.out);
        debug!("postfix: {}", rpn);
        Ok(rpn)
    }
}
