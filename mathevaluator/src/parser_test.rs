use crate::error::EvalError;
use crate::parser::ShuntingParser;
use crate::symtab::SymbolTable;
use crate::token::Token;

fn postfix(expr: &str) -> String {
    ShuntingParser::parse_str(expr, &SymbolTable::new())
        .unwrap()
        .to_string()
}

fn parse_err(expr: &str) -> EvalError {
    ShuntingParser::parse_str(expr, &SymbolTable::new()).unwrap_err()
}

#[test]
fn precedence() {
    assert_eq!(postfix("2 + 3 * 4"), "2 3 4 * +");
    assert_eq!(postfix("3 + 4 * 2 / (1 - 5) ^ 2 ^ 3"), "3 4 2 * 1 5 - 2 3 ^ ^ / +");
    assert_eq!(postfix("10 - 3 - 2"), "10 3 - 2 -");
    assert_eq!(postfix("7 mod 3 % 2"), "7 3 mod 2 %");
    assert_eq!(postfix("1 + 6 & 3"), "1 6 + 3 &");
    assert_eq!(postfix("1 << 2 xor 3"), "1 2 << 3 xor");
}

#[test]
fn functions() {
    assert_eq!(postfix("sqrt(4) + 1"), "4 sqrt 1 +");
    assert_eq!(postfix("2 ^ sqrt(4)"), "2 4 sqrt ^");
    assert_eq!(postfix("max(1 + 2, 3)"), "1 2 + 3 max");
    assert_eq!(postfix("log(2, 8) * 2"), "2 8 log 2 *");
    assert_eq!(postfix("min(max(1, 2), 3)"), "1 2 max 3 min");
    // digits end an identifier run: log2 reads as log with a first operand 2
    assert_eq!(postfix("log2(8)"), "2 8 log");
}

#[test]
fn negation() {
    assert_eq!(postfix("-2"), "2 neg");
    assert_eq!(postfix("2 - -3"), "2 3 neg -");
    assert_eq!(postfix("2 ^ -3"), "2 3 neg ^");
    assert_eq!(postfix("-2 ^ 2"), "2 neg 2 ^");
    assert_eq!(postfix("-(2 + 3)"), "2 3 + neg");
    assert_eq!(postfix("-((2))"), "2 neg");
    assert_eq!(postfix("-(-(2))"), "2 neg neg");
    assert_eq!(postfix("2 * -(3 + 1)"), "2 3 1 + neg *");
    assert_eq!(postfix("-(2 * -(3))"), "2 3 neg * neg");
    assert_eq!(postfix("max(-1, -2)"), "1 neg 2 neg max");
    assert_eq!(postfix("(-2)"), "2 neg");
}

#[test]
fn negated_function_call() {
    assert_eq!(postfix("-sqrt(4)"), "4 sqrt neg");
    assert_eq!(postfix("-sin(0)"), "0 sin neg");
    assert_eq!(postfix("-(sin(0))"), "0 sin neg");
    assert_eq!(postfix("-max(1, 2) + 1"), "1 2 max neg 1 +");
    assert_eq!(postfix("3 - sqrt(4)"), "3 4 sqrt -");
}

#[test]
fn assignment() {
    assert_eq!(postfix("x = 3"), "x 3 =");
    assert_eq!(postfix("x=3"), "x 3 =");
    assert_eq!(postfix("x = 2 + 3"), "x 2 3 + =");
    assert_eq!(postfix("x = 1 | 2"), "x 1 2 | =");
    assert_eq!(postfix("x = y = -4"), "x y 4 neg = =");
    assert_eq!(postfix("(x = 5) * 2"), "x 5 = 2 *");
    // the minus in front of a target applies to the assigned value
    assert_eq!(postfix("-x = 3"), "x 3 neg =");
    assert_eq!(postfix("-x = 2 + 1"), "x 2 neg 1 + =");
}

#[test]
fn identifier_resolution() {
    let mut symbols = SymbolTable::new();
    symbols.set("x", 2.0);
    symbols.set("pi", 3.0);
    let rpn = ShuntingParser::parse_str("x * pi - e", &symbols).unwrap();
    let expect = [
        Token::Variable("x".to_string(), Some(2.0)),
        Token::Operand(std::f64::consts::PI),
        Token::Operator(crate::find_operator("*").unwrap()),
        Token::Operand(std::f64::consts::E),
        Token::Operator(crate::find_operator("-").unwrap()),
    ];
    assert_eq!(rpn.len(), expect.len());
    for (i, token) in expect.iter().enumerate() {
        assert_eq!(rpn[i], *token);
    }

    let rpn = ShuntingParser::parse_str("y = x", &symbols).unwrap();
    assert_eq!(rpn[0], Token::Variable("y".to_string(), None));
    assert_eq!(rpn[2], Token::Assignment);
}

#[test]
fn malformed() {
    assert_eq!(parse_err("(1 + 2"), EvalError::MissingCParen);
    assert_eq!(parse_err("1 + 2)"), EvalError::MissingOParen);
    assert_eq!(parse_err("sqrt(-(1 - 2) / (1 + 2)"), EvalError::MissingCParen);
    assert_eq!(parse_err("1.2.3"), EvalError::BadNumber("1.2".to_string()));
    assert_eq!(parse_err("1..2"), EvalError::BadNumber("1.".to_string()));
    assert_eq!(parse_err(".5"), EvalError::StrayDelimiter);
    assert_eq!(parse_err("y + z"), EvalError::UnboundIdentifier("z".to_string()));
    assert_eq!(parse_err("y"), EvalError::UnboundIdentifier("y".to_string()));
    assert_eq!(parse_err("y + 1"), EvalError::NumberInAssignmentTarget);
    assert_eq!(parse_err("x1 = 2"), EvalError::NumberInAssignmentTarget);
    assert_eq!(parse_err("-"), EvalError::DanglingNegation);
    assert_eq!(parse_err("2 * (-)"), EvalError::DanglingNegation);
    // each atom or group settles a single negation
    assert_eq!(parse_err("--2"), EvalError::DanglingNegation);
    assert_eq!(parse_err("- -(2)"), EvalError::DanglingNegation);
    assert_eq!(parse_err("- -sqrt(4)"), EvalError::DanglingNegation);
    assert_eq!(parse_err("1, 2"), EvalError::MisplacedSeparator);
}

#[test]
fn accepted_but_unevaluable() {
    // these tokenize fine and are rejected by the evaluator
    assert_eq!(postfix("2 3"), "2 3");
    assert_eq!(postfix("3 = 4"), "3 4 =");
    assert_eq!(postfix("* 2"), "2 *");
    assert_eq!(postfix("1."), "1");
}
