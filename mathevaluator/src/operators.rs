//! The operator registry.
//!
//! Every operator the tokenizer can match by name lives in [`OPERATORS`].
//! Unary negation is not in the table: the tokenizer injects
//! [`NEGATION`] structurally when a `-` appears where an operand is expected.

use rand::Rng;
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Assoc {
    Left,
    Right,
}

// Below the bitwise family so `x = a | b` assigns the whole right side.
pub const ASSIGNMENT_PRECEDENCE: u8 = 0;
pub const BITWISE_PRECEDENCE: u8 = 1;
pub const ADDITIVE_PRECEDENCE: u8 = 2;
pub const MULTIPLICATIVE_PRECEDENCE: u8 = 3;
pub const POWER_PRECEDENCE: u8 = 4;
pub const FUNCTION_PRECEDENCE: u8 = 5;

/// A named operator applied to exactly `arity` operands.
///
/// The function receives its operands in the order they were written,
/// so `a - b` gets `[a, b]`.
#[derive(Clone, Copy)]
pub struct Operator {
    pub name: &'static str,
    pub arity: usize,
    pub precedence: u8,
    pub assoc: Assoc,
    func: fn(&[f64]) -> f64,
}

impl Operator {
    const fn binary(name: &'static str, precedence: u8, assoc: Assoc, func: fn(&[f64]) -> f64) -> Self {
        Operator { name, arity: 2, precedence, assoc, func }
    }

    const fn function(name: &'static str, arity: usize, func: fn(&[f64]) -> f64) -> Self {
        Operator { name, arity, precedence: FUNCTION_PRECEDENCE, assoc: Assoc::Left, func }
    }

    pub fn is_function(&self) -> bool {
        self.precedence == FUNCTION_PRECEDENCE
    }

    /// Callers guarantee `args.len() == self.arity`.
    pub fn apply(&self, args: &[f64]) -> f64 {
        (self.func)(args)
    }
}

// Names are unique across the table plus NEGATION, so they identify operators.
impl PartialEq for Operator {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.arity == other.arity
    }
}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Operator({}/{})", self.name, self.arity)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

pub static NEGATION: Operator = Operator::function("neg", 1, |a| -a[0]);

pub static OPERATORS: &[Operator] = &[
    // arithmetic
    Operator::binary("+", ADDITIVE_PRECEDENCE, Assoc::Left, |a| a[0] + a[1]),
    Operator::binary("-", ADDITIVE_PRECEDENCE, Assoc::Left, |a| a[0] - a[1]),
    Operator::binary("*", MULTIPLICATIVE_PRECEDENCE, Assoc::Left, |a| a[0] * a[1]),
    Operator::binary("/", MULTIPLICATIVE_PRECEDENCE, Assoc::Left, |a| a[0] / a[1]),
    Operator::binary("^", POWER_PRECEDENCE, Assoc::Right, |a| a[0].powf(a[1])),
    Operator::binary("%", MULTIPLICATIVE_PRECEDENCE, Assoc::Left, |a| a[0] % a[1]),
    Operator::binary("mod", MULTIPLICATIVE_PRECEDENCE, Assoc::Left, |a| a[0] % a[1]),
    // bitwise
    Operator::binary("&", BITWISE_PRECEDENCE, Assoc::Left, |a| bitwise(a, |x, y| x & y)),
    Operator::binary("and", BITWISE_PRECEDENCE, Assoc::Left, |a| bitwise(a, |x, y| x & y)),
    Operator::binary("|", BITWISE_PRECEDENCE, Assoc::Left, |a| bitwise(a, |x, y| x | y)),
    Operator::binary("or", BITWISE_PRECEDENCE, Assoc::Left, |a| bitwise(a, |x, y| x | y)),
    Operator::binary("xor", BITWISE_PRECEDENCE, Assoc::Left, |a| bitwise(a, |x, y| x ^ y)),
    Operator::binary("<<", BITWISE_PRECEDENCE, Assoc::Left, |a| bitwise(a, shift_left)),
    Operator::binary(">>", BITWISE_PRECEDENCE, Assoc::Left, |a| bitwise(a, shift_right)),
    // powers and logarithms
    Operator::function("pow", 2, |a| a[0].powf(a[1])),
    Operator::function("sqrt", 1, |a| a[0].sqrt()),
    Operator::function("exp", 1, |a| a[0].exp()),
    Operator::function("ln", 1, |a| a[0].ln()),
    Operator::function("lg", 1, |a| a[0].log10()),
    Operator::function("log2", 1, |a| a[0].log2()),
    Operator::function("log", 2, |a| a[1].ln() / a[0].ln()),
    // trigonometry
    Operator::function("sin", 1, |a| a[0].sin()),
    Operator::function("cos", 1, |a| a[0].cos()),
    Operator::function("tan", 1, |a| a[0].tan()),
    Operator::function("asin", 1, |a| a[0].asin()),
    Operator::function("acos", 1, |a| a[0].acos()),
    Operator::function("atan", 1, |a| a[0].atan()),
    // number functions
    Operator::function("max", 2, |a| if a[0] > a[1] { a[0] } else { a[1] }),
    Operator::function("min", 2, |a| if a[0] < a[1] { a[0] } else { a[1] }),
    Operator::function("abs", 1, |a| a[0].abs()),
    Operator::function("round", 1, |a| a[0].round()),
    Operator::function("ceil", 1, |a| a[0].ceil()),
    Operator::function("floor", 1, |a| a[0].floor()),
    Operator::function("rand", 2, |a| random_int(a[0], a[1])),
    Operator::function("randf", 2, |a| random_float(a[0], a[1])),
];

pub fn find_operator(name: &str) -> Option<&'static Operator> {
    OPERATORS.iter().find(|op| op.name == name)
}

// Integer-only operators yield 0 unless both operands are integral.
fn bitwise(args: &[f64], op: fn(i64, i64) -> i64) -> f64 {
    let (lhs, rhs) = (args[0], args[1]);
    if lhs.floor() != lhs || rhs.floor() != rhs {
        return 0.0;
    }
    op(lhs as i64, rhs as i64) as f64
}

fn shift_left(x: i64, by: i64) -> i64 {
    u32::try_from(by).ok().and_then(|by| x.checked_shl(by)).unwrap_or(0)
}

fn shift_right(x: i64, by: i64) -> i64 {
    u32::try_from(by).ok().and_then(|by| x.checked_shr(by)).unwrap_or(0)
}

// Bounds that are reversed, NaN or too wide for a uniform draw yield 0.
fn usable_bounds(lo: f64, hi: f64) -> bool {
    lo <= hi && (hi - lo).is_finite()
}

fn random_int(lo: f64, hi: f64) -> f64 {
    if !usable_bounds(lo, hi) {
        return 0.0;
    }
    rand::thread_rng().gen_range(lo as i64..=hi as i64) as f64
}

fn random_float(lo: f64, hi: f64) -> f64 {
    if !usable_bounds(lo, hi) {
        return 0.0;
    }
    rand::thread_rng().gen_range(lo..=hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(name: &str, args: &[f64]) -> f64 {
        let op = find_operator(name).unwrap();
        assert_eq!(op.arity, args.len());
        op.apply(args)
    }

    #[test]
    fn registry_lookup() {
        let plus = find_operator("+").unwrap();
        assert_eq!((plus.arity, plus.precedence, plus.assoc), (2, ADDITIVE_PRECEDENCE, Assoc::Left));
        let pow = find_operator("^").unwrap();
        assert_eq!(pow.assoc, Assoc::Right);
        assert!(find_operator("sqrt").unwrap().is_function());
        assert!(!find_operator("xor").unwrap().is_function());
        assert!(find_operator("neg").is_none());
        assert!(find_operator("=").is_none());
        assert!(find_operator("(").is_none());
        assert!(find_operator("si").is_none());
    }

    #[test]
    fn names_are_unique() {
        for (i, op) in OPERATORS.iter().enumerate() {
            assert!(OPERATORS[i + 1..].iter().all(|other| other.name != op.name));
            assert_ne!(op.name, NEGATION.name);
        }
    }

    #[test]
    fn operand_order() {
        assert_eq!(call("-", &[10.0, 3.0]), 7.0);
        assert_eq!(call("/", &[1.0, 4.0]), 0.25);
        assert_eq!(call("^", &[2.0, 10.0]), 1024.0);
        assert_eq!(call("%", &[7.0, 3.0]), 1.0);
        assert_eq!(call("log", &[2.0, 8.0]), 3.0);
        assert_eq!(call("<<", &[1.0, 4.0]), 16.0);
        assert_eq!(call(">>", &[256.0, 4.0]), 16.0);
    }

    #[test]
    fn bitwise_requires_integers() {
        assert_eq!(call("&", &[6.0, 3.0]), 2.0);
        assert_eq!(call("or", &[6.0, 3.0]), 7.0);
        assert_eq!(call("xor", &[6.0, 3.0]), 5.0);
        assert_eq!(call("and", &[6.5, 3.0]), 0.0);
        assert_eq!(call("|", &[f64::NAN, 3.0]), 0.0);
        assert_eq!(call("<<", &[1.0, -1.0]), 0.0);
        assert_eq!(call("<<", &[1.0, 64.0]), 0.0);
    }

    #[test]
    fn min_max() {
        assert_eq!(call("max", &[1.0, 2.0]), 2.0);
        assert_eq!(call("min", &[1.0, 2.0]), 1.0);
        assert_eq!(call("max", &[-1.0, -2.0]), -1.0);
    }

    #[test]
    fn random_bounds() {
        assert_eq!(call("rand", &[5.0, 5.0]), 5.0);
        assert_eq!(call("rand", &[10.0, 1.0]), 0.0);
        assert_eq!(call("randf", &[2.0, 1.0]), 0.0);
        assert_eq!(call("randf", &[f64::NAN, 1.0]), 0.0);
        assert_eq!(call("randf", &[-f64::MAX, f64::MAX]), 0.0);
        for _ in 0..100 {
            let n = call("rand", &[1.0, 6.0]);
            assert!((1.0..=6.0).contains(&n) && n.floor() == n);
            let x = call("randf", &[-0.5, 0.5]);
            assert!((-0.5..=0.5).contains(&x));
        }
    }

    #[test]
    fn negation() {
        assert_eq!(NEGATION.apply(&[2.0]), -2.0);
        assert!(NEGATION.is_function());
    }
}
