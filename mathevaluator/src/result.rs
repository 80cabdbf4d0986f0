use crate::error::EvalError;
use std::fmt;

/// Significant digits used when a result is turned into text.
pub const DEFAULT_PRECISION: usize = 12;

/// Outcome of evaluating an expression: a number or a malformed signal.
///
/// Formatting honours a precision given as significant digits, so
/// `format!("{:.4}", r)` prints 4 of them. Without one it uses
/// [`DEFAULT_PRECISION`]. A malformed result prints as `Error`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EvalResult {
    Value(f64),
    Malformed,
}

impl EvalResult {
    pub fn is_error(&self) -> bool {
        matches!(self, EvalResult::Malformed)
    }

    pub fn value(&self) -> Option<f64> {
        match *self {
            EvalResult::Value(value) => Some(value),
            EvalResult::Malformed => None,
        }
    }

    /// The value, or 0 for a malformed result.
    pub fn get(&self) -> f64 {
        self.value().unwrap_or(0.0)
    }

    pub fn to_string_with(&self, precision: usize) -> String {
        match *self {
            EvalResult::Value(value) => format_general(value, precision),
            EvalResult::Malformed => "Error".to_string(),
        }
    }
}

impl From<Result<f64, EvalError>> for EvalResult {
    fn from(result: Result<f64, EvalError>) -> Self {
        match result {
            Ok(value) => EvalResult::Value(value),
            Err(_) => EvalResult::Malformed,
        }
    }
}

impl fmt::Display for EvalResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        f.write_str(&self.to_string_with(precision))
    }
}

/// Format like printf's `%g`: `precision` significant digits, trailing
/// zeros dropped, scientific notation for exponents below -4 or at least
/// `precision`. The decimal point is always '.'.
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let precision = precision.max(1);
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // the exponent must be taken after rounding to `precision` digits
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => return scientific,
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
