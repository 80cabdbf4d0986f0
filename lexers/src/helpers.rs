#![deny(warnings)]

use crate::scanner::Scanner;

/// Operator symbols that always stand alone as a one-char lexeme.
pub static OPERATOR_CHARS: &[char] = &['+', '-', '*', '/', '^', '%'];

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Fractional delimiter. Always '.', regardless of locale.
pub fn is_delimiter(c: char) -> bool {
    c == '.'
}

pub fn is_separator(c: char) -> bool {
    c == ','
}

/// Characters that make up identifier-like runs: names, word operators
/// (`mod`, `xor`) and symbol operators (`&`, `<<`).
pub fn is_arbitrary(c: char) -> bool {
    !is_digit(c)
        && !is_delimiter(c)
        && !is_separator(c)
        && !c.is_whitespace()
        && !OPERATOR_CHARS.contains(&c)
        && !matches!(c, '(' | ')' | '=')
}

impl<I: Iterator<Item = char>> Scanner<I> {
    // scan decimals like [0-9]+(\.[0-9]*)?
    // A trailing '.' is left for the caller to judge.
    pub fn scan_decimal(&mut self) -> Option<String> {
        if !self.skip_while(is_digit) {
            return None;
        }
        if self.accept_if(is_delimiter).is_some() {
            self.skip_while(is_digit);
        }
        Some(self.extract_string())
    }

    // scan a single operator char or a maximal run of arbitrary chars
    pub fn scan_symbol(&mut self) -> Option<String> {
        if self.accept_any(OPERATOR_CHARS).is_some() || self.skip_while(is_arbitrary) {
            return Some(self.extract_string());
        }
        None
    }
}

///////////////////////////////////////////////////////////////////////////////
