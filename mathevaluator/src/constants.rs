use std::f64::consts;

/// Named constants, matched before session variables so they cannot be
/// shadowed.
pub static CONSTANTS: &[(&str, f64)] = &[
    ("pi", consts::PI),
    ("e", consts::E),
    // golden ratio
    ("phi", 1.618_033_988_749_895),
];

pub fn find_constant(name: &str) -> Option<f64> {
    CONSTANTS
        .iter()
        .find(|(constant, _)| *constant == name)
        .map(|&(_, value)| value)
}
