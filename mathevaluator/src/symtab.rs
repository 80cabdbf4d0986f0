//! Session variables.
//!
//! A [`SymbolTable`] is an ordered list of `(name, value)` pairs. Order is
//! insertion order and carries no meaning; lookups return the first match.

/// Mutable variable store owned by a single session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SymbolTable {
    vars: Vec<(String, f64)>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable { vars: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.vars
            .iter()
            .find(|(var, _)| var == name)
            .map(|&(_, value)| value)
    }

    /// Append a binding without checking for an existing one.
    pub fn push(&mut self, name: impl Into<String>, value: f64) {
        self.vars.push((name.into(), value));
    }

    /// Update every binding of `name` in place, or append a new one.
    pub fn set(&mut self, name: &str, value: f64) {
        let mut found = false;
        for (_, slot) in self.vars.iter_mut().filter(|(var, _)| var == name) {
            *slot = value;
            found = true;
        }
        if !found {
            self.vars.push((name.to_string(), value));
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.vars.iter().map(|(name, value)| (name.as_str(), *value))
    }
}
