use crate::error::EvalError;
use crate::result::EvalResult;
use crate::symtab::SymbolTable;

/// An evaluator instance with its own variables.
///
/// Assignments made by one expression are visible to the next one
/// evaluated on the same session.
///
/// ```
/// use mathevaluator::Session;
///
/// let mut s = Session::new();
/// s.add_variable("r", 2.0);
/// assert_eq!(s.evaluate("area = pi * r ^ 2").to_string(), "12.5663706144");
/// assert_eq!(s.evaluate("area / pi").value(), Some(4.0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Session {
    symbols: SymbolTable,
}

impl Session {
    pub fn new() -> Self {
        Session {
            symbols: SymbolTable::new(),
        }
    }

    pub fn with_symbols(symbols: SymbolTable) -> Self {
        Session { symbols }
    }

    /// Seed a variable. Does not replace an existing binding of `name`.
    pub fn add_variable(&mut self, name: impl Into<String>, value: impl Into<f64>) {
        self.symbols.push(name, value.into());
    }

    pub fn evaluate(&mut self, expr: &str) -> EvalResult {
        crate::evaluate(expr, Some(&mut self.symbols))
    }

    pub fn try_evaluate(&mut self, expr: &str) -> Result<f64, EvalError> {
        crate::try_evaluate(expr, Some(&mut self.symbols))
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.symbols.get(name)
    }

    pub fn variables(&self) -> impl Iterator<Item = (&str, f64)> {
        self.symbols.iter()
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }
}
