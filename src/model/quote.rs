use super::Symbol;
use serde_json::Value;
use std::fmt;

/// Exchange rate payload as returned by the provider, kept uninterpreted.
#[derive(Debug, PartialEq)]
pub struct Quote {
    pub symbol: Symbol,
    pub payload: Value,
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} data: {}", self.symbol, self.payload)
    }
}
