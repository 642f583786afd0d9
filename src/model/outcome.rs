use super::{Quote, Symbol};
use std::fmt;

/// Non-200 answer from the provider.
#[derive(Debug, PartialEq)]
pub struct Rejection {
    pub symbol: Symbol,
    pub status: u16,
    pub body: String,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error for {}: {} - {}",
            self.symbol, self.status, self.body
        )
    }
}

#[derive(Debug)]
pub enum Outcome {
    Quoted(Quote),
    Rejected(Rejection),
    /// No usable response: transport failure or a 200 body that isn't JSON.
    Failed {
        symbol: Symbol,
        error: anyhow::Error,
    },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Quoted(quote) => quote.fmt(f),
            Outcome::Rejected(rejection) => rejection.fmt(f),
            Outcome::Failed { symbol, error } => {
                write!(f, "Error for {}: request failed - {:#}", symbol, error)
            }
        }
    }
}
