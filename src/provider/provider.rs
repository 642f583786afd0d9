use crate::model::Symbol;
use anyhow::Result;
use async_trait::async_trait;

/// Response as it came off the wire, before any interpretation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

#[async_trait]
pub trait Provider: Send + Sync {
    fn name(&self) -> String;

    /// Requests the current USD exchange rate of `symbol`.
    ///
    /// Any HTTP status counts as a successful fetch. `Err` means there was no
    /// response at all (connection refused, DNS failure, timeout and so on).
    async fn fetch(&self, symbol: &Symbol) -> Result<RawResponse>;
}
