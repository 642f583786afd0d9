use crate::{
    model::Symbol,
    provider::{Provider, RawResponse},
};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

const KEY_HEADER: &str = "X-CoinAPI-Key";

pub struct CoinApi {
    conf: CoinApiConf,
    client: Client,
}

#[derive(Deserialize)]
pub struct CoinApiConf {
    /// Endpoint template, `{symbol}` is replaced with the ticker.
    pub url: String,
    pub key: String,
    /// Value of the `Accept` header, the header is omitted when empty.
    pub accept: String,
    pub timeout_secs: u64,
}

impl CoinApi {
    pub fn new(conf: CoinApiConf) -> Result<CoinApi> {
        if conf.key.is_empty() {
            warn!(
                provider = "coinapi",
                "API key is not set, expect requests to be rejected"
            );
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(conf.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(CoinApi { conf, client })
    }

    fn url(&self, symbol: &Symbol) -> String {
        self.conf.url.replace("{symbol}", symbol.as_str())
    }
}

#[async_trait]
impl Provider for CoinApi {
    fn name(&self) -> String {
        "coinapi".into()
    }

    async fn fetch(&self, symbol: &Symbol) -> Result<RawResponse> {
        let url = self.url(symbol);
        debug!(provider = %self.name(), %symbol, %url, "Fetching exchange rate");

        let mut req = self.client.get(&url).header(KEY_HEADER, &self.conf.key);

        if !self.conf.accept.is_empty() {
            req = req.header(ACCEPT, &self.conf.accept);
        }

        let res = req
            .send()
            .await
            .with_context(|| format!("GET {} failed", url))?;
        let status = res.status().as_u16();
        let body = res.text().await.context("Failed to read response body")?;
        debug!(provider = %self.name(), %symbol, status, "Got response");

        Ok(RawResponse { status, body })
    }
}
