use crate::{
    conf::ReportConf,
    model::{Outcome, Quote, Rejection, Symbol},
    provider::Provider,
};
use anyhow::{Context, Result};
use serde_json::Value;
use std::io::Write;
use tracing::{error, info, warn};

#[derive(Debug, Default, PartialEq)]
pub struct Summary {
    pub quoted: usize,
    pub rejected: usize,
    pub failed: usize,
}

/// Fetches every configured symbol in order, one at a time, writing one line
/// per symbol to `out`.
///
/// Rejections never stop the pass. Failed requests stop it only when
/// `fail_fast` is set, after their line has been written.
pub async fn run<P, W>(provider: &P, conf: &ReportConf, out: &mut W) -> Result<Summary>
where
    P: Provider + ?Sized,
    W: Write,
{
    if conf.symbols.is_empty() {
        warn!("No symbols configured, nothing to report");
    }

    info!(provider = %provider.name(), symbols = conf.symbols.len(), "Reporting exchange rates");
    let mut summary = Summary::default();

    for symbol in &conf.symbols {
        let outcome = quote(provider, symbol).await;
        writeln!(out, "{}", outcome).context("Failed to write report line")?;

        match outcome {
            Outcome::Quoted(_) => summary.quoted += 1,
            Outcome::Rejected(_) => summary.rejected += 1,
            Outcome::Failed { symbol, error } => {
                summary.failed += 1;

                if conf.fail_fast {
                    return Err(error.context(format!("Aborted report at {}", symbol)));
                }
            }
        }
    }

    out.flush().context("Failed to flush report")?;
    info!(
        quoted = summary.quoted,
        rejected = summary.rejected,
        failed = summary.failed,
        "Report finished"
    );
    Ok(summary)
}

async fn quote<P>(provider: &P, symbol: &Symbol) -> Outcome
where
    P: Provider + ?Sized,
{
    let res = match provider.fetch(symbol).await {
        Ok(res) => res,
        Err(e) => {
            error!(provider = %provider.name(), %symbol, error = %format!("{:#}", e), "Request failed");
            return Outcome::Failed {
                symbol: symbol.clone(),
                error: e,
            };
        }
    };

    if res.status != 200 {
        warn!(provider = %provider.name(), %symbol, status = res.status, "Request rejected");
        return Outcome::Rejected(Rejection {
            symbol: symbol.clone(),
            status: res.status,
            body: res.body,
        });
    }

    match serde_json::from_str::<Value>(&res.body) {
        Ok(payload) => Outcome::Quoted(Quote {
            symbol: symbol.clone(),
            payload,
        }),
        Err(e) => {
            error!(provider = %provider.name(), %symbol, %e, "Response body is not JSON");
            Outcome::Failed {
                symbol: symbol.clone(),
                error: anyhow::Error::new(e).context("Response body is not JSON"),
            }
        }
    }
}
