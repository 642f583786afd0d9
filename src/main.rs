mod conf;
mod model;
mod provider;
mod service;

use conf::Conf;
use provider::CoinApi;
use std::{io, process::exit};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    init_tracing();

    let conf = Conf::new().unwrap_or_else(|e| {
        error!(%e, "Failed to load configuration");
        exit(1);
    });

    let coinapi = CoinApi::new(conf.coinapi).unwrap_or_else(|e| {
        error!(e = %format!("{:#}", e), "Failed to set up provider");
        exit(1);
    });

    if let Err(e) = service::report::run(&coinapi, &conf.report, &mut io::stdout()).await {
        error!(e = %format!("{:#}", e), "Report failed");
        exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
