mod provider;
pub use provider::{Provider, RawResponse};
mod coinapi;
pub use coinapi::{CoinApi, CoinApiConf};
