use crate::{model::Symbol, provider::CoinApiConf};
use anyhow::Result;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use std::{env, path::PathBuf};

#[derive(Deserialize)]
pub struct Conf {
    pub coinapi: CoinApiConf,
    pub report: ReportConf,
}

#[derive(Deserialize)]
pub struct ReportConf {
    pub symbols: Vec<Symbol>,
    /// Abort the whole pass on the first request that got no response.
    pub fail_fast: bool,
}

impl Conf {
    pub fn new() -> Result<Conf> {
        Ok(Conf::figment().extract()?)
    }

    fn figment() -> Figment {
        let default_conf = include_str!("../coinrates.conf");
        let mut figment = Figment::new().merge(Toml::string(default_conf));

        if let Some(custom_conf_path) = custom_conf_path() {
            figment = figment.merge(Toml::file(custom_conf_path));
        }

        figment = figment.merge(Env::prefixed("COINRATES_").split("__"));

        // Env values are parsed as scalars, an all-digit key would not be a string.
        for var in ["COINRATES_COINAPI__KEY", "COINAPI_KEY"].iter() {
            if let Ok(key) = env::var(var) {
                figment = figment.merge(("coinapi.key", key));
            }
        }

        figment
    }
}

fn custom_conf_path() -> Option<PathBuf> {
    match env::var("DATA_DIR") {
        Ok(data_dir) => Some(PathBuf::from(data_dir).join("coinrates.conf")),
        Err(_) => dirs::config_dir().map(|it| it.join("coinrates").join("coinrates.conf")),
    }
}

#[cfg(test)]
mod test {
    use super::Conf;
    use crate::model::Symbol;
    use figment::Jail;

    #[test]
    fn defaults() {
        Jail::expect_with(|jail| {
            let data_dir = jail.directory().display().to_string();
            jail.set_env("DATA_DIR", data_dir);

            let conf: Conf = Conf::figment().extract()?;

            assert_eq!(
                "https://rest.coinapi.io/v1/exchangerate/{symbol}/USD",
                conf.coinapi.url
            );
            assert_eq!("text/json", conf.coinapi.accept);
            assert_eq!(30, conf.coinapi.timeout_secs);
            assert_eq!(
                vec![
                    Symbol::from("ETH"),
                    Symbol::from("BTC"),
                    Symbol::from("SOL"),
                    Symbol::from("AVAX"),
                ],
                conf.report.symbols
            );
            assert!(!conf.report.fail_fast);
            Ok(())
        });
    }

    #[test]
    fn custom_file() {
        Jail::expect_with(|jail| {
            let data_dir = jail.directory().display().to_string();
            jail.set_env("DATA_DIR", data_dir);
            jail.create_file(
                "coinrates.conf",
                r#"
                [coinapi]
                accept = ""

                [report]
                symbols = ["BTC"]
                "#,
            )?;

            let conf: Conf = Conf::figment().extract()?;

            assert_eq!("", conf.coinapi.accept);
            assert_eq!(30, conf.coinapi.timeout_secs);
            assert_eq!(vec![Symbol::from("BTC")], conf.report.symbols);
            Ok(())
        });
    }

    #[test]
    fn env_overrides() {
        Jail::expect_with(|jail| {
            let data_dir = jail.directory().display().to_string();
            jail.set_env("DATA_DIR", data_dir);
            jail.set_env("COINAPI_KEY", "test-key");
            jail.set_env("COINRATES_COINAPI__TIMEOUT_SECS", 5);
            jail.set_env("COINRATES_REPORT__FAIL_FAST", true);
            jail.set_env("COINRATES_REPORT__SYMBOLS", "[SOL, ETH]");

            let conf: Conf = Conf::figment().extract()?;

            assert_eq!("test-key", conf.coinapi.key);
            assert_eq!(5, conf.coinapi.timeout_secs);
            assert!(conf.report.fail_fast);
            assert_eq!(
                vec![Symbol::from("SOL"), Symbol::from("ETH")],
                conf.report.symbols
            );
            Ok(())
        });
    }

    #[test]
    fn numeric_key() {
        Jail::expect_with(|jail| {
            let data_dir = jail.directory().display().to_string();
            jail.set_env("DATA_DIR", data_dir);
            jail.set_env("COINAPI_KEY", "0001234567890");

            let conf: Conf = Conf::figment().extract()?;

            assert_eq!("0001234567890", conf.coinapi.key);
            Ok(())
        });
    }

    #[test]
    fn numeric_prefixed_key() {
        Jail::expect_with(|jail| {
            let data_dir = jail.directory().display().to_string();
            jail.set_env("DATA_DIR", data_dir);
            jail.set_env("COINRATES_COINAPI__KEY", "1234567890");

            let conf: Conf = Conf::figment().extract()?;

            assert_eq!("1234567890", conf.coinapi.key);
            Ok(())
        });
    }
}
