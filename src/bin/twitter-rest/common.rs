use std::path::PathBuf;

use anyhow::Context as _;
use hyper::client::Client;
use twitter_rest::{Config, TwitterService};

#[derive(structopt::StructOpt)]
pub struct Opt {
    #[structopt(
        long = "config",
        default_value = "twitter-rest.toml",
        help = "Path to the configuration file"
    )]
    config: PathBuf,
}

impl Opt {
    pub fn open_config(&self) -> anyhow::Result<Config> {
        Config::open(&self.config)
            .with_context(|| format!("failed to load {}", self.config.display()))
    }

    pub fn service(&self) -> anyhow::Result<TwitterService<Client<Connector>>> {
        let config = self.open_config()?;
        let client = Client::builder().build(https_connector());
        Ok(TwitterService::from_config(&config, client))
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "rustls")] {
        use hyper::client::HttpConnector;
        use hyper_rustls::HttpsConnector;

        pub type Connector = HttpsConnector<HttpConnector>;

        pub fn https_connector() -> HttpsConnector<HttpConnector> {
            HttpsConnector::with_native_roots()
        }
    } else if #[cfg(feature = "native-tls")] {
        use hyper::client::HttpConnector;
        use hyper_tls::HttpsConnector;

        pub type Connector = HttpsConnector<HttpConnector>;

        pub fn https_connector() -> HttpsConnector<HttpConnector> {
            HttpsConnector::new()
        }
    } else {
        use hyper::client::HttpConnector;

        pub type Connector = HttpConnector;

        pub fn https_connector() -> HttpConnector {
            log::warn!("built without a TLS backend; only plain HTTP base URLs will work");
            HttpConnector::new()
        }
    }
}
