use std::fs;
use std::path::Path;

use oauth_credentials::Credentials;
use serde::Deserialize;

use crate::error::Result;
use crate::service::{ClientInfo, BASE_URL};

/// Configuration of a [`TwitterService`](crate::TwitterService), usually read from a TOML file.
#[non_exhaustive]
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "yes")]
    pub include_entities: bool,
    #[serde(default = "yes")]
    pub include_retweets: bool,
    #[serde(with = "CredentialsDef")]
    pub client: Credentials<Box<str>>,
    /// The access token. The client is anonymous without one.
    #[serde(default)]
    #[serde(deserialize_with = "de_token")]
    pub token: Option<Credentials<Box<str>>>,
    #[serde(default)]
    pub info: Option<ClientInfo>,
}

#[derive(Deserialize)]
#[serde(remote = "Credentials")]
struct CredentialsDef<T> {
    #[serde(rename = "key")]
    identifier: T,
    secret: T,
}

impl Config {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("reading configuration from {}", path.display());
        let config = fs::read_to_string(path)?;
        Config::from_toml(&config)
    }

    pub fn from_toml(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(Into::into)
    }
}

fn default_base_url() -> String {
    BASE_URL.to_owned()
}

fn yes() -> bool {
    true
}

fn de_token<'de, D>(d: D) -> std::result::Result<Option<Credentials<Box<str>>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapper(#[serde(with = "CredentialsDef")] Credentials<Box<str>>);

    Option::<Wrapper>::deserialize(d).map(|w| w.map(|Wrapper(token)| token))
}
