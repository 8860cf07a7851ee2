use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use url::Url;

use crate::services::DEFAULT_SERPAPI_URL;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub serpapi_key: Option<String>,
    pub serpapi_base_url: String,
    pub log_level: String,
}

impl Settings {
    /// The configured key, if it is set to something.
    pub fn api_key(&self) -> Option<&str> {
        self.serpapi_key.as_deref().filter(|key| !key.is_empty())
    }

    pub fn base_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.serpapi_base_url)
    }
}

/// Defaults, then an optional `configuration.{yaml,toml,json}` in the working
/// directory, then the process environment (after loading `.env`).
pub fn get_configuration() -> Result<Settings, ConfigError> {
    dotenvy::dotenv().ok();

    Config::builder()
        .set_default("serpapi_base_url", DEFAULT_SERPAPI_URL)?
        .set_default("log_level", "info")?
        .add_source(File::with_name("configuration").required(false))
        .add_source(Environment::default())
        .build()?
        .try_deserialize::<Settings>()
}
