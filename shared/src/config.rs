use tracing::warn;

use crate::{Error, Result};

#[derive(Clone, Debug)]
pub struct Config {
    /// host:port of the cache REST API
    pub api_address: String,
    pub web_host: String,
    pub web_port: u16,
}

impl Config {
    const DEFAULT_API_ADDRESS: &str = "localhost:8282";
    const DEFAULT_WEB_HOST: &str = "0.0.0.0";
    const DEFAULT_WEB_PORT: u16 = 8080;

    pub fn from_env() -> Self {
        let api_address = std::env::var("DNSCACHE_API_ADDRESS").unwrap_or_else(|_| {
            warn!(
                "DNSCACHE_API_ADDRESS not set, using default {}",
                Self::DEFAULT_API_ADDRESS
            );
            Self::DEFAULT_API_ADDRESS.to_string()
        });
        let web_port = std::env::var("DNSCACHE_WEB_PORT")
            .unwrap_or_else(|_| Self::DEFAULT_WEB_PORT.to_string())
            .parse::<u16>()
            .unwrap_or(Self::DEFAULT_WEB_PORT);

        Self {
            api_address,
            web_host: std::env::var("DNSCACHE_WEB_HOST")
                .unwrap_or_else(|_| Self::DEFAULT_WEB_HOST.to_string()),
            web_port,
        }
    }

    pub fn with_api_address(mut self, api_address: impl Into<String>) -> Self {
        self.api_address = api_address.into();
        self
    }

    /// Base URL every API request is built from, e.g. `http://localhost:8282`
    pub fn api_base_url(&self) -> Result<String> {
        let address = self.api_address.trim().trim_end_matches('/');
        if address.is_empty() {
            return Err(Error::Config("api address is empty".into()));
        }

        if address.starts_with("http://") || address.starts_with("https://") {
            Ok(address.to_string())
        } else {
            Ok(format!("http://{}", address))
        }
    }

    pub fn web_bind_address(&self) -> String {
        format!("{}:{}", self.web_host, self.web_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_address: Self::DEFAULT_API_ADDRESS.to_string(),
            web_host: Self::DEFAULT_WEB_HOST.to_string(),
            web_port: Self::DEFAULT_WEB_PORT,
        }
    }
}
