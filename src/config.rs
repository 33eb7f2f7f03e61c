//! Runtime configuration: file and `TICKER_*` environment layers.

use crate::error::ConfigError;
use crate::network::{
    DEFAULT_API_URL, DEFAULT_POLL_INTERVAL_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SYMBOL,
};
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;
use std::time::Duration;

const ENV_PREFIX: &str = "TICKER";

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_symbol() -> String {
    DEFAULT_SYMBOL.to_string()
}

fn default_poll_secs() -> u64 {
    DEFAULT_POLL_INTERVAL_SECS
}

fn default_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TickerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_symbol")]
    pub symbol: String,
    #[serde(default = "default_poll_secs")]
    pub quote_poll_secs: u64,
    #[serde(default = "default_poll_secs")]
    pub trade_poll_secs: u64,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            symbol: default_symbol(),
            quote_poll_secs: default_poll_secs(),
            trade_poll_secs: default_poll_secs(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

impl TickerConfig {
    /// Load from an optional TOML file, then `TICKER_*` environment variables
    /// (`TICKER_BASE_URL`, `TICKER_QUOTE_POLL_SECS`, ...), then validate.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(p) = path {
            builder = builder.add_source(File::with_name(p).required(true));
        }
        Self::finish(builder)
    }

    /// Like [`load`](Self::load), with the file layer given inline.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Self::finish(Config::builder().add_source(File::from_str(source, FileFormat::Toml)))
    }

    fn finish(
        builder: ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        let cfg: Self = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;
        cfg.validate()?;
        tracing::debug!(
            base_url = %cfg.base_url,
            symbol = %cfg.symbol,
            quote_poll_secs = cfg.quote_poll_secs,
            trade_poll_secs = cfg.trade_poll_secs,
            "Config loaded"
        );
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::Validation("base_url must not be empty".into()));
        }
        if self.symbol.trim().is_empty() {
            return Err(ConfigError::Validation("symbol must not be empty".into()));
        }
        for (name, secs) in [
            ("quote_poll_secs", self.quote_poll_secs),
            ("trade_poll_secs", self.trade_poll_secs),
            ("request_timeout_secs", self.request_timeout_secs),
        ] {
            if secs == 0 {
                return Err(ConfigError::Validation(format!("{} must be > 0", name)));
            }
        }
        Ok(())
    }

    pub fn quote_interval(&self) -> Duration {
        Duration::from_secs(self.quote_poll_secs)
    }

    pub fn trade_interval(&self) -> Duration {
        Duration::from_secs(self.trade_poll_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
