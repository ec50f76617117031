//! Client configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;

use suiwire_types::{Address, Network, SUI_COIN_TYPE};
use suiwire_utils::{init_logging, LogFormat};

use crate::error::RpcError;

/// Read-only settings for a client process.
///
/// Load once at startup via [`ClientConfig::from_toml_file`] (or build it in
/// code for tests) and pass it by reference to whatever needs it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Which public network to use.
    #[serde(default)]
    pub network: Network,

    /// Full node endpoint. Overrides the network's default when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpc_url: Option<String>,

    /// Coin type used to pay for gas.
    #[serde(default = "default_coin_type")]
    pub coin_type: String,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter, e.g. "info" or "debug,suiwire_rpc=trace".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_coin_type() -> String {
    SUI_COIN_TYPE.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ClientConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, RpcError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| RpcError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, RpcError> {
        let config: Self = toml::from_str(s).map_err(|e| RpcError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, RpcError> {
        toml::to_string_pretty(self).map_err(|e| RpcError::Config(e.to_string()))
    }

    /// The endpoint requests should go to.
    pub fn endpoint(&self) -> &str {
        self.rpc_url.as_deref().unwrap_or(self.network.rpc_url())
    }

    /// Check that the endpoint is an HTTP(S) URL and that the coin type names
    /// a valid package address, e.g. `0x2::sui::SUI`.
    pub fn validate(&self) -> Result<(), RpcError> {
        if let Some(url) = &self.rpc_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(RpcError::Config(format!("rpc_url must be http(s): {url}")));
            }
        }

        let mut parts = self.coin_type.split("::");
        let (Some(package), Some(module), Some(name), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(RpcError::Config(format!(
                "coin_type must look like <package>::<module>::<name>: {}",
                self.coin_type
            )));
        };
        if module.is_empty() || name.is_empty() {
            return Err(RpcError::Config(format!(
                "coin_type has an empty module or name: {}",
                self.coin_type
            )));
        }
        Address::from_hex(package)
            .map_err(|e| RpcError::Config(format!("coin_type package: {e}")))?;
        Ok(())
    }

    /// Install the tracing subscriber described by this config.
    pub fn init_logging(&self) -> Result<(), RpcError> {
        Ok(init_logging(self.log_format, &self.log_level)?)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            network: Network::default(),
            rpc_url: None,
            coin_type: default_coin_type(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }
}
