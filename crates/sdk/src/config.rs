//! Zap configuration loaded from a TOML file

use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;
use std::fs;
use std::path::Path;
use std::time::Duration;
use zap_types::{
    pubkey_string, ZapError, ZapResult, DEFAULT_URL_THROTTLE_MS, DEFAULT_ZAP_PATH,
    MAX_URL_THROTTLE_MS, RAY_MINT,
};

use crate::state::AppSettings;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ZapConfig {
    /// URL sync behaviour
    pub url: UrlConfig,

    /// Default coins
    pub tokens: TokenConfig,

    /// Wallet used by the headless driver
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet: Option<WalletConfig>,
}

/// URL sync configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct UrlConfig {
    /// Pathname fragment that marks the zap view
    pub zap_path: String,

    /// Minimum spacing between URL replacements, in milliseconds
    pub throttle_ms: u64,

    /// Keep transient zap state out of the URL
    pub clean_url_mode: bool,
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self {
            zap_path: DEFAULT_ZAP_PATH.to_string(),
            throttle_ms: DEFAULT_URL_THROTTLE_MS,
            clean_url_mode: false,
        }
    }
}

/// Default coin configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TokenConfig {
    /// Coin placed in the lower box when it is empty
    #[serde(with = "pubkey_string")]
    pub secondary_mint: Pubkey,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secondary_mint: RAY_MINT,
        }
    }
}

/// Wallet configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WalletConfig {
    #[serde(with = "pubkey_string")]
    pub owner: Pubkey,
}

impl ZapConfig {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> ZapResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ZapError::generic(&format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        Self::from_toml(&content)
    }

    /// Parse and validate TOML text
    pub fn from_toml(content: &str) -> ZapResult<Self> {
        let config: ZapConfig = toml::from_str(content)
            .map_err(|e| ZapError::parse_error(&format!("Failed to parse config: {}", e), None))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> ZapResult<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| ZapError::parse_error(&format!("Failed to serialize config: {}", e), None))?;
        fs::write(path, content).map_err(|e| {
            ZapError::generic(&format!("Failed to write config file {}: {}", path.display(), e))
        })?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ZapResult<()> {
        if self.url.zap_path.is_empty() || !self.url.zap_path.starts_with('/') {
            return Err(ZapError::invalid_configuration(
                "url.zap_path",
                "must be a non-empty path starting with '/'",
            ));
        }

        if self.url.throttle_ms == 0 || self.url.throttle_ms > MAX_URL_THROTTLE_MS {
            return Err(ZapError::invalid_configuration(
                "url.throttle_ms",
                &format!("{} not in [1, {}]", self.url.throttle_ms, MAX_URL_THROTTLE_MS),
            ));
        }

        Ok(())
    }

    pub fn throttle_delay(&self) -> Duration {
        Duration::from_millis(self.url.throttle_ms)
    }

    /// Settings store contents implied by this configuration
    pub fn initial_settings(&self) -> AppSettings {
        AppSettings {
            in_clean_url_mode: self.url.clean_url_mode,
        }
    }
}
