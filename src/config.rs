//! Platform configuration with validation, defaults, and TOML persistence.

use crate::auth::AccountId;
use crate::ledger::{
    DEFAULT_HOUSE_FEE_PERCENT, MAX_BET_AMOUNT, MAX_HOUSE_FEE_PERCENT, MIN_BET_AMOUNT,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),

    #[error("Failed to read configuration: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseFailed(#[from] toml::de::Error),

    #[error("Failed to encode configuration: {0}")]
    EncodeFailed(#[from] toml::ser::Error),
}

/// Deployment-time platform parameters.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlatformConfig {
    /// Hex-encoded 32-byte owner identity, fixed at deployment.
    pub owner: String,
    pub house_fee_percent: u64,
    pub min_bet: u64,
    pub max_bet: u64,
    pub start_paused: bool,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            owner: AccountId::new([0u8; 32]).to_hex(),
            house_fee_percent: DEFAULT_HOUSE_FEE_PERCENT,
            min_bet: MIN_BET_AMOUNT,
            max_bet: MAX_BET_AMOUNT,
            start_paused: false,
        }
    }
}

impl PlatformConfig {
    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the configuration as TOML.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(path, raw)?;
        Ok(())
    }

    /// Validate for logical consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.house_fee_percent > MAX_HOUSE_FEE_PERCENT {
            return Err(ConfigError::InvalidValue(format!(
                "house_fee_percent must be <= {}",
                MAX_HOUSE_FEE_PERCENT
            )));
        }
        if self.min_bet == 0 {
            return Err(ConfigError::InvalidValue("min_bet must be > 0".to_string()));
        }
        if self.min_bet > self.max_bet {
            return Err(ConfigError::InvalidValue(
                "min_bet must not exceed max_bet".to_string(),
            ));
        }
        self.owner_account()?;
        Ok(())
    }

    /// Parse the configured owner identity.
    pub fn owner_account(&self) -> Result<AccountId, ConfigError> {
        AccountId::from_hex(&self.owner).map_err(|e| {
            ConfigError::InvalidValue(format!("owner must be 64 hex characters: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PlatformConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.house_fee_percent, 5);
        assert_eq!(config.min_bet, 1_000_000);
        assert_eq!(config.max_bet, 1_000_000_000);
        assert!(!config.start_paused);
    }

    #[test]
    fn test_fee_cap_validation() {
        let mut config = PlatformConfig::default();
        config.house_fee_percent = 21;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bet_limit_validation() {
        let mut config = PlatformConfig::default();
        config.min_bet = 0;
        assert!(config.validate().is_err());

        let mut config = PlatformConfig::default();
        config.min_bet = 10;
        config.max_bet = 5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_owner_parsing() {
        let mut config = PlatformConfig::default();
        config.owner = "zz".to_string();
        assert!(config.validate().is_err());

        config.owner = "ab".repeat(32);
        let owner = config.owner_account().unwrap();
        assert_eq!(owner, AccountId::new([0xAB; 32]));
    }

    #[test]
    fn test_toml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("platform.toml");

        let mut config = PlatformConfig::default();
        config.owner = "01".repeat(32);
        config.house_fee_percent = 7;
        config.save(&path).unwrap();

        let loaded = PlatformConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("platform.toml");
        std::fs::write(&path, "not valid toml [[").unwrap();
        assert!(PlatformConfig::load(&path).is_err());
    }
}
