//! Configuration management for Plurprice
//!
//! The config file is optional. Without one, the built-in rate table and the
//! demonstration roster are used.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::accounts::{new_account, Account, Identity};
use crate::error::{ConfigError, Result};
use crate::types::Provider;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rates: RatesConfig,
    #[serde(default)]
    pub accounts: Vec<AccountConfig>,
}

/// Effective rate table: built-in rates overlaid with configured overrides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct RatesConfig {
    rates: BTreeMap<String, f64>,
}

impl RatesConfig {
    pub fn get(&self, provider: &str) -> Option<f64> {
        self.rates.get(provider).copied()
    }

    pub fn set(&mut self, provider: impl Into<String>, rate: f64) {
        self.rates.insert(provider.into(), rate);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.rates.iter().map(|(name, rate)| (name.as_str(), *rate))
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl Default for RatesConfig {
    fn default() -> Self {
        let rates = Provider::ALL
            .iter()
            .map(|provider| (provider.as_str().to_string(), provider.default_rate()))
            .collect();
        Self { rates }
    }
}

/// Provider names are case-insensitive, so `Facebook` and `facebook` in the
/// same table collide.
impl TryFrom<BTreeMap<String, f64>> for RatesConfig {
    type Error = ConfigError;

    fn try_from(overrides: BTreeMap<String, f64>) -> std::result::Result<Self, Self::Error> {
        let mut config = Self::default();
        let mut seen = BTreeSet::new();
        for (provider, rate) in overrides {
            let provider = provider.to_lowercase();
            if !seen.insert(provider.clone()) {
                return Err(ConfigError::DuplicateRate(provider));
            }
            config.set(provider, rate);
        }
        Ok(config)
    }
}

impl From<RatesConfig> for BTreeMap<String, f64> {
    fn from(config: RatesConfig) -> Self {
        config.rates
    }
}

/// One account entry of the `[[accounts]]` roster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountConfig {
    pub provider: Provider,
    #[serde(default)]
    pub screen_name: String,
    #[serde(default)]
    pub unique_id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub follower_count: i64,
}

impl AccountConfig {
    /// Build the account described by this entry
    ///
    /// # Errors
    ///
    /// Returns `AccountError::InvalidFollowerCount` for a negative count.
    pub fn to_account(&self) -> Result<Box<dyn Account>> {
        let identity = Identity::new(
            self.screen_name.clone(),
            self.unique_id.clone(),
            self.full_name.clone(),
        );
        let mut account = new_account(self.provider, identity, 0);
        account.set_follower_count(self.follower_count)?;
        Ok(account)
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// An explicit `PLURPRICE_CONFIG` must exist. The XDG default path is
    /// optional and falls back to [`Config::default`].
    pub fn load() -> Result<Self> {
        if let Some(path) = env_config_path() {
            return Self::load_from_path(&path);
        }

        let config_path = resolve_config_path()?;
        if !config_path.exists() {
            tracing::debug!(
                path = %config_path.display(),
                "No config file found, using built-in rates"
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        config.validate()?;
        tracing::debug!(
            path = %path.display(),
            rates = config.rates.len(),
            accounts = config.accounts.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Reject rates that cannot produce a non-negative price
    pub fn validate(&self) -> Result<()> {
        for (provider, rate) in self.rates.iter() {
            if !rate.is_finite() || rate < 0.0 {
                return Err(ConfigError::InvalidRate {
                    provider: provider.to_string(),
                    rate,
                }
                .into());
            }
        }
        Ok(())
    }

    /// Accounts from the roster, in file order
    pub fn build_accounts(&self) -> Result<Vec<Box<dyn Account>>> {
        self.accounts.iter().map(AccountConfig::to_account).collect()
    }
}

fn env_config_path() -> Option<PathBuf> {
    std::env::var("PLURPRICE_CONFIG")
        .ok()
        .filter(|path| !path.is_empty())
        .map(|path| PathBuf::from(shellexpand::tilde(&path).to_string()))
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Some(path) = env_config_path() {
        return Ok(path);
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("plurprice").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AccountError, PlurpriceError};
    use crate::types::Tier;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_rates_table() {
        let rates = RatesConfig::default();
        assert_eq!(rates.len(), 5);
        assert_eq!(rates.get("facebook"), Some(0.5));
        assert_eq!(rates.get("fanpage"), Some(0.1));
        assert_eq!(rates.get("youtube"), Some(0.3));
        assert_eq!(rates.get("instagram"), Some(0.09));
        assert_eq!(rates.get("twitter"), Some(0.9));
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let file = write_config("");
        let config = Config::load_from_path(file.path()).unwrap();
        assert_eq!(config.rates, RatesConfig::default());
        assert!(config.accounts.is_empty());
    }

    #[test]
    fn test_rate_overrides_merge_with_defaults() {
        let file = write_config(
            r#"
[rates]
Facebook = 0.75
tiktok = 0.2
"#,
        );
        let config = Config::load_from_path(file.path()).unwrap();
        assert_eq!(config.rates.get("facebook"), Some(0.75));
        assert_eq!(config.rates.get("tiktok"), Some(0.2));
        assert_eq!(config.rates.get("twitter"), Some(0.9));
        assert_eq!(config.rates.len(), 6);
    }

    #[test]
    fn test_rate_keys_differing_only_in_case_rejected() {
        let file = write_config(
            r#"
[rates]
Facebook = 2.0
facebook = 0.75
"#,
        );
        let err = Config::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, PlurpriceError::Config(ConfigError::ParseError(_))));
        assert!(err
            .to_string()
            .contains("Rate for provider 'facebook' is set more than once"));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let file = write_config("[rates]\nyoutube = -0.3\n");
        let err = Config::load_from_path(file.path()).unwrap_err();
        assert!(matches!(
            err,
            PlurpriceError::Config(ConfigError::InvalidRate { ref provider, .. }) if provider == "youtube"
        ));
    }

    #[test]
    fn test_parse_error() {
        let file = write_config("[rates\nfacebook = ");
        let err = Config::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, PlurpriceError::Config(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from_path(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, PlurpriceError::Config(ConfigError::ReadError(_))));
    }

    #[test]
    fn test_accounts_roster() {
        let file = write_config(
            r#"
[[accounts]]
provider = "twitter"
screen_name = "quiet"
unique_id = "1"
full_name = "Quiet Bird"
follower_count = 3

[[accounts]]
provider = "fanpage"
screen_name = "fans"
unique_id = "2"
full_name = "Fan Club"
follower_count = 12
"#,
        );
        let config = Config::load_from_path(file.path()).unwrap();
        let accounts = config.build_accounts().unwrap();

        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].provider(), Provider::Twitter);
        assert_eq!(accounts[0].category(), Tier::Celebrity);
        assert_eq!(accounts[1].provider(), Provider::Fanpage);
        assert_eq!(accounts[1].full_name(), "Fan Club");
        assert_eq!(accounts[1].category(), Tier::Professional);
    }

    #[test]
    fn test_negative_follower_count_in_roster() {
        let file = write_config(
            r#"
[[accounts]]
provider = "instagram"
follower_count = -10
"#,
        );
        let config = Config::load_from_path(file.path()).unwrap();
        let err = config.build_accounts().unwrap_err();
        assert!(matches!(
            err,
            PlurpriceError::Account(AccountError::InvalidFollowerCount(-10))
        ));
    }

    #[test]
    fn test_unknown_provider_in_roster() {
        let file = write_config("[[accounts]]\nprovider = \"myspace\"\n");
        let err = Config::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, PlurpriceError::Config(ConfigError::ParseError(_))));
        assert!(err.to_string().contains("Unknown provider: myspace"));
    }

    #[test]
    fn test_roster_provider_case_insensitive() {
        let file = write_config(
            r#"
[[accounts]]
provider = "YouTube"
screen_name = "ElCanalDelRey"
follower_count = 200
"#,
        );
        let config = Config::load_from_path(file.path()).unwrap();
        let accounts = config.build_accounts().unwrap();
        assert_eq!(accounts[0].provider(), Provider::Youtube);
    }

    #[test]
    #[serial]
    fn test_resolve_config_path_from_env() {
        std::env::set_var("PLURPRICE_CONFIG", "/tmp/plurprice-test.toml");
        let path = resolve_config_path().unwrap();
        std::env::remove_var("PLURPRICE_CONFIG");
        assert_eq!(path, PathBuf::from("/tmp/plurprice-test.toml"));
    }

    #[test]
    #[serial]
    fn test_load_from_env_path() {
        let file = write_config("[rates]\ninstagram = 1.0\n");
        std::env::set_var("PLURPRICE_CONFIG", file.path());
        let result = Config::load();
        std::env::remove_var("PLURPRICE_CONFIG");

        let config = result.unwrap();
        assert_eq!(config.rates.get("instagram"), Some(1.0));
    }

    #[test]
    #[serial]
    fn test_load_from_missing_env_path_fails() {
        std::env::set_var("PLURPRICE_CONFIG", "/nonexistent/plurprice/config.toml");
        let result = Config::load();
        std::env::remove_var("PLURPRICE_CONFIG");
        assert!(result.is_err());
    }
}
