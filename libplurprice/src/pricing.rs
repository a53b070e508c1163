//! Per-post price calculation
//!
//! A [`PriceCalculator`] maps provider names to [`PriceStrategy`]
//! implementations. Lookups use the account's provider name, so a registry
//! that lacks an entry for a provider reports it as unknown instead of
//! falling back to a default price.
//!
//! # Examples
//!
//! ```
//! use libplurprice::accounts::YoutubeAccount;
//! use libplurprice::pricing::PriceCalculator;
//!
//! # fn example() -> libplurprice::Result<()> {
//! let calculator = PriceCalculator::with_default_rates()?;
//! let channel = YoutubeAccount::new("ElCanalDelRey", "15319024", "Jose Camargo", 200);
//! assert_eq!(calculator.price_for(&channel)?, 60.0);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use std::collections::HashMap;

use crate::accounts::Account;
use crate::config::RatesConfig;
use crate::error::{PricingError, Result};
use crate::types::Provider;

/// Computes a price from a follower count
pub trait PriceStrategy: Send + Sync {
    fn price(&self, follower_count: u64) -> f64;
}

/// Price proportional to the follower count
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRate {
    rate: f64,
}

impl LinearRate {
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }

    /// Built-in rate for a provider
    pub fn for_provider(provider: Provider) -> Self {
        Self::new(provider.default_rate())
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl PriceStrategy for LinearRate {
    fn price(&self, follower_count: u64) -> f64 {
        follower_count as f64 * self.rate
    }
}

/// Registry of pricing strategies keyed by provider name
#[derive(Default)]
pub struct PriceCalculator {
    strategies: HashMap<String, Box<dyn PriceStrategy>>,
}

impl PriceCalculator {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry populated with the built-in rate for every provider
    pub fn with_default_rates() -> Result<Self> {
        let mut calculator = Self::new();
        for provider in Provider::ALL {
            calculator.register(provider.as_str(), LinearRate::for_provider(provider))?;
        }
        Ok(calculator)
    }

    /// Registry populated from configured rates
    ///
    /// Every entry in `rates` becomes a [`LinearRate`], including names that
    /// do not correspond to a known provider.
    pub fn from_rates(rates: &RatesConfig) -> Result<Self> {
        let mut calculator = Self::new();
        for (provider, rate) in rates.iter() {
            calculator.register(provider, LinearRate::new(rate))?;
        }
        Ok(calculator)
    }

    /// Add a strategy for `provider`
    ///
    /// # Errors
    ///
    /// Returns `PricingError::DuplicateProvider` if the name is already
    /// registered. The existing strategy is kept.
    pub fn register(
        &mut self,
        provider: impl Into<String>,
        strategy: impl PriceStrategy + 'static,
    ) -> Result<()> {
        let provider = provider.into();
        if self.strategies.contains_key(&provider) {
            tracing::warn!(provider = %provider, "Pricing strategy already registered");
            return Err(PricingError::DuplicateProvider(provider).into());
        }

        tracing::debug!(provider = %provider, "Registered pricing strategy");
        self.strategies.insert(provider, Box::new(strategy));
        Ok(())
    }

    /// Price per post for `account`, unrounded
    ///
    /// # Errors
    ///
    /// Returns `PricingError::UnknownProvider` if no strategy is registered
    /// for the account's provider.
    pub fn price_for(&self, account: &dyn Account) -> Result<f64> {
        let provider = account.provider();
        let strategy = self
            .strategies
            .get(provider.as_str())
            .ok_or_else(|| PricingError::UnknownProvider(provider.as_str().to_string()))?;

        let price = strategy.price(account.follower_count());
        tracing::debug!(
            provider = %provider,
            follower_count = account.follower_count(),
            price,
            "Calculated price per post"
        );
        Ok(price)
    }

    pub fn is_registered(&self, provider: &str) -> bool {
        self.strategies.contains_key(provider)
    }

    /// Registered provider names, sorted
    pub fn providers(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.strategies.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}
