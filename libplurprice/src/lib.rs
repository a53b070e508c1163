//! Plurprice - reach tiers and per-post pricing for social network accounts
//!
//! This library models accounts on several social networks, classifies them
//! by follower count and prices a sponsored post with a per-provider rate.

pub mod accounts;
pub mod config;
pub mod error;
pub mod logging;
pub mod pricing;
pub mod report;
pub mod types;

// Re-export commonly used types
pub use accounts::{
    Account, FacebookAccount, FanpageAccount, Identity, InstagramAccount, TwitterAccount,
    YoutubeAccount,
};
pub use config::Config;
pub use error::{PlurpriceError, Result};
pub use pricing::{LinearRate, PriceCalculator, PriceStrategy};
pub use types::{Provider, Tier};
