//! Core types for Plurprice

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::AccountError;

/// Social network an account belongs to
///
/// Serializes as the lowercase name; deserializes through [`FromStr`], so
/// names are accepted case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Provider {
    Facebook,
    Fanpage,
    Youtube,
    Instagram,
    Twitter,
}

impl Provider {
    /// All providers, in demonstration order
    pub const ALL: [Provider; 5] = [
        Provider::Facebook,
        Provider::Fanpage,
        Provider::Youtube,
        Provider::Twitter,
        Provider::Instagram,
    ];

    /// Lowercase identifier used as the pricing registry key
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::Fanpage => "fanpage",
            Self::Youtube => "youtube",
            Self::Instagram => "instagram",
            Self::Twitter => "twitter",
        }
    }

    /// Price per follower used when no override is configured
    pub fn default_rate(&self) -> f64 {
        match self {
            Self::Facebook => 0.5,
            Self::Fanpage => 0.1,
            Self::Youtube => 0.3,
            Self::Instagram => 0.09,
            Self::Twitter => 0.9,
        }
    }
}

impl FromStr for Provider {
    type Err = AccountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "facebook" => Ok(Self::Facebook),
            "fanpage" => Ok(Self::Fanpage),
            "youtube" => Ok(Self::Youtube),
            "instagram" => Ok(Self::Instagram),
            "twitter" => Ok(Self::Twitter),
            _ => Err(AccountError::UnknownProvider(s.to_string())),
        }
    }
}

impl TryFrom<String> for Provider {
    type Error = AccountError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reach tier derived from an account's follower count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    Citizen,
    Professional,
    Celebrity,
}

impl Tier {
    /// Threshold rule shared by every provider except Twitter
    pub fn from_follower_count(count: u64) -> Self {
        match count {
            0..=10 => Self::Citizen,
            11..=50 => Self::Professional,
            _ => Self::Celebrity,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Citizen => "Citizen",
            Self::Professional => "Professional",
            Self::Celebrity => "Celebrity",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
