//! Social network account model
//!
//! Each provider has its own account type with a semantically named
//! engagement field (friends, likers, subscribers, followers). All of them
//! implement [`Account`], which exposes that field uniformly as the follower
//! count and derives the reach tier from it.

use std::fmt;

use crate::error::{AccountError, Result};
use crate::types::{Provider, Tier};

/// Identity fields shared by every account type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub screen_name: String,
    pub unique_id: String,
    pub full_name: String,
}

impl Identity {
    pub fn new(
        screen_name: impl Into<String>,
        unique_id: impl Into<String>,
        full_name: impl Into<String>,
    ) -> Self {
        Self {
            screen_name: screen_name.into(),
            unique_id: unique_id.into(),
            full_name: full_name.into(),
        }
    }
}

/// Capability set consumed by the formatter and the price calculator
///
/// Implementors only provide storage access; identity accessors, follower
/// count validation and the tier rule are shared.
pub trait Account: fmt::Debug {
    /// Provider this account belongs to. Fixed for the lifetime of the value.
    fn provider(&self) -> Provider;

    fn identity(&self) -> &Identity;

    fn identity_mut(&mut self) -> &mut Identity;

    /// Current follower count (friends, likers, subscribers or followers)
    fn follower_count(&self) -> u64;

    /// Mutable access to the provider-specific engagement field
    fn followers_mut(&mut self) -> &mut u64;

    fn screen_name(&self) -> &str {
        &self.identity().screen_name
    }

    fn unique_id(&self) -> &str {
        &self.identity().unique_id
    }

    fn full_name(&self) -> &str {
        &self.identity().full_name
    }

    fn set_screen_name(&mut self, screen_name: String) {
        self.identity_mut().screen_name = screen_name;
    }

    fn set_unique_id(&mut self, unique_id: String) {
        self.identity_mut().unique_id = unique_id;
    }

    fn set_full_name(&mut self, full_name: String) {
        self.identity_mut().full_name = full_name;
    }

    /// Set the follower count from an untrusted signed value
    ///
    /// # Errors
    ///
    /// Returns `AccountError::InvalidFollowerCount` for negative values and
    /// leaves the stored count untouched.
    fn set_follower_count(&mut self, count: i64) -> Result<()> {
        let count =
            u64::try_from(count).map_err(|_| AccountError::InvalidFollowerCount(count))?;
        *self.followers_mut() = count;
        Ok(())
    }

    /// Reach tier derived from the follower count
    fn category(&self) -> Tier {
        Tier::from_follower_count(self.follower_count())
    }
}

/// Facebook profile; engagement is counted in friends
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacebookAccount {
    identity: Identity,
    friends: u64,
}

impl FacebookAccount {
    pub fn new(
        screen_name: impl Into<String>,
        unique_id: impl Into<String>,
        full_name: impl Into<String>,
        friends: u64,
    ) -> Self {
        Self {
            identity: Identity::new(screen_name, unique_id, full_name),
            friends,
        }
    }
}

impl Account for FacebookAccount {
    fn provider(&self) -> Provider {
        Provider::Facebook
    }

    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn identity_mut(&mut self) -> &mut Identity {
        &mut self.identity
    }

    fn follower_count(&self) -> u64 {
        self.friends
    }

    fn followers_mut(&mut self) -> &mut u64 {
        &mut self.friends
    }
}

/// Facebook page; engagement is counted in likers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FanpageAccount {
    identity: Identity,
    likers: u64,
}

impl FanpageAccount {
    pub fn new(
        screen_name: impl Into<String>,
        unique_id: impl Into<String>,
        full_name: impl Into<String>,
        likers: u64,
    ) -> Self {
        Self {
            identity: Identity::new(screen_name, unique_id, full_name),
            likers,
        }
    }
}

impl Account for FanpageAccount {
    fn provider(&self) -> Provider {
        Provider::Fanpage
    }

    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn identity_mut(&mut self) -> &mut Identity {
        &mut self.identity
    }

    fn follower_count(&self) -> u64 {
        self.likers
    }

    fn followers_mut(&mut self) -> &mut u64 {
        &mut self.likers
    }
}

/// YouTube channel; engagement is counted in subscribers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YoutubeAccount {
    identity: Identity,
    subscribers: u64,
}

impl YoutubeAccount {
    pub fn new(
        screen_name: impl Into<String>,
        unique_id: impl Into<String>,
        full_name: impl Into<String>,
        subscribers: u64,
    ) -> Self {
        Self {
            identity: Identity::new(screen_name, unique_id, full_name),
            subscribers,
        }
    }
}

impl Account for YoutubeAccount {
    fn provider(&self) -> Provider {
        Provider::Youtube
    }

    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn identity_mut(&mut self) -> &mut Identity {
        &mut self.identity
    }

    fn follower_count(&self) -> u64 {
        self.subscribers
    }

    fn followers_mut(&mut self) -> &mut u64 {
        &mut self.subscribers
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstagramAccount {
    identity: Identity,
    followers: u64,
}

impl InstagramAccount {
    pub fn new(
        screen_name: impl Into<String>,
        unique_id: impl Into<String>,
        full_name: impl Into<String>,
        followers: u64,
    ) -> Self {
        Self {
            identity: Identity::new(screen_name, unique_id, full_name),
            followers,
        }
    }
}

impl Account for InstagramAccount {
    fn provider(&self) -> Provider {
        Provider::Instagram
    }

    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn identity_mut(&mut self) -> &mut Identity {
        &mut self.identity
    }

    fn follower_count(&self) -> u64 {
        self.followers
    }

    fn followers_mut(&mut self) -> &mut u64 {
        &mut self.followers
    }
}

/// Twitter profile
///
/// Twitter accounts are always classified as `Celebrity`, whatever their
/// follower count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TwitterAccount {
    identity: Identity,
    followers: u64,
}

impl TwitterAccount {
    pub fn new(
        screen_name: impl Into<String>,
        unique_id: impl Into<String>,
        full_name: impl Into<String>,
        followers: u64,
    ) -> Self {
        Self {
            identity: Identity::new(screen_name, unique_id, full_name),
            followers,
        }
    }
}

impl Account for TwitterAccount {
    fn provider(&self) -> Provider {
        Provider::Twitter
    }

    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn identity_mut(&mut self) -> &mut Identity {
        &mut self.identity
    }

    fn follower_count(&self) -> u64 {
        self.followers
    }

    fn followers_mut(&mut self) -> &mut u64 {
        &mut self.followers
    }

    fn category(&self) -> Tier {
        Tier::Celebrity
    }
}

/// Build the account type matching `provider`
pub fn new_account(provider: Provider, identity: Identity, follower_count: u64) -> Box<dyn Account> {
    let Identity {
        screen_name,
        unique_id,
        full_name,
    } = identity;

    match provider {
        Provider::Facebook => Box::new(FacebookAccount::new(
            screen_name,
            unique_id,
            full_name,
            follower_count,
        )),
        Provider::Fanpage => Box::new(FanpageAccount::new(
            screen_name,
            unique_id,
            full_name,
            follower_count,
        )),
        Provider::Youtube => Box::new(YoutubeAccount::new(
            screen_name,
            unique_id,
            full_name,
            follower_count,
        )),
        Provider::Instagram => Box::new(InstagramAccount::new(
            screen_name,
            unique_id,
            full_name,
            follower_count,
        )),
        Provider::Twitter => Box::new(TwitterAccount::new(
            screen_name,
            unique_id,
            full_name,
            follower_count,
        )),
    }
}

/// The five demonstration accounts, in report order
pub fn demo_roster() -> Vec<Box<dyn Account>> {
    vec![
        Box::new(FacebookAccount::new("Midas", "531902", "el Rey Midas", 10)),
        Box::new(FanpageAccount::new(
            "ElFanDelRey",
            "910910",
            "Jose Alberto Camargo",
            50,
        )),
        Box::new(YoutubeAccount::new(
            "ElCanalDelRey",
            "15319024",
            "Jose Camargo",
            200,
        )),
        Box::new(TwitterAccount::new(
            "app_config",
            "15377024",
            "Jose Camargo",
            300,
        )),
        Box::new(InstagramAccount::new(
            "app_config",
            "15377024",
            "Jose Camargo",
            300,
        )),
    ]
}
