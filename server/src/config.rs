//! Server Configuration
//!
//! Loads configuration from environment variables.

use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::env;
use std::num::ParseIntError;
use std::str::FromStr;
use std::time::Duration;

/// Immutable set of user IDs loaded once at startup.
///
/// Backs both the admin list and the forced-whitelabel list. Parsed from a
/// comma-separated string; blank entries are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserIdSet(HashSet<u64>);

impl UserIdSet {
    /// Check whether `user_id` is in the set.
    #[must_use]
    pub fn contains(&self, user_id: u64) -> bool {
        self.0.contains(&user_id)
    }

    /// Number of IDs in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<u64> for UserIdSet {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromStr for UserIdSet {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::parse::<u64>)
            .collect()
    }
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080")
    pub bind_address: String,

    /// HS256 secret used to validate access tokens
    pub jwt_secret: String,

    /// Users allowed on admin-only routes
    pub admins: UserIdSet,

    /// Users treated as whitelabel regardless of their premium tier
    pub force_whitelabel: UserIdSet,

    /// Main site base URL, without a trailing slash
    pub main_site: String,

    /// Base URL of the premium lookup service
    pub premium_service_url: Option<String>,

    /// Deadline for a single premium lookup in milliseconds (default: 5000)
    pub premium_lookup_timeout_ms: u64,

    /// Debug mode: premium lookups report whitelabel for everyone
    pub debug: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let debug = env::var("DEBUG")
            .map(|v| matches!(v.trim(), "1" | "true"))
            .unwrap_or(false);

        let premium_service_url = env::var("PREMIUM_SERVICE_URL")
            .ok()
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        if !debug && premium_service_url.is_none() {
            bail!("PREMIUM_SERVICE_URL must be set unless DEBUG is enabled");
        }

        Ok(Self {
            bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            admins: id_set_from_env("ADMINS")?,
            force_whitelabel: id_set_from_env("FORCE_WHITELABEL")?,
            main_site: env::var("MAIN_SITE")
                .context("MAIN_SITE must be set")?
                .trim_end_matches('/')
                .to_string(),
            premium_service_url,
            premium_lookup_timeout_ms: env::var("PREMIUM_LOOKUP_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            debug,
        })
    }

    /// Where browsers without the whitelabel tier are sent.
    #[must_use]
    pub fn premium_upsell_url(&self) -> String {
        format!("{}/premium", self.main_site)
    }

    /// Deadline applied to each premium lookup.
    #[must_use]
    pub const fn premium_lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.premium_lookup_timeout_ms)
    }

    /// Create a default configuration for testing.
    #[must_use]
    pub fn default_for_test() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".into(),
            jwt_secret: "test-secret".into(),
            admins: UserIdSet::default(),
            force_whitelabel: UserIdSet::default(),
            main_site: "https://example.com".into(),
            premium_service_url: None,
            premium_lookup_timeout_ms: 5000,
            debug: true,
        }
    }
}

fn id_set_from_env(key: &str) -> Result<UserIdSet> {
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("{key} must be a comma-separated list of user IDs")),
        Err(_) => Ok(UserIdSet::default()),
    }
}
