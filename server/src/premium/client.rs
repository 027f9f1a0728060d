//! Premium lookup clients.

use std::time::Duration;

use futures::future::BoxFuture;
use serde::Deserialize;
use tracing::debug;

use super::{LookupError, PremiumTier};

/// Future returned by [`PremiumLookup::tier_by_user`].
///
/// Dropping it abandons the lookup, which is how request cancellation reaches
/// the premium service call.
pub type LookupFuture<'a> = BoxFuture<'a, Result<PremiumTier, LookupError>>;

/// Source of truth for a user's premium tier.
pub trait PremiumLookup: Send + Sync {
    /// Look up the tier held by `user_id`.
    ///
    /// `force_refresh` asks the service to bypass its own caches.
    fn tier_by_user(&self, user_id: u64, force_refresh: bool) -> LookupFuture<'_>;
}

#[derive(Debug, Deserialize)]
struct TierResponse {
    tier: PremiumTier,
}

/// Client for the premium lookup service over HTTP.
///
/// Calls `GET {base_url}/v1/users/{user_id}/tier?force_refresh=<bool>` and
/// expects `{"tier": "<tier>"}`.
#[derive(Debug, Clone)]
pub struct HttpPremiumClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpPremiumClient {
    /// Create a client for the service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("import-server/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

impl PremiumLookup for HttpPremiumClient {
    fn tier_by_user(&self, user_id: u64, force_refresh: bool) -> LookupFuture<'_> {
        Box::pin(async move {
            let url = format!("{}/v1/users/{user_id}/tier", self.base_url);
            let response = self
                .http
                .get(&url)
                .query(&[("force_refresh", force_refresh)])
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                return Err(LookupError::Status(status.as_u16()));
            }

            let body: TierResponse = response.json().await?;
            debug!(user_id, tier = %body.tier, "Premium tier resolved");
            Ok(body.tier)
        })
    }
}

/// Lookup that reports the same tier for every user.
///
/// Used in debug deployments and tests.
#[derive(Debug, Clone, Copy)]
pub struct StaticPremiumClient {
    tier: PremiumTier,
}

impl StaticPremiumClient {
    /// Create a lookup that always answers `tier`.
    pub const fn new(tier: PremiumTier) -> Self {
        Self { tier }
    }
}

impl PremiumLookup for StaticPremiumClient {
    fn tier_by_user(&self, _user_id: u64, _force_refresh: bool) -> LookupFuture<'_> {
        let tier = self.tier;
        Box::pin(async move { Ok(tier) })
    }
}

/// Applies a deadline to every lookup of the wrapped client.
#[derive(Debug, Clone)]
pub struct TimeoutLookup<L> {
    inner: L,
    timeout: Duration,
}

impl<L: PremiumLookup> TimeoutLookup<L> {
    /// Wrap `inner` so lookups fail after `timeout`.
    pub const fn new(inner: L, timeout: Duration) -> Self {
        Self { inner, timeout }
    }
}

impl<L: PremiumLookup> PremiumLookup for TimeoutLookup<L> {
    fn tier_by_user(&self, user_id: u64, force_refresh: bool) -> LookupFuture<'_> {
        Box::pin(async move {
            tokio::time::timeout(self.timeout, self.inner.tier_by_user(user_id, force_refresh))
                .await
                .map_err(|_| {
                    LookupError::Timeout(u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX))
                })?
        })
    }
}
