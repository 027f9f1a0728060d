//! Whitelabel entitlement gate.
//!
//! Asks the premium service for the caller's tier on every request, lets the
//! forced-whitelabel list bypass the tier check, and reports a denial in the
//! way the route's audience expects: a JSON error for API clients, a redirect
//! to the premium page for browsers.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
    Extension,
};
use tracing::{debug, error, info};

use super::{GateError, RequestContext};
use crate::api::AppState;
use crate::config::Config;
use crate::premium::{PremiumLookup, PremiumTier};

/// Minimum tier required on entitlement-gated routes.
pub const REQUIRED_TIER: PremiumTier = PremiumTier::Whitelabel;

/// How an entitlement denial is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationMode {
    /// JSON API: `402 Payment Required`.
    Api,
    /// Browser page: `302` to the premium page on the main site.
    Web,
}

/// Whitelabel gate for one route, fixed to a presentation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitlementGate {
    mode: PresentationMode,
}

impl EntitlementGate {
    /// Gate that presents denials according to `mode`.
    pub const fn new(mode: PresentationMode) -> Self {
        Self { mode }
    }

    /// Presentation mode of this gate.
    pub const fn mode(&self) -> PresentationMode {
        self.mode
    }

    /// Decide whether `caller_id` may pass.
    ///
    /// A lookup failure halts the request whatever the mode or force list say.
    pub async fn check(
        &self,
        lookup: &dyn PremiumLookup,
        config: &Config,
        caller_id: u64,
    ) -> Result<(), GateError> {
        let tier = lookup
            .tier_by_user(caller_id, false)
            .await
            .inspect_err(|e| error!(caller_id, error = %e, "Premium lookup failed"))?;

        if tier >= REQUIRED_TIER {
            return Ok(());
        }

        if config.force_whitelabel.contains(caller_id) {
            info!(caller_id, %tier, "Whitelabel forced by configuration");
            return Ok(());
        }

        debug!(caller_id, %tier, mode = ?self.mode, "Whitelabel tier required");
        Err(self.denial(config))
    }

    fn denial(&self, config: &Config) -> GateError {
        match self.mode {
            PresentationMode::Api => GateError::WhitelabelRequired,
            PresentationMode::Web => GateError::PremiumRedirect(config.premium_upsell_url()),
        }
    }
}

/// Middleware that requires the whitelabel tier.
///
/// Installed with the route's gate alongside the app state:
/// `from_fn_with_state((state, EntitlementGate::new(mode)), require_whitelabel)`.
#[tracing::instrument(skip_all)]
pub async fn require_whitelabel(
    State((state, gate)): State<(AppState, EntitlementGate)>,
    Extension(ctx): Extension<RequestContext>,
    request: Request,
    next: Next,
) -> Result<Response, GateError> {
    gate.check(state.premium.as_ref(), &state.config, ctx.caller_id())
        .await?;

    Ok(next.run(request).await)
}
