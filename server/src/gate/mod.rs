//! Authorization Gate
//!
//! Request stages that run before guild-scoped handlers:
//! - Guild ID: parse the `{id}` route parameter into the [`RequestContext`]
//! - Admin: caller must be on the configured admin list
//! - Whitelabel: caller must hold the whitelabel tier or be force-listed
//!
//! Each stage either continues the chain or returns a [`GateError`] that
//! becomes the response. [`RouteGuard`] declares which stages a route needs
//! and installs them in that fixed order.

pub mod admin;
pub mod context;
pub mod entitlement;
pub mod error;
pub mod guild;

use axum::{
    middleware::{from_fn, from_fn_with_state},
    Router,
};

use crate::api::AppState;

pub use admin::{authorize_admin, require_admin};
pub use context::RequestContext;
pub use entitlement::{require_whitelabel, EntitlementGate, PresentationMode, REQUIRED_TIER};
pub use error::GateError;
pub use guild::{parse_guild_id, require_guild_id, GUILD_ID_PARAM};

/// Stages required by a group of routes.
///
/// ```ignore
/// let routes = RouteGuard::new()
///     .guild_id()
///     .whitelabel(PresentationMode::Api)
///     .apply(Router::new().route("/api/{id}/access", get(handler)), &state);
/// ```
///
/// Whatever order the builder methods are called in, stages run as
/// guild ID, then admin, then whitelabel. The first stage to fail ends the
/// request and the handler never runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteGuard {
    guild_id: bool,
    admin: bool,
    whitelabel: Option<PresentationMode>,
}

impl RouteGuard {
    /// Guard with no stages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a valid `{id}` guild parameter.
    #[must_use]
    pub fn guild_id(mut self) -> Self {
        self.guild_id = true;
        self
    }

    /// Require the caller to be an admin.
    #[must_use]
    pub fn admin(mut self) -> Self {
        self.admin = true;
        self
    }

    /// Require the whitelabel tier, presenting denials per `mode`.
    #[must_use]
    pub fn whitelabel(mut self, mode: PresentationMode) -> Self {
        self.whitelabel = Some(mode);
        self
    }

    /// Install the declared stages on every route in `router`.
    ///
    /// Stages are added as route layers, so they only run for matched routes
    /// and can read path parameters. Layers added later run first, hence the
    /// reverse order below.
    pub fn apply(self, router: Router<AppState>, state: &AppState) -> Router<AppState> {
        let mut router = router;

        if let Some(mode) = self.whitelabel {
            router = router.route_layer(from_fn_with_state(
                (state.clone(), EntitlementGate::new(mode)),
                require_whitelabel,
            ));
        }

        if self.admin {
            router = router.route_layer(from_fn_with_state(state.clone(), require_admin));
        }

        if self.guild_id {
            router = router.route_layer(from_fn(require_guild_id));
        }

        router
    }
}
