//! Admin-only routes.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
    Extension,
};
use tracing::debug;

use super::{GateError, RequestContext};
use crate::api::AppState;
use crate::config::UserIdSet;

/// Allow the caller iff they are on the admin list.
pub fn authorize_admin(admins: &UserIdSet, ctx: &RequestContext) -> Result<(), GateError> {
    if admins.contains(ctx.caller_id()) {
        Ok(())
    } else {
        Err(GateError::Unauthorized)
    }
}

/// Middleware that restricts a route to configured admins.
#[tracing::instrument(skip_all)]
pub async fn require_admin(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    request: Request,
    next: Next,
) -> Result<Response, GateError> {
    authorize_admin(&state.config.admins, &ctx).inspect_err(|_| {
        debug!(caller_id = ctx.caller_id(), "Caller is not an admin");
    })?;

    Ok(next.run(request).await)
}
