//! Authentication Middleware

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use tracing::debug;

use crate::api::AppState;
use crate::gate::RequestContext;

use super::error::AuthError;
use super::jwt::validate_access_token;

/// Cookie carrying the access token for browser routes.
pub const TOKEN_COOKIE: &str = "token";

/// Middleware to require authentication.
///
/// Takes the token from a `Bearer` Authorization header, falling back to the
/// token cookie so browser routes work. Validates it and inserts a
/// [`RequestContext`] for the caller into request extensions.
///
/// # Usage
///
/// ```ignore
/// Router::new()
///     .route("/protected", get(handler))
///     .layer(axum::middleware::from_fn_with_state(state, require_auth))
/// ```
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = match request.headers().get(AUTHORIZATION) {
        Some(header) => header
            .to_str()
            .ok()
            .and_then(|h| h.strip_prefix("Bearer "))
            .ok_or(AuthError::InvalidAuthHeader)?
            .to_string(),
        None => CookieJar::from_headers(request.headers())
            .get(TOKEN_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .ok_or(AuthError::MissingToken)?,
    };

    let claims = validate_access_token(&token, &state.config.jwt_secret).inspect_err(|e| {
        debug!(error = %e, "Rejected access token");
    })?;
    let caller_id = claims.user_id()?;

    request
        .extensions_mut()
        .insert(RequestContext::new(caller_id));

    Ok(next.run(request).await)
}
