//! Guild ID route parameter.

use axum::{
    extract::{rejection::RawPathParamsRejection, FromRequestParts, RawPathParams, Request},
    middleware::Next,
    response::Response,
    Extension,
};
use tracing::debug;

use super::{GateError, RequestContext};

/// Name of the route parameter carrying the guild ID.
pub const GUILD_ID_PARAM: &str = "id";

/// Parse a raw guild ID route parameter.
///
/// Only plain ASCII digits are accepted: no sign, no whitespace, and the value
/// must fit in a `u64`.
pub fn parse_guild_id(raw: Option<&str>) -> Result<u64, GateError> {
    let raw = raw.ok_or(GateError::MissingGuildId)?;
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GateError::InvalidGuildId);
    }
    raw.parse().map_err(|_| GateError::InvalidGuildId)
}

/// Middleware that resolves the `{id}` route parameter into the request context.
///
/// Must be installed with `route_layer` so path parameters are available.
#[tracing::instrument(skip_all)]
pub async fn require_guild_id(
    Extension(mut ctx): Extension<RequestContext>,
    request: Request,
    next: Next,
) -> Result<Response, GateError> {
    let (mut parts, body) = request.into_parts();
    let params = match RawPathParams::from_request_parts(&mut parts, &()).await {
        Ok(params) => Some(params),
        Err(RawPathParamsRejection::InvalidUtf8InPathParam(_)) => {
            return Err(GateError::InvalidGuildId);
        }
        Err(_) => None,
    };
    let raw = params.as_ref().and_then(|params| {
        params
            .iter()
            .find(|(key, _)| *key == GUILD_ID_PARAM)
            .map(|(_, value)| value)
    });

    let guild_id = parse_guild_id(raw).inspect_err(|e| {
        debug!(
            caller_id = ctx.caller_id(),
            raw = ?raw,
            error = %e,
            "Rejected guild ID"
        );
    })?;

    ctx.set_guild_id(guild_id);
    let mut request = Request::from_parts(parts, body);
    request.extensions_mut().insert(ctx);

    Ok(next.run(request).await)
}
