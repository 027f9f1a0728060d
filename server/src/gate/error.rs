//! Gate Error Types

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::premium::LookupError;
use crate::util::error_response;

/// Reasons a gate stage halts the request.
///
/// Every stage returns `Err(GateError)` to stop the chain; no stage halts by
/// writing a response on the side.
#[derive(Debug, Error)]
pub enum GateError {
    /// Route has no guild ID parameter.
    #[error("Missing guild ID")]
    MissingGuildId,

    /// Guild ID is not an unsigned 64-bit decimal.
    #[error("Invalid guild ID")]
    InvalidGuildId,

    /// Caller is not on the admin list.
    #[error("Unauthorized")]
    Unauthorized,

    /// Caller lacks the whitelabel tier on an API route.
    #[error("You must have the whitelabel premium tier")]
    WhitelabelRequired,

    /// Caller lacks the whitelabel tier on a browser route.
    #[error("Redirecting to {0}")]
    PremiumRedirect(String),

    /// Premium lookup failed or timed out.
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl GateError {
    /// HTTP status this error is reported with.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MissingGuildId | Self::InvalidGuildId => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::WhitelabelRequired => StatusCode::PAYMENT_REQUIRED,
            Self::PremiumRedirect(_) => StatusCode::FOUND,
            Self::Lookup(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GateError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::PremiumRedirect(location) => {
                (status, [(header::LOCATION, location)]).into_response()
            }
            other => error_response(status, other.to_string()),
        }
    }
}
