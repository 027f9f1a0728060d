//! Authentication
//!
//! Resolves the caller's identity from an access token before any gate stage
//! runs. Tokens are issued by the dashboard and signed with the shared
//! `JWT_SECRET`.

mod error;
pub mod jwt;
mod middleware;

pub use error::{AuthError, AuthResult};
pub use middleware::{require_auth, TOKEN_COOKIE};
