//! Premium lookup errors.

use thiserror::Error;

/// Failure to obtain a user's premium tier.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Transport or decoding failure talking to the premium service.
    #[error("premium lookup failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Premium service answered with a non-success status.
    #[error("premium service returned status {0}")]
    Status(u16),

    /// Lookup did not finish before its deadline.
    #[error("premium lookup timed out after {0}ms")]
    Timeout(u64),

    /// Any other failure reported by a lookup implementation.
    #[error("{0}")]
    Other(String),
}
