//! Premium Entitlement Lookup
//!
//! Tier model and the clients used to ask the premium service which tier a
//! user holds. Lookups are never cached or retried here.

pub mod client;
pub mod error;
pub mod tier;

pub use client::{
    HttpPremiumClient, LookupFuture, PremiumLookup, StaticPremiumClient, TimeoutLookup,
};
pub use error::LookupError;
pub use tier::PremiumTier;
