//! Ticket Import Server
//!
//! HTTP API for importing ticket data into a guild. Every guild-scoped route
//! sits behind an authorization gate: the guild ID must parse, admin routes
//! need a configured admin, and import routes need the whitelabel tier.

pub mod api;
pub mod auth;
pub mod config;
pub mod gate;
pub mod premium;
pub mod util;
