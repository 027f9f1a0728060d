//! API Router and Application State
//!
//! Central routing configuration and shared state.

use axum::{extract::State, middleware::from_fn_with_state, routing::get, Extension, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    auth,
    config::Config,
    gate::{PresentationMode, RequestContext, RouteGuard},
    premium::PremiumLookup,
};

/// Shared application state.
///
/// Built once at startup; everything in it is read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration, including the admin and forced-whitelabel lists
    pub config: Arc<Config>,
    /// Premium tier lookup
    pub premium: Arc<dyn PremiumLookup>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(config: Config, premium: Arc<dyn PremiumLookup>) -> Self {
        Self {
            config: Arc::new(config),
            premium,
        }
    }
}

/// Create the main application router.
///
/// - `GET /health`: public
/// - `GET /api/{id}/access`: guild ID, whitelabel (JSON denial)
/// - `GET /api/admin/{id}/access`: guild ID, admin
/// - `GET /import/{id}`: guild ID, whitelabel (redirect denial)
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let whitelabel_api = RouteGuard::new()
        .guild_id()
        .whitelabel(PresentationMode::Api)
        .apply(
            Router::new().route("/api/{id}/access", get(guild_access)),
            &state,
        );

    let admin_api = RouteGuard::new().guild_id().admin().apply(
        Router::new().route("/api/admin/{id}/access", get(guild_access)),
        &state,
    );

    let whitelabel_web = RouteGuard::new()
        .guild_id()
        .whitelabel(PresentationMode::Web)
        .apply(Router::new().route("/import/{id}", get(guild_access)), &state);

    // Auth runs before every route-level gate stage
    let protected_routes = Router::new()
        .merge(whitelabel_api)
        .merge(admin_api)
        .merge(whitelabel_web)
        .layer(from_fn_with_state(state.clone(), auth::require_auth));

    Router::new()
        .route("/health", get(health_check))
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Body returned once every gate stage has passed.
#[derive(Debug, Serialize)]
pub struct AccessResponse {
    /// Always `true`.
    pub success: bool,
    /// Guild the caller may import into.
    pub guild_id: Option<u64>,
}

/// Access probe: reaching it means the caller passed the route's gates.
async fn guild_access(Extension(ctx): Extension<RequestContext>) -> Json<AccessResponse> {
    Json(AccessResponse {
        success: true,
        guild_id: ctx.guild_id(),
    })
}

/// Health check response.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    debug: bool,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        debug: state.config.debug,
    })
}
