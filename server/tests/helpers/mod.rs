//! Reusable test helpers for HTTP integration tests.
//!
//! Provides `TestApp` for building and sending requests through the full axum
//! router, premium lookup doubles, and body helpers.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::body::Body;
use axum::http::{self, header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use import_server::api::{create_router, AppState};
use import_server::auth::jwt;
use import_server::config::Config;
use import_server::premium::{LookupError, LookupFuture, PremiumLookup, PremiumTier};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower::ServiceExt;

/// Caller that is on the admin list of [`test_config`].
pub const ADMIN_ID: u64 = 100;
/// Caller that is on the forced-whitelabel list of [`test_config`].
pub const FORCED_ID: u64 = 200;
/// Caller with no special configuration.
pub const USER_ID: u64 = 300;

/// Test config with one admin and one forced-whitelabel user.
pub fn test_config() -> Config {
    Config {
        admins: [ADMIN_ID].into_iter().collect(),
        force_whitelabel: [FORCED_ID].into_iter().collect(),
        ..Config::default_for_test()
    }
}

// ============================================================================
// Premium lookup doubles
// ============================================================================

/// Lookup with per-user tiers that counts how often it is called.
#[derive(Default)]
pub struct MockPremium {
    tiers: HashMap<u64, PremiumTier>,
    default_tier: Option<PremiumTier>,
    fail_with: Option<String>,
    calls: AtomicUsize,
}

impl MockPremium {
    /// Every user holds `tier`.
    pub fn with_tier(tier: PremiumTier) -> Self {
        Self {
            default_tier: Some(tier),
            ..Self::default()
        }
    }

    /// Every lookup fails with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    /// Give `user_id` a specific tier.
    pub fn user(mut self, user_id: u64, tier: PremiumTier) -> Self {
        self.tiers.insert(user_id, tier);
        self
    }

    /// Number of lookups performed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PremiumLookup for MockPremium {
    fn tier_by_user(&self, user_id: u64, _force_refresh: bool) -> LookupFuture<'_> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let result = match &self.fail_with {
            Some(message) => Err(LookupError::Other(message.clone())),
            None => Ok(self
                .tiers
                .get(&user_id)
                .copied()
                .or(self.default_tier)
                .unwrap_or(PremiumTier::None)),
        };
        Box::pin(async move { result })
    }
}

// ============================================================================
// Test App
// ============================================================================

/// A test application wrapping the full axum router.
pub struct TestApp {
    pub router: Router,
    pub config: Arc<Config>,
    pub premium: Arc<MockPremium>,
}

impl TestApp {
    /// Build the app with [`test_config`] and the given premium double.
    pub fn new(premium: MockPremium) -> Self {
        Self::with_config(test_config(), premium)
    }

    /// Build the app with a custom config.
    pub fn with_config(config: Config, premium: MockPremium) -> Self {
        let premium = Arc::new(premium);
        let state = AppState::new(config, premium.clone());
        let config = state.config.clone();

        Self {
            router: create_router(state),
            config,
            premium,
        }
    }

    /// Build an HTTP request with the given method and URI.
    pub fn request(method: Method, uri: &str) -> http::request::Builder {
        Request::builder().method(method).uri(uri)
    }

    /// Access token for `user_id`.
    pub fn token(&self, user_id: u64) -> String {
        token_for(&self.config, user_id)
    }

    /// `GET uri` authenticated as `user_id` via the Authorization header.
    pub async fn get_as(&self, uri: &str, user_id: u64) -> Response<Body> {
        let request = Self::request(Method::GET, uri)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token(user_id)))
            .body(Body::empty())
            .unwrap();
        self.oneshot(request).await
    }

    /// Send a request through the router via `tower::ServiceExt::oneshot`.
    pub async fn oneshot(&self, request: Request<Body>) -> Response<Body> {
        send(&self.router, request).await
    }
}

/// Access token for `user_id` signed with the config's secret.
pub fn token_for(config: &Config, user_id: u64) -> String {
    jwt::create_access_token(user_id, &config.jwt_secret, 900).expect("Failed to create token")
}

/// Send a request through any router via `tower::ServiceExt::oneshot`.
pub async fn send(router: &Router, request: Request<Body>) -> Response<Body> {
    router
        .clone()
        .oneshot(request)
        .await
        .expect("oneshot request failed")
}

/// Collect a response body into bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes()
        .to_vec()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).expect("Body is not JSON")
}

// ============================================================================
// Test Server
// ============================================================================

/// A running server bound to a random port.
pub struct TestServer {
    /// Base URL for HTTP requests (e.g., `http://127.0.0.1:12345`).
    pub url: String,
    /// Handle to the server task for cleanup.
    _handle: JoinHandle<()>,
}

/// Spawn a real HTTP server on a random port.
pub async fn spawn_test_server(router: Router) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let addr = listener.local_addr().expect("Failed to get local addr");

    let handle = tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Test server failed");
    });

    TestServer {
        url: format!("http://{addr}"),
        _handle: handle,
    }
}
