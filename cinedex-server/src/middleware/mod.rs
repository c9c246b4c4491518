//! Request pipeline - an ordered list of interceptors around the route table
//!
//! The pipeline is plain data until [`Pipeline::wrap`] turns it into
//! layers. The first declared stage is outermost: it sees the request
//! first and the response last. The request timeout sits outside every
//! stage.
//!
//! An interceptor may pass the request through, short-circuit with its own
//! response, or observe the response after the inner stages complete.

pub mod auth;
pub mod logging;

use std::time::Duration;

use axum::http::StatusCode;
use axum::middleware::from_fn;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;

/// Default end-to-end request lifetime
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// One stage of the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interceptor {
    /// Log method, path, status and duration
    Logging,
    /// Permissive CORS; answers preflights itself
    Cors,
    /// Require a bearer token (401 otherwise)
    Auth,
    /// Permission check slot
    Permissions,
}

impl Interceptor {
    pub fn name(self) -> &'static str {
        match self {
            Self::Logging => "logging",
            Self::Cors => "cors",
            Self::Auth => "auth",
            Self::Permissions => "permissions",
        }
    }

    fn apply(self, router: Router) -> Router {
        match self {
            Self::Logging => router.layer(from_fn(logging::log_request)),
            Self::Cors => router.layer(CorsLayer::permissive()),
            Self::Auth => router.layer(from_fn(auth::require_bearer)),
            Self::Permissions => router.layer(from_fn(auth::check_permissions)),
        }
    }
}

/// Ordered interceptors plus the request timeout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    stages: Vec<Interceptor>,
    timeout: Duration,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(DEFAULT_REQUEST_TIMEOUT).with(Interceptor::Logging)
    }
}

impl Pipeline {
    /// Empty pipeline with the given request timeout
    pub fn new(timeout: Duration) -> Self {
        Self {
            stages: Vec::new(),
            timeout,
        }
    }

    /// Append a stage inside every stage declared so far.
    pub fn with(mut self, stage: Interceptor) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn stages(&self) -> &[Interceptor] {
        &self.stages
    }

    /// Stage names, outermost first.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Wrap a fully routed, state-resolved router.
    pub fn wrap(&self, router: Router) -> Router {
        // Router::layer makes the most recent layer outermost, so apply in reverse.
        let router = self
            .stages
            .iter()
            .rev()
            .fold(router, |router, stage| stage.apply(router));

        router.layer(TimeoutLayer::with_status_code(
            StatusCode::SERVICE_UNAVAILABLE,
            self.timeout,
        ))
    }
}
