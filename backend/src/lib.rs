//! Intake server for the Ogbomoso Ignite site: serves the built frontend and
//! accepts form submissions.

use std::num::NonZeroU32;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use governor::{clock::DefaultClock, state::keyed::DefaultKeyedStateStore, Quota, RateLimiter};
use nonzero_ext::nonzero;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod config;
pub mod store;
pub mod handlers {
    pub mod client_key;
    pub mod forms_handlers;
}

use config::ServerConfig;
use handlers::forms_handlers;
use store::SubmissionStore;

pub struct AppState {
    pub submissions: SubmissionStore,
    pub form_limiter: RateLimiter<String, DefaultKeyedStateStore<String>, DefaultClock>,
    pub trust_forwarded_for: bool,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        let per_minute =
            NonZeroU32::new(config.form_rate_limit_per_minute).unwrap_or(nonzero!(5u32));
        Self {
            submissions: SubmissionStore::new(config.max_stored_per_form),
            form_limiter: RateLimiter::keyed(Quota::per_minute(per_minute)),
            trust_forwarded_for: config.trust_forwarded_for,
        }
    }

    /// Drops limiter entries for clients whose quota has fully replenished.
    pub fn prune_limiter(&self) {
        let before = self.form_limiter.len();
        self.form_limiter.retain_recent();
        self.form_limiter.shrink_to_fit();
        tracing::debug!(
            "Pruned rate limiter keys: {} -> {}",
            before,
            self.form_limiter.len()
        );
    }
}

pub fn build_router(state: Arc<AppState>, config: &ServerConfig) -> Router {
    let cors = match config.frontend_url.parse() {
        Ok(origin) => CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_origin(AllowOrigin::exact(origin))
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
                axum::http::header::ORIGIN,
            ]),
        Err(e) => {
            tracing::warn!(
                "Invalid FRONTEND_URL {}: {}, CORS disabled",
                config.frontend_url,
                e
            );
            CorsLayer::new()
        }
    };

    let api_routes = Router::new()
        .route("/api/health", get(forms_handlers::health_check))
        .route("/api/forms/{form}", post(forms_handlers::submit_form));

    Router::new()
        .merge(api_routes)
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}
