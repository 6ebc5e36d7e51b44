pub mod auth;
pub mod config;
pub mod db;
pub mod email;
pub mod error;
pub mod matching;
pub mod models;
pub mod rate_limit;
pub mod routes;
pub mod seed;
pub mod state;
pub mod upload;

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, Method};
use axum::Router;
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::email::Mailer;
use crate::rate_limit::LoginRateLimiter;
use crate::state::{AppState, SharedState};

pub fn build_app(pool: PgPool, config: Config) -> Router {
    let mailer = config.smtp.as_ref().and_then(|smtp| match Mailer::new(smtp) {
        Ok(mailer) => {
            tracing::info!("SMTP configured");
            Some(Arc::new(mailer))
        }
        Err(e) => {
            tracing::warn!("SMTP not available: {e}");
            None
        }
    });

    let cors = cors_layer(&config);
    let max_body_size = config.max_body_size;
    let upload_dir = config.upload_dir.clone();

    let state: SharedState = Arc::new(AppState {
        pool,
        config,
        mailer,
        login_limiter: LoginRateLimiter::new(),
    });

    Router::new()
        .merge(routes::api_routes())
        .nest_service("/uploads", ServeDir::new(upload_dir))
        .route("/health", axum::routing::get(health))
        .layer(RequestBodyLimitLayer::new(max_body_size))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ];
    let headers = [
        HeaderName::from_static("content-type"),
        HeaderName::from_static("x-auth-token"),
        HeaderName::from_static("authorization"),
    ];

    if config.cors_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(headers);
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers(headers)
}

async fn health() -> &'static str {
    "ok"
}
