use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_book::create_book;
use super::handlers::delete_book::delete_book;
use super::handlers::get_book::get_book;
use super::handlers::list_books::list_books;
use super::handlers::login::login;
use super::handlers::my_books::my_books;
use super::handlers::signup::signup;
use super::handlers::update_book::update_book;
use super::middleware::authenticate as auth_middleware;
use crate::book::ports::BookServicePort;
use crate::user::ports::AuthServicePort;

/// Shared handler state.
///
/// Services are stored behind their ports so the same router runs on
/// any adapter pairing.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub book_service: Arc<dyn BookServicePort>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    auth_service: Arc<dyn AuthServicePort>,
    book_service: Arc<dyn BookServicePort>,
    authenticator: Arc<Authenticator>,
    static_dir: &str,
) -> Router {
    let state = AppState {
        auth_service,
        book_service,
        authenticator,
    };

    let public_routes = Router::new()
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/health", get(health));

    // my-books sits next to :book_id; the router prefers the static segment
    let protected_routes = Router::new()
        .route("/api/books", post(create_book))
        .route("/api/books", get(list_books))
        .route("/api/books/my-books", get(my_books))
        .route("/api/books/:book_id", get(get_book))
        .route("/api/books/:book_id", put(update_book))
        .route("/api/books/:book_id", delete(delete_book))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .fallback_service(ServeDir::new(static_dir))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}
