use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::handlers::{protected, public};
use crate::middleware::jwt_auth_middleware;
use crate::state::AppState;

/// Build the full router with global middleware
pub fn app(state: AppState, config: &AppConfig) -> Router {
    let router = Router::new()
        .merge(public_routes())
        .merge(protected_routes(state.clone()))
        .fallback(public::not_found)
        .layer(DefaultBodyLimit::max(config.server.max_request_size_bytes))
        .layer(TraceLayer::new_for_http());

    let router = if config.security.enable_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.with_state(state)
}

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(public::root))
        .route("/health", get(public::health))
        .route("/signup", post(public::signup))
        .route("/login", post(public::login))
        .route("/contact", post(public::submit_contact))
        .route("/travel-booking", post(public::submit_travel_booking))
}

fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/protected", get(protected::greeting))
        .route_layer(from_fn_with_state(state, jwt_auth_middleware))
}
