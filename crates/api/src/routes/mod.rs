//! Routing definitions for the arena API.
//!
//! Routes sit at the root, so `/player`, `/enemy` and `/battle` are what
//! clients call directly.

use arena_workflow::ports::{ArenaStore, RandomGenerator};
use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::Span;

use crate::handlers;
use crate::state::AppState;

const REQUEST_ID_HEADER: &str = "x-request-id";

// =============================================================================
// Router Creation
// =============================================================================

/// Creates the API router with all routes and middleware.
///
/// Every request gets an `x-request-id` (kept when the client sends one),
/// which is recorded on its trace span and echoed on the response.
///
/// # Examples
///
/// ```ignore
/// use arena_api::routes::create_router;
/// use arena_api::state::AppState;
///
/// let state = AppState::new(store, random, PlayerLimits::default());
/// let router = create_router(state);
///
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
/// axum::serve(listener, router).await?;
/// ```
pub fn create_router<Store, Random>(state: AppState<Store, Random>) -> Router
where
    Store: ArenaStore,
    Random: RandomGenerator,
{
    Router::new()
        .route("/health", get(handlers::health_check))
        // Players
        .route(
            "/player",
            get(handlers::list_players::<Store, Random>)
                .post(handlers::create_player::<Store, Random>),
        )
        .route(
            "/player/{nickname}",
            get(handlers::get_player::<Store, Random>)
                .put(handlers::rename_player::<Store, Random>)
                .delete(handlers::delete_player::<Store, Random>),
        )
        // Enemies
        .route(
            "/enemy",
            get(handlers::list_enemies::<Store, Random>)
                .post(handlers::create_enemy::<Store, Random>),
        )
        .route(
            "/enemy/{nickname}",
            get(handlers::get_enemy::<Store, Random>)
                .put(handlers::rename_enemy::<Store, Random>)
                .delete(handlers::delete_enemy::<Store, Random>),
        )
        // Battles
        .route(
            "/battle",
            get(handlers::list_battles::<Store, Random>)
                .post(handlers::start_battle::<Store, Random>),
        )
        .route(
            "/battle/{battle_id}",
            get(handlers::get_battle::<Store, Random>),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(create_cors_layer())
        .with_state(state)
}

fn make_request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id,
    )
}

/// Any origin may call the API.
fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

// =============================================================================
// Tests
// =============================================================================
