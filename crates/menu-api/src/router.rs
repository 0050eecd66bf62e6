//! Route table and middleware stack

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing::warn;

use menu_shared::config::AppSettings;

use crate::handlers::{health, menu_item};
use crate::state::AppState;

/// Every route, without middleware or state.
pub fn build_router() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        // Menu items (static segments win over `{id}`)
        .route("/menuitem", get(menu_item::list_all).post(menu_item::create))
        .route("/menuitem/search", get(menu_item::search))
        .route("/menuitem/category/{category}", get(menu_item::list_by_category))
        .route("/menuitem/dietary/{dietary_tag}", get(menu_item::list_by_dietary_tag))
        .route("/menuitem/name/{name}", get(menu_item::find_by_name))
        .route(
            "/menuitem/{id}",
            get(menu_item::get_by_id)
                .put(menu_item::update)
                .delete(menu_item::delete),
        )
}

/// Routes plus state, CORS, tracing, and `x-request-id` handling.
pub fn build_app(state: AppState, settings: &AppSettings) -> Router {
    build_router()
        .with_state(state)
        .layer(cors_layer(&settings.cors_origins))
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    if origins.is_empty() {
        return layer.allow_origin(AllowOrigin::any());
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}
