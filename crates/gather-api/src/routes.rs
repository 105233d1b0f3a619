//! Router for the groups resource

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers::{groups, health};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Groups resource
        .route("/groups", get(groups::index).post(groups::create))
        .route("/groups/new", get(groups::new))
        .route(
            "/groups/{id}",
            get(groups::show)
                .put(groups::update)
                .patch(groups::update)
                .delete(groups::destroy),
        )
        .route("/groups/{id}/edit", get(groups::edit))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
