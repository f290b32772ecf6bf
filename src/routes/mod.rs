//! HTTP handlers (DTO boundary).

pub mod activities;

use axum::{
    response::Redirect,
    routing::{delete, get, post},
    Router,
};
use std::path::Path;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::infra::Store;

pub const INDEX_PAGE: &str = "/static/index.html";

pub fn router(store: Store, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary(INDEX_PAGE) }))
        .route("/activities", get(activities::list_activities))
        .route("/activities/{activity_name}/signup", post(activities::signup))
        .route(
            "/activities/{activity_name}/unregister",
            delete(activities::unregister),
        )
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}
