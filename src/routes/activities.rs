use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::app::{activity_list, activity_signup, activity_unregister, ActivityMap, MessageDto};
use crate::error::AppError;
use crate::infra::Store;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// Run a blocking use case off the async workers. The connection it opens is
/// dropped before this returns.
async fn blocking<T, F>(f: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await?
}

pub async fn list_activities(State(store): State<Store>) -> Result<Json<ActivityMap>, AppError> {
    blocking(move || activity_list(&store)).await.map(Json)
}

pub async fn signup(
    State(store): State<Store>,
    Path(activity_name): Path<String>,
    Query(q): Query<EmailQuery>,
) -> Result<Json<MessageDto>, AppError> {
    blocking(move || activity_signup(&store, &activity_name, &q.email))
        .await
        .map(Json)
}

pub async fn unregister(
    State(store): State<Store>,
    Path(activity_name): Path<String>,
    Query(q): Query<EmailQuery>,
) -> Result<Json<MessageDto>, AppError> {
    blocking(move || activity_unregister(&store, &activity_name, &q.email))
        .await
        .map(Json)
}
