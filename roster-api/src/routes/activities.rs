use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    adapters::inbound::http::{activities_response, ActivitiesResponse, MessageResponse},
    app_state::AppState,
    routes::ApiError,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_activities))
        .route("/:activity_name/signup", post(signup))
        .route("/:activity_name/participant", delete(remove_participant))
}

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    email: String,
}

#[instrument(name = "GET /activities", skip(app_state))]
async fn list_activities(State(app_state): State<AppState>) -> Json<ActivitiesResponse> {
    let roster = app_state.roster_service.list_activities().await;
    Json(activities_response(&roster))
}

#[instrument(name = "POST /activities/:activity_name/signup", skip(app_state, query))]
async fn signup(
    State(app_state): State<AppState>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Query(EmailQuery { email }) = query?;

    app_state
        .roster_service
        .signup(&activity_name, &email)
        .await?;

    Ok(Json(MessageResponse::signed_up(&email, &activity_name)))
}

#[instrument(name = "DELETE /activities/:activity_name/participant", skip(app_state, query))]
async fn remove_participant(
    State(app_state): State<AppState>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Query(EmailQuery { email }) = query?;

    app_state
        .roster_service
        .remove_participant(&activity_name, &email)
        .await?;

    Ok(Json(MessageResponse::unregistered(&email, &activity_name)))
}
