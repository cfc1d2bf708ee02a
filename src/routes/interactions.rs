use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::interactions::{
        CreateInteractionRequest, CreateNegInteractionRequest, InteractionList,
        NegInteractionList,
    },
    error::AppResult,
    models::{Interaction, NegInteraction},
    response::ApiResponse,
    services::interaction_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{user_id}/interactions",
            get(list_interactions).post(record_interaction),
        )
        .route(
            "/{user_id}/neg-interactions",
            get(list_neg_interactions).post(record_neg_interaction),
        )
}

#[utoipa::path(
    post,
    path = "/api/users/{user_id}/interactions",
    params(("user_id" = i32, Path, description = "User ID")),
    request_body = CreateInteractionRequest,
    responses(
        (status = 201, description = "Positive event recorded", body = ApiResponse<Interaction>),
        (status = 409, description = "User or product does not exist")
    ),
    tag = "Interactions"
)]
pub async fn record_interaction(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(payload): Json<CreateInteractionRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Interaction>>)> {
    let resp = interaction_service::record_interaction(&state, user_id, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    get,
    path = "/api/users/{user_id}/interactions",
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Positive events of a user", body = ApiResponse<InteractionList>),
        (status = 404, description = "User not found")
    ),
    tag = "Interactions"
)]
pub async fn list_interactions(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> AppResult<Json<ApiResponse<InteractionList>>> {
    let resp = interaction_service::list_interactions(&state, user_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/users/{user_id}/neg-interactions",
    params(("user_id" = i32, Path, description = "User ID")),
    request_body = CreateNegInteractionRequest,
    responses(
        (status = 201, description = "Negative event recorded", body = ApiResponse<NegInteraction>),
        (status = 409, description = "User or product does not exist")
    ),
    tag = "Interactions"
)]
pub async fn record_neg_interaction(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(payload): Json<CreateNegInteractionRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<NegInteraction>>)> {
    let resp = interaction_service::record_neg_interaction(&state, user_id, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    get,
    path = "/api/users/{user_id}/neg-interactions",
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Negative events of a user", body = ApiResponse<NegInteractionList>),
        (status = 404, description = "User not found")
    ),
    tag = "Interactions"
)]
pub async fn list_neg_interactions(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> AppResult<Json<ApiResponse<NegInteractionList>>> {
    let resp = interaction_service::list_neg_interactions(&state, user_id).await?;
    Ok(Json(resp))
}
