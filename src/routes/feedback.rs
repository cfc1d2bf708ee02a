use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
};

use crate::{
    dto::feedback::{CreateFeedbackRequest, FeedbackList},
    error::AppResult,
    models::Feedback,
    response::ApiResponse,
    services::feedback_service,
    state::AppState,
};

/// Mounted under `/feedback`.
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", delete(delete_feedback))
}

/// Mounted under `/products`.
pub fn product_router() -> Router<AppState> {
    Router::new().route(
        "/{item_id}/feedback",
        get(list_product_feedback).post(create_feedback),
    )
}

/// Mounted under `/users`.
pub fn user_router() -> Router<AppState> {
    Router::new().route("/{user_id}/feedback", get(list_user_feedback))
}

#[utoipa::path(
    post,
    path = "/api/products/{item_id}/feedback",
    params(("item_id" = i32, Path, description = "Product ID")),
    request_body = CreateFeedbackRequest,
    responses(
        (status = 201, description = "Feedback created", body = ApiResponse<Feedback>),
        (status = 400, description = "Rating is not a finite number"),
        (status = 409, description = "User or product does not exist")
    ),
    tag = "Feedback"
)]
pub async fn create_feedback(
    State(state): State<AppState>,
    Path(item_id): Path<i32>,
    Json(payload): Json<CreateFeedbackRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Feedback>>)> {
    let resp = feedback_service::create_feedback(&state, item_id, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    get,
    path = "/api/products/{item_id}/feedback",
    params(("item_id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Feedback for a product", body = ApiResponse<FeedbackList>),
        (status = 404, description = "Product not found")
    ),
    tag = "Feedback"
)]
pub async fn list_product_feedback(
    State(state): State<AppState>,
    Path(item_id): Path<i32>,
) -> AppResult<Json<ApiResponse<FeedbackList>>> {
    let resp = feedback_service::list_product_feedback(&state, item_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/users/{user_id}/feedback",
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Feedback written by a user", body = ApiResponse<FeedbackList>),
        (status = 404, description = "User not found")
    ),
    tag = "Feedback"
)]
pub async fn list_user_feedback(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> AppResult<Json<ApiResponse<FeedbackList>>> {
    let resp = feedback_service::list_user_feedback(&state, user_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/feedback/{id}",
    params(("id" = i32, Path, description = "Feedback ID")),
    responses(
        (status = 200, description = "Deleted", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Feedback not found")
    ),
    tag = "Feedback"
)]
pub async fn delete_feedback(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = feedback_service::delete_feedback(&state, id).await?;
    Ok(Json(resp))
}
