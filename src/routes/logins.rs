use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::logins::CreateLoginRequest,
    error::AppResult,
    models::LoginAccount,
    response::ApiResponse,
    services::login_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/{user_id}/login", get(get_login).post(create_login))
}

#[utoipa::path(
    post,
    path = "/api/users/{user_id}/login",
    params(("user_id" = i32, Path, description = "User ID")),
    request_body = CreateLoginRequest,
    responses(
        (status = 201, description = "Login created", body = ApiResponse<LoginAccount>),
        (status = 400, description = "Bad request"),
        (status = 409, description = "User already has a login, email taken, or user missing")
    ),
    tag = "Logins"
)]
pub async fn create_login(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(payload): Json<CreateLoginRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<LoginAccount>>)> {
    let resp = login_service::create_login(&state, user_id, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    get,
    path = "/api/users/{user_id}/login",
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Login account, without the password hash", body = ApiResponse<LoginAccount>),
        (status = 404, description = "No login for this user")
    ),
    tag = "Logins"
)]
pub async fn get_login(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> AppResult<Json<ApiResponse<LoginAccount>>> {
    let resp = login_service::get_login(&state, user_id).await?;
    Ok(Json(resp))
}
