use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect, Set,
};
use sea_orm::ActiveValue::NotSet;

use crate::{
    audit,
    dto::users::{CreateUserRequest, UpdateUserRequest, UserList},
    entity::users::{ActiveModel, Column, Entity as Users},
    error::{AppError, AppResult},
    models::User,
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    state::AppState,
};

pub async fn create_user(
    state: &AppState,
    payload: CreateUserRequest,
) -> AppResult<ApiResponse<User>> {
    let email = normalize_email(&payload.email)?;
    let signup_date = payload
        .signup_date
        .unwrap_or_else(|| Utc::now().date_naive());

    let user = ActiveModel {
        user_id: NotSet,
        email: Set(email),
        age: Set(payload.age),
        gender: Set(payload.gender),
        signup_date: Set(signup_date),
        preferences: Set(payload.preferences),
    }
    .insert(&state.orm)
    .await?;

    audit::record(
        &state.pool,
        Some(user.user_id),
        "user_create",
        "users",
        serde_json::json!({ "user_id": user.user_id }),
    )
    .await;

    Ok(ApiResponse::success("User created", user.into(), None))
}

pub async fn get_user(state: &AppState, user_id: i32) -> AppResult<ApiResponse<User>> {
    let user = Users::find_by_id(user_id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("User", user.into(), Some(Meta::empty())))
}

pub async fn list_users(
    state: &AppState,
    pagination: Pagination,
) -> AppResult<ApiResponse<UserList>> {
    let (page, limit, offset) = pagination.normalize();
    let finder = Users::find().order_by_asc(Column::UserId);

    let total = finder.clone().count(&state.orm).await? as i64;
    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(User::from)
        .collect();

    Ok(ApiResponse::success(
        "Users",
        UserList { items },
        Some(Meta::new(page, limit, total)),
    ))
}

pub async fn update_user(
    state: &AppState,
    user_id: i32,
    payload: UpdateUserRequest,
) -> AppResult<ApiResponse<User>> {
    let existing = Users::find_by_id(user_id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: ActiveModel = existing.into();
    if let Some(email) = payload.email {
        active.email = Set(normalize_email(&email)?);
    }
    if let Some(age) = payload.age {
        active.age = Set(age);
    }
    if let Some(gender) = payload.gender {
        active.gender = Set(gender);
    }
    if let Some(signup_date) = payload.signup_date {
        active.signup_date = Set(signup_date);
    }
    if let Some(preferences) = payload.preferences {
        active.preferences = Set(preferences);
    }

    let user = active.update(&state.orm).await?;

    audit::record(
        &state.pool,
        Some(user.user_id),
        "user_update",
        "users",
        serde_json::json!({ "user_id": user.user_id }),
    )
    .await;

    Ok(ApiResponse::success("Updated", user.into(), Some(Meta::empty())))
}

/// Fails with a referential-integrity error while any row still references the user.
pub async fn delete_user(
    state: &AppState,
    user_id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Users::delete_by_id(user_id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        &state.pool,
        None,
        "user_delete",
        "users",
        serde_json::json!({ "user_id": user_id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

fn normalize_email(email: &str) -> AppResult<String> {
    let email = email.trim();
    if email.is_empty() {
        return Err(AppError::BadRequest("email must not be empty".into()));
    }
    Ok(email.to_string())
}
