use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
use password_hash::rand_core::OsRng;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::{
    audit,
    dto::logins::CreateLoginRequest,
    entity::logins::{ActiveModel, Column, Entity as Logins},
    error::{AppError, AppResult},
    models::LoginAccount,
    response::{ApiResponse, Meta},
    services::integrity,
    state::AppState,
};

pub const MIN_PASSWORD_LEN: usize = 8;

/// Stores the credentials of a user. At most one login exists per user and per email.
pub async fn create_login(
    state: &AppState,
    user_id: i32,
    payload: CreateLoginRequest,
) -> AppResult<ApiResponse<LoginAccount>> {
    let CreateLoginRequest { email, password } = payload;
    let email = email.trim().to_string();
    if email.is_empty() {
        return Err(AppError::BadRequest("email must not be empty".into()));
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::BadRequest(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }

    integrity::require_user(&state.orm, user_id).await?;

    let taken = Logins::find()
        .filter(
            sea_orm::Condition::any()
                .add(Column::UserId.eq(user_id))
                .add(Column::Email.eq(email.as_str())),
        )
        .one(&state.orm)
        .await?;
    if let Some(existing) = taken {
        let field = if existing.user_id == user_id {
            "user_id"
        } else {
            "email"
        };
        return Err(AppError::Conflict(format!("login {field} is already taken")));
    }

    let hashed_password = hash_password(&password)?;

    let login = ActiveModel {
        id: NotSet,
        user_id: Set(user_id),
        email: Set(email),
        hashed_password: Set(hashed_password),
    }
    .insert(&state.orm)
    .await?;

    audit::record(
        &state.pool,
        Some(user_id),
        "login_create",
        "logins",
        serde_json::json!({ "login_id": login.id }),
    )
    .await;

    Ok(ApiResponse::success("Login created", login.into(), None))
}

pub async fn get_login(state: &AppState, user_id: i32) -> AppResult<ApiResponse<LoginAccount>> {
    let login = Logins::find()
        .filter(Column::UserId.eq(user_id))
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Login", login.into(), Some(Meta::empty())))
}

/// Argon2id PHC string for `password`.
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();
    Ok(password_hash)
}
