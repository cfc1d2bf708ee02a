//! Parent-row checks run before writing a row that references users or products.
//!
//! The foreign keys enforce the same rules; checking first gives a precise
//! message, and the constraint still catches a parent deleted in between.

use sea_orm::{ConnectionTrait, EntityTrait};

use crate::{
    entity::{Products, Users, products, users},
    error::{AppError, AppResult},
};

/// The user a new row will reference; missing is a referential-integrity error.
pub async fn require_user<C: ConnectionTrait>(conn: &C, user_id: i32) -> AppResult<users::Model> {
    Users::find_by_id(user_id)
        .one(conn)
        .await?
        .ok_or_else(|| AppError::missing_parent("user", user_id))
}

/// The product a new row will reference; missing is a referential-integrity error.
pub async fn require_product<C: ConnectionTrait>(
    conn: &C,
    product_id: i32,
) -> AppResult<products::Model> {
    Products::find_by_id(product_id)
        .one(conn)
        .await?
        .ok_or_else(|| AppError::missing_parent("product", product_id))
}

pub async fn require_user_and_product<C: ConnectionTrait>(
    conn: &C,
    user_id: i32,
    product_id: i32,
) -> AppResult<products::Model> {
    require_user(conn, user_id).await?;
    require_product(conn, product_id).await
}

/// The user a read is scoped to; missing is a plain 404.
pub async fn find_user<C: ConnectionTrait>(conn: &C, user_id: i32) -> AppResult<users::Model> {
    Users::find_by_id(user_id)
        .one(conn)
        .await?
        .ok_or(AppError::NotFound)
}

pub async fn find_product<C: ConnectionTrait>(
    conn: &C,
    product_id: i32,
) -> AppResult<products::Model> {
    Products::find_by_id(product_id)
        .one(conn)
        .await?
        .ok_or(AppError::NotFound)
}
