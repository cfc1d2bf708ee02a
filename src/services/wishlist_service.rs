use crate::{
    audit,
    dto::wishlist::{AddWishlistRequest, WishlistProductList},
    error::{AppError, AppResult},
    models::{Product, WishlistItem},
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    services::integrity,
    state::AppState,
};

pub async fn list_wishlist(
    state: &AppState,
    user_id: i32,
    pagination: Pagination,
) -> AppResult<ApiResponse<WishlistProductList>> {
    integrity::find_user(&state.orm, user_id).await?;
    let (page, limit, offset) = pagination.normalize();
    let products = sqlx::query_as::<_, Product>(
        r#"
        SELECT p.*
        FROM wishlist w
        JOIN products p ON p.item_id = w.product_id
        WHERE w.user_id = $1
        ORDER BY w.id DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(user_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(&state.pool)
    .await?;

    let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM wishlist WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(&state.pool)
        .await?;

    let meta = Meta::new(page, limit, total.0);
    let data = WishlistProductList { items: products };
    Ok(ApiResponse::success("OK", data, Some(meta)))
}

/// Adding a product that is already wishlisted returns the existing row.
pub async fn add_to_wishlist(
    state: &AppState,
    user_id: i32,
    payload: AddWishlistRequest,
) -> AppResult<ApiResponse<WishlistItem>> {
    integrity::require_user_and_product(&state.orm, user_id, payload.product_id).await?;

    let inserted: Option<WishlistItem> = sqlx::query_as(
        r#"
        INSERT INTO wishlist (user_id, product_id)
        VALUES ($1, $2)
        ON CONFLICT (user_id, product_id) DO NOTHING
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(payload.product_id)
    .fetch_optional(&state.pool)
    .await?;

    let item = match inserted {
        Some(item) => item,
        None => {
            sqlx::query_as("SELECT * FROM wishlist WHERE user_id = $1 AND product_id = $2")
                .bind(user_id)
                .bind(payload.product_id)
                .fetch_one(&state.pool)
                .await?
        }
    };

    audit::record(
        &state.pool,
        Some(user_id),
        "wishlist_add",
        "wishlist",
        serde_json::json!({ "product_id": payload.product_id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Added to wishlist",
        item,
        Some(Meta::empty()),
    ))
}

pub async fn remove_from_wishlist(
    state: &AppState,
    user_id: i32,
    product_id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = sqlx::query("DELETE FROM wishlist WHERE user_id = $1 AND product_id = $2")
        .bind(user_id)
        .bind(product_id)
        .execute(&state.pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        &state.pool,
        Some(user_id),
        "wishlist_remove",
        "wishlist",
        serde_json::json!({ "product_id": product_id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Removed from wishlist",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
