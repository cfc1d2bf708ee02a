use chrono::NaiveDate;
use sqlx::FromRow;

use crate::{
    audit,
    dto::cart::{AddToCartRequest, CartEntry, CartList, UpdateCartItemRequest},
    error::{AppError, AppResult},
    models::{CartItem, Product},
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    services::integrity,
    state::AppState,
};

#[derive(FromRow)]
struct CartWithProductRow {
    cart_id: i32,
    quantity: i32,
    item_id: i32,
    category: String,
    name: String,
    description: String,
    subcategory: String,
    price: f64,
    avg_rating: f64,
    num_ratings: i32,
    popular: f64,
    new_arrival: f64,
    on_sale: f64,
    arrival_date: NaiveDate,
}

pub async fn list_cart(
    state: &AppState,
    user_id: i32,
    pagination: Pagination,
) -> AppResult<ApiResponse<CartList>> {
    integrity::find_user(&state.orm, user_id).await?;
    let (page, limit, offset) = pagination.normalize();
    let rows = sqlx::query_as::<_, CartWithProductRow>(
        r#"
        SELECT ci.id AS cart_id, ci.quantity,
               p.item_id, p.category, p.name, p.description, p.subcategory, p.price,
               p.avg_rating, p.num_ratings, p.popular, p.new_arrival, p.on_sale, p.arrival_date
        FROM cart_items ci
        JOIN products p ON p.item_id = ci.product_id
        WHERE ci.user_id = $1
        ORDER BY ci.id DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(user_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(&state.pool)
    .await?;

    let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cart_items WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(&state.pool)
        .await?;

    let items = rows
        .into_iter()
        .map(|row| CartEntry {
            id: row.cart_id,
            product: Product {
                item_id: row.item_id,
                category: row.category,
                name: row.name,
                description: row.description,
                subcategory: row.subcategory,
                price: row.price,
                avg_rating: row.avg_rating,
                num_ratings: row.num_ratings,
                popular: row.popular,
                new_arrival: row.new_arrival,
                on_sale: row.on_sale,
                arrival_date: row.arrival_date,
            },
            quantity: row.quantity,
        })
        .collect();

    let meta = Meta::new(page, limit, total.0);
    Ok(ApiResponse::success("OK", CartList { items }, Some(meta)))
}

/// Keeps one row per (user, product): adding a product already in the cart sets its quantity.
pub async fn add_to_cart(
    state: &AppState,
    user_id: i32,
    payload: AddToCartRequest,
) -> AppResult<ApiResponse<CartItem>> {
    validate_quantity(payload.quantity)?;
    integrity::require_user_and_product(&state.orm, user_id, payload.product_id).await?;

    let cart_item: CartItem = sqlx::query_as(
        r#"
        INSERT INTO cart_items (user_id, product_id, quantity)
        VALUES ($1, $2, $3)
        ON CONFLICT (user_id, product_id) DO UPDATE SET quantity = EXCLUDED.quantity
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(payload.product_id)
    .bind(payload.quantity)
    .fetch_one(&state.pool)
    .await?;

    audit::record(
        &state.pool,
        Some(user_id),
        "cart_update",
        "cart_items",
        serde_json::json!({ "product_id": payload.product_id, "quantity": payload.quantity }),
    )
    .await;

    Ok(ApiResponse::success("OK", cart_item, None))
}

pub async fn update_cart_item(
    state: &AppState,
    user_id: i32,
    product_id: i32,
    payload: UpdateCartItemRequest,
) -> AppResult<ApiResponse<CartItem>> {
    validate_quantity(payload.quantity)?;

    let cart_item: Option<CartItem> = sqlx::query_as(
        r#"
        UPDATE cart_items
        SET quantity = $3
        WHERE user_id = $1 AND product_id = $2
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(product_id)
    .bind(payload.quantity)
    .fetch_optional(&state.pool)
    .await?;
    let cart_item = cart_item.ok_or(AppError::NotFound)?;

    audit::record(
        &state.pool,
        Some(user_id),
        "cart_update",
        "cart_items",
        serde_json::json!({ "product_id": product_id, "quantity": payload.quantity }),
    )
    .await;

    Ok(ApiResponse::success("Updated", cart_item, Some(Meta::empty())))
}

pub async fn remove_from_cart(
    state: &AppState,
    user_id: i32,
    product_id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = sqlx::query("DELETE FROM cart_items WHERE product_id = $1 AND user_id = $2")
        .bind(product_id)
        .bind(user_id)
        .execute(&state.pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        &state.pool,
        Some(user_id),
        "cart_remove",
        "cart_items",
        serde_json::json!({ "product_id": product_id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Removed from cart",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

fn validate_quantity(quantity: i32) -> AppResult<()> {
    if quantity <= 0 {
        return Err(AppError::BadRequest(
            "quantity must be greater than 0".to_string(),
        ));
    }
    Ok(())
}
