use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::Expr;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::{
    audit,
    dto::products::{CreateProductRequest, ProductList, UpdateProductRequest},
    entity::products::{ActiveModel, Column, Entity as Products},
    error::{AppError, AppResult},
    models::Product,
    response::{ApiResponse, Meta},
    routes::params::{ProductQuery, ProductSortBy, SortOrder},
    state::AppState,
};

pub async fn list_products(
    state: &AppState,
    query: ProductQuery,
) -> AppResult<ApiResponse<ProductList>> {
    let (page, limit, offset) = query.pagination().normalize();
    let mut condition = Condition::all();

    if let Some(search) = query.q.as_ref().filter(|s| !s.is_empty()) {
        let pattern = format!("%{}%", search);
        condition = condition.add(
            Condition::any()
                .add(Expr::col(Column::Name).ilike(pattern.clone()))
                .add(Expr::col(Column::Description).ilike(pattern)),
        );
    }

    if let Some(category) = query.category.as_ref().filter(|s| !s.is_empty()) {
        condition = condition.add(Column::Category.eq(category.clone()));
    }

    if let Some(subcategory) = query.subcategory.as_ref().filter(|s| !s.is_empty()) {
        condition = condition.add(Column::Subcategory.eq(subcategory.clone()));
    }

    if let Some(min_price) = query.min_price {
        condition = condition.add(Column::Price.gte(min_price));
    }

    if let Some(max_price) = query.max_price {
        condition = condition.add(Column::Price.lte(max_price));
    }

    let sort_by = query.sort_by.unwrap_or(ProductSortBy::ArrivalDate);
    let sort_order = query.sort_order.unwrap_or(SortOrder::Desc);
    let sort_col = match sort_by {
        ProductSortBy::ArrivalDate => Column::ArrivalDate,
        ProductSortBy::Price => Column::Price,
        ProductSortBy::Name => Column::Name,
        ProductSortBy::AvgRating => Column::AvgRating,
    };

    let mut finder = Products::find().filter(condition);
    finder = match sort_order {
        SortOrder::Asc => finder.order_by_asc(sort_col),
        SortOrder::Desc => finder.order_by_desc(sort_col),
    };
    // Stable pages when the sort column has ties.
    finder = finder.order_by_asc(Column::ItemId);

    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Product::from)
        .collect();

    let meta = Meta::new(page, limit, total);
    let data = ProductList { items };
    Ok(ApiResponse::success("Products", data, Some(meta)))
}

pub async fn get_product(state: &AppState, item_id: i32) -> AppResult<ApiResponse<Product>> {
    let result = Products::find_by_id(item_id)
        .one(&state.orm)
        .await?
        .map(Product::from);
    let result = match result {
        Some(p) => p,
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success("Product", result, None))
}

pub async fn create_product(
    state: &AppState,
    payload: CreateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    validate_price(payload.price)?;
    let active = ActiveModel {
        item_id: NotSet,
        category: Set(payload.category),
        name: Set(payload.name),
        description: Set(payload.description),
        subcategory: Set(payload.subcategory),
        price: Set(payload.price),
        avg_rating: Set(payload.avg_rating),
        num_ratings: Set(payload.num_ratings),
        popular: Set(payload.popular),
        new_arrival: Set(payload.new_arrival),
        on_sale: Set(payload.on_sale),
        arrival_date: Set(payload
            .arrival_date
            .unwrap_or_else(|| Utc::now().date_naive())),
    };
    let product = active.insert(&state.orm).await?;

    audit::record(
        &state.pool,
        None,
        "product_create",
        "products",
        serde_json::json!({ "product_id": product.item_id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Product created",
        product.into(),
        Some(Meta::empty()),
    ))
}

pub async fn update_product(
    state: &AppState,
    item_id: i32,
    payload: UpdateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    let existing = Products::find_by_id(item_id).one(&state.orm).await?;
    let existing = match existing {
        Some(p) => p,
        None => return Err(AppError::NotFound),
    };

    let mut active: ActiveModel = existing.into();
    if let Some(category) = payload.category {
        active.category = Set(category);
    }
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(description) = payload.description {
        active.description = Set(description);
    }
    if let Some(subcategory) = payload.subcategory {
        active.subcategory = Set(subcategory);
    }
    if let Some(price) = payload.price {
        validate_price(price)?;
        active.price = Set(price);
    }
    if let Some(avg_rating) = payload.avg_rating {
        active.avg_rating = Set(avg_rating);
    }
    if let Some(num_ratings) = payload.num_ratings {
        active.num_ratings = Set(num_ratings);
    }
    if let Some(popular) = payload.popular {
        active.popular = Set(popular);
    }
    if let Some(new_arrival) = payload.new_arrival {
        active.new_arrival = Set(new_arrival);
    }
    if let Some(on_sale) = payload.on_sale {
        active.on_sale = Set(on_sale);
    }
    if let Some(arrival_date) = payload.arrival_date {
        active.arrival_date = Set(arrival_date);
    }

    let product = active.update(&state.orm).await?;

    audit::record(
        &state.pool,
        None,
        "product_update",
        "products",
        serde_json::json!({ "product_id": product.item_id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Updated",
        product.into(),
        Some(Meta::empty()),
    ))
}

/// Fails with a referential-integrity error while any row still references the product.
pub async fn delete_product(
    state: &AppState,
    item_id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Products::delete_by_id(item_id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        &state.pool,
        None,
        "product_delete",
        "products",
        serde_json::json!({ "product_id": item_id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

fn validate_price(price: f64) -> AppResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(AppError::BadRequest(
            "price must be a non-negative number".to_string(),
        ));
    }
    Ok(())
}
