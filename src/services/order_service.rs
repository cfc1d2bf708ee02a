use std::collections::{BTreeMap, HashMap};

use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};

use crate::{
    audit,
    dto::orders::{
        CheckoutItem, CheckoutRequest, OrderLine, OrderList, OrderWithItems,
        UpdateOrderStatusRequest,
    },
    entity::{
        cart_items::{Column as CartCol, Entity as CartItems},
        orders::{ActiveModel as OrderActive, Column as OrderCol, Entity as Orders},
        products::{Column as ProdCol, Entity as Products},
    },
    error::{AppError, AppResult},
    models::{Order, Product},
    response::{ApiResponse, Meta},
    routes::params::{OrderListQuery, SortOrder},
    services::integrity,
    state::AppState,
};

/// Status given to every order created by checkout.
pub const STATUS_PROCESSING: &str = "processing";

/// Places an order for `items` and takes the purchased products out of the user's cart.
///
/// Runs in one transaction: on any error nothing is written.
pub async fn checkout(
    state: &AppState,
    payload: CheckoutRequest,
) -> AppResult<ApiResponse<OrderWithItems>> {
    let quantities = merge_items(&payload.items)?;
    let product_ids: Vec<i32> = quantities.keys().copied().collect();

    let txn = state.orm.begin().await?;

    integrity::require_user(&txn, payload.user_id).await?;

    let mut products: HashMap<i32, Product> = Products::find()
        .filter(ProdCol::ItemId.is_in(product_ids.clone()))
        .all(&txn)
        .await?
        .into_iter()
        .map(|p| (p.item_id, Product::from(p)))
        .collect();

    let mut priced = Vec::with_capacity(quantities.len());
    for (product_id, quantity) in &quantities {
        let product = products
            .remove(product_id)
            .ok_or_else(|| AppError::missing_parent("product", *product_id))?;
        priced.push((product, *quantity));
    }
    let (lines, total_amount) = price_lines(&priced);

    let order = OrderActive {
        order_id: NotSet,
        user_id: Set(payload.user_id),
        total_amount: Set(total_amount),
        order_date: Set(Utc::now().naive_utc()),
        status: Set(STATUS_PROCESSING.to_string()),
    }
    .insert(&txn)
    .await?;

    CartItems::delete_many()
        .filter(CartCol::UserId.eq(payload.user_id))
        .filter(CartCol::ProductId.is_in(product_ids))
        .exec(&txn)
        .await?;

    txn.commit().await?;

    tracing::info!(
        order_id = order.order_id,
        user_id = order.user_id,
        total_amount = order.total_amount,
        "checkout completed"
    );

    audit::record(
        &state.pool,
        Some(order.user_id),
        "checkout",
        "orders",
        serde_json::json!({ "order_id": order.order_id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Checkout success",
        OrderWithItems {
            order: order.into(),
            items: lines,
        },
        Some(Meta::empty()),
    ))
}

/// Orders of one user, newest first unless `sort_order=asc`.
pub async fn order_history(
    state: &AppState,
    user_id: i32,
    query: OrderListQuery,
) -> AppResult<ApiResponse<OrderList>> {
    integrity::find_user(&state.orm, user_id).await?;

    let (page, limit, offset) = query.pagination().normalize();
    let mut condition = Condition::all().add(OrderCol::UserId.eq(user_id));
    if let Some(status) = query.status.as_ref().filter(|s| !s.is_empty()) {
        condition = condition.add(OrderCol::Status.eq(status.clone()));
    }

    let sort_order = query.sort_order.unwrap_or(SortOrder::Desc);

    let mut finder = Orders::find().filter(condition);
    finder = match sort_order {
        SortOrder::Asc => finder
            .order_by_asc(OrderCol::OrderDate)
            .order_by_asc(OrderCol::OrderId),
        SortOrder::Desc => finder
            .order_by_desc(OrderCol::OrderDate)
            .order_by_desc(OrderCol::OrderId),
    };

    let total = finder.clone().count(&state.orm).await? as i64;

    let orders = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Order::from)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success(
        "Ok",
        OrderList { items: orders },
        Some(meta),
    ))
}

pub async fn get_order(
    state: &AppState,
    user_id: i32,
    order_id: i32,
) -> AppResult<ApiResponse<Order>> {
    let order = Orders::find()
        .filter(
            Condition::all()
                .add(OrderCol::UserId.eq(user_id))
                .add(OrderCol::OrderId.eq(order_id)),
        )
        .one(&state.orm)
        .await?;
    let order = match order {
        Some(o) => o,
        None => return Err(AppError::NotFound),
    };

    Ok(ApiResponse::success("OK", order.into(), Some(Meta::empty())))
}

/// Status is a free-text label; only blank values are rejected.
pub async fn update_order_status(
    state: &AppState,
    user_id: i32,
    order_id: i32,
    payload: UpdateOrderStatusRequest,
) -> AppResult<ApiResponse<Order>> {
    let status = payload.status.trim();
    if status.is_empty() {
        return Err(AppError::BadRequest("status must not be empty".into()));
    }

    let existing = Orders::find()
        .filter(
            Condition::all()
                .add(OrderCol::UserId.eq(user_id))
                .add(OrderCol::OrderId.eq(order_id)),
        )
        .one(&state.orm)
        .await?;
    let existing = match existing {
        Some(o) => o,
        None => return Err(AppError::NotFound),
    };

    let mut active: OrderActive = existing.into();
    active.status = Set(status.to_string());
    let order = active.update(&state.orm).await?;

    audit::record(
        &state.pool,
        Some(user_id),
        "order_status_update",
        "orders",
        serde_json::json!({ "order_id": order.order_id, "status": order.status }),
    )
    .await;

    Ok(ApiResponse::success("Updated", order.into(), Some(Meta::empty())))
}

/// Validates checkout items and sums the quantities of repeated products.
pub fn merge_items(items: &[CheckoutItem]) -> AppResult<BTreeMap<i32, i32>> {
    if items.is_empty() {
        return Err(AppError::BadRequest("items must not be empty".into()));
    }

    let mut quantities: BTreeMap<i32, i32> = BTreeMap::new();
    for item in items {
        if item.quantity <= 0 {
            return Err(AppError::BadRequest(format!(
                "quantity for product {} must be greater than 0",
                item.product_id
            )));
        }
        let entry = quantities.entry(item.product_id).or_insert(0);
        *entry = entry.checked_add(item.quantity).ok_or_else(|| {
            AppError::BadRequest(format!("quantity for product {} is too large", item.product_id))
        })?;
    }
    Ok(quantities)
}

/// Prices each line at the product's current price. Amounts are rounded to cents.
pub fn price_lines(items: &[(Product, i32)]) -> (Vec<OrderLine>, f64) {
    let mut total = 0.0;
    let lines = items
        .iter()
        .map(|(product, quantity)| {
            let line_total = round_cents(product.price * f64::from(*quantity));
            total += line_total;
            OrderLine {
                product_id: product.item_id,
                name: product.name.clone(),
                quantity: *quantity,
                unit_price: product.price,
                line_total,
            }
        })
        .collect();
    (lines, round_cents(total))
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
