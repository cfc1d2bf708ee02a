use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, Statement,
};
use shop_backend::{
    db::{create_orm_conn, create_pool, run_migrations},
    dto::{
        cart::AddToCartRequest,
        orders::{CheckoutItem, CheckoutRequest, UpdateOrderStatusRequest},
        products::CreateProductRequest,
        users::CreateUserRequest,
    },
    entity::{AuditLogs, Orders, audit_logs},
    error::AppError,
    routes::params::{OrderListQuery, Pagination},
    services::{cart_service, order_service, product_service, user_service},
    state::AppState,
};

// Cart -> checkout -> history, plus the failure paths that must leave nothing behind.
#[tokio::test]
async fn checkout_and_order_history_flow() -> anyhow::Result<()> {
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
            );
            return Ok(());
        }
    };

    let state = setup_state(&database_url).await?;

    let user_id = create_user(&state, "buyer@example.com").await?;
    let other_id = create_user(&state, "browser@example.com").await?;

    let mug = create_product(&state, "Ceramic Mug", 19.99).await?;
    let cable = create_product(&state, "USB-C Cable", 5.5).await?;
    let socks = create_product(&state, "Wool Socks", 3.0).await?;

    for (product_id, quantity) in [(mug, 3), (cable, 1), (socks, 2)] {
        cart_service::add_to_cart(
            &state,
            user_id,
            AddToCartRequest {
                product_id,
                quantity,
            },
        )
        .await?;
    }

    // Repeated products are merged into one line.
    let placed = order_service::checkout(
        &state,
        CheckoutRequest {
            user_id,
            items: vec![item(mug, 2), item(cable, 1), item(mug, 1)],
        },
    )
    .await?
    .data
    .unwrap();
    assert_eq!(placed.order.user_id, user_id);
    assert_eq!(placed.order.status, order_service::STATUS_PROCESSING);
    assert!((placed.order.total_amount - 65.47).abs() < 1e-9);
    assert_eq!(placed.items.len(), 2);
    let mug_line = placed.items.iter().find(|l| l.product_id == mug).unwrap();
    assert_eq!(mug_line.quantity, 3);

    // Only the purchased products leave the cart.
    let cart = cart_service::list_cart(&state, user_id, Pagination::default())
        .await?
        .data
        .unwrap();
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].product.item_id, socks);
    assert_eq!(cart.items[0].quantity, 2);

    let second = order_service::checkout(
        &state,
        CheckoutRequest {
            user_id,
            items: vec![item(socks, 2)],
        },
    )
    .await?
    .data
    .unwrap();
    assert!((second.order.total_amount - 6.0).abs() < 1e-9);

    let history = order_service::order_history(&state, user_id, OrderListQuery::default()).await?;
    assert_eq!(history.meta.as_ref().unwrap().total, Some(2));
    let orders = history.data.unwrap().items;
    assert_eq!(orders[0].order_id, second.order.order_id);
    assert_eq!(orders[1].order_id, placed.order.order_id);

    // A user without orders gets an empty page, not an error.
    let empty = order_service::order_history(&state, other_id, OrderListQuery::default()).await?;
    assert!(empty.data.unwrap().items.is_empty());

    let missing_user =
        order_service::order_history(&state, 999_999, OrderListQuery::default()).await;
    assert!(matches!(missing_user, Err(AppError::NotFound)));

    order_service::update_order_status(
        &state,
        user_id,
        placed.order.order_id,
        UpdateOrderStatusRequest {
            status: "shipped".into(),
        },
    )
    .await?;
    let processing = order_service::order_history(
        &state,
        user_id,
        OrderListQuery {
            status: Some("processing".into()),
            ..Default::default()
        },
    )
    .await?
    .data
    .unwrap();
    assert_eq!(processing.items.len(), 1);
    assert_eq!(processing.items[0].order_id, second.order.order_id);

    // Orders are scoped to their owner.
    let foreign = order_service::get_order(&state, other_id, placed.order.order_id).await;
    assert!(matches!(foreign, Err(AppError::NotFound)));

    // Unknown product: nothing is written.
    cart_service::add_to_cart(
        &state,
        user_id,
        AddToCartRequest {
            product_id: mug,
            quantity: 1,
        },
    )
    .await?;
    let rejected = order_service::checkout(
        &state,
        CheckoutRequest {
            user_id,
            items: vec![item(mug, 1), item(999_999, 1)],
        },
    )
    .await;
    assert!(matches!(rejected, Err(AppError::ReferentialIntegrity(_))));
    assert_eq!(Orders::find().count(&state.orm).await?, 2);
    let cart = cart_service::list_cart(&state, user_id, Pagination::default())
        .await?
        .data
        .unwrap();
    assert_eq!(cart.items.len(), 1);

    let ghost = order_service::checkout(
        &state,
        CheckoutRequest {
            user_id: 999_999,
            items: vec![item(mug, 1)],
        },
    )
    .await;
    assert!(matches!(ghost, Err(AppError::ReferentialIntegrity(_))));

    let checkouts = AuditLogs::find()
        .filter(audit_logs::Column::Action.eq("checkout"))
        .count(&state.orm)
        .await?;
    assert_eq!(checkouts, 2);

    Ok(())
}

fn item(product_id: i32, quantity: i32) -> CheckoutItem {
    CheckoutItem {
        product_id,
        quantity,
    }
}

async fn setup_state(database_url: &str) -> anyhow::Result<AppState> {
    let pool = create_pool(database_url, 5).await?;
    let orm = create_orm_conn(&pool);
    run_migrations(&orm).await?;

    let backend = orm.get_database_backend();
    orm.execute(Statement::from_string(
        backend,
        "TRUNCATE TABLE audit_logs, feedback, cart_items, wishlist, interactions, neg_interactions, logins, orders, products, users RESTART IDENTITY CASCADE",
    ))
    .await?;

    Ok(AppState { pool, orm })
}

async fn create_user(state: &AppState, email: &str) -> anyhow::Result<i32> {
    let user = user_service::create_user(
        state,
        CreateUserRequest {
            email: email.into(),
            age: 30,
            gender: "F".into(),
            signup_date: None,
            preferences: "home".into(),
        },
    )
    .await?
    .data
    .unwrap();
    Ok(user.user_id)
}

async fn create_product(state: &AppState, name: &str, price: f64) -> anyhow::Result<i32> {
    let product = product_service::create_product(
        state,
        CreateProductRequest {
            category: "Home".into(),
            name: name.into(),
            description: format!("{name} for testing"),
            subcategory: "Misc".into(),
            price,
            avg_rating: 0.0,
            num_ratings: 0,
            popular: 0.0,
            new_arrival: 0.0,
            on_sale: 0.0,
            arrival_date: None,
        },
    )
    .await?
    .data
    .unwrap();
    Ok(product.item_id)
}
