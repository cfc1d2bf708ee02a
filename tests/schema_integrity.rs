use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set, Statement};
use shop_backend::{
    db::{create_orm_conn, create_pool, run_migrations},
    dto::{
        cart::{AddToCartRequest, UpdateCartItemRequest},
        feedback::CreateFeedbackRequest,
        interactions::{CreateInteractionRequest, CreateNegInteractionRequest},
        logins::CreateLoginRequest,
        products::CreateProductRequest,
        users::CreateUserRequest,
        wishlist::AddWishlistRequest,
    },
    entity::{cart_items, feedback, logins},
    error::AppError,
    routes::params::Pagination,
    services::{
        cart_service, feedback_service, interaction_service, login_service, product_service,
        user_service, wishlist_service,
    },
    state::AppState,
};

// Uniqueness, dangling references and restricted deletes, checked against a real database.
#[tokio::test]
async fn constraints_are_enforced() -> anyhow::Result<()> {
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run schema integrity tests."
            );
            return Ok(());
        }
    };

    let state = setup_state(&database_url).await?;

    let ann = create_user(&state, "ann@example.com").await?;
    let ben = create_user(&state, "ben@example.com").await?;
    let lamp = create_product(&state, "Desk Lamp").await?;
    let rug = create_product(&state, "Wool Rug").await?;

    // users.email is unique.
    let duplicate = user_service::create_user(&state, user_request("ann@example.com")).await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));

    // logins: one per user, and the email is unique too.
    login_service::create_login(&state, ann, login_request("ann@example.com")).await?;
    let second_login =
        login_service::create_login(&state, ann, login_request("ann+2@example.com")).await;
    assert!(matches!(second_login, Err(AppError::Conflict(_))));
    let shared_email =
        login_service::create_login(&state, ben, login_request("ann@example.com")).await;
    assert!(matches!(shared_email, Err(AppError::Conflict(_))));

    // Bypassing the service still hits the unique constraint.
    let raw_login = logins::ActiveModel {
        id: NotSet,
        user_id: Set(ann),
        email: Set("someone-else@example.com".into()),
        hashed_password: Set("x".into()),
    }
    .insert(&state.orm)
    .await
    .map_err(AppError::from);
    assert!(matches!(raw_login, Err(AppError::Conflict(_))));

    let stored = login_service::get_login(&state, ann).await?.data.unwrap();
    assert_eq!(stored.email, "ann@example.com");

    // Dangling references are refused by the service and by the foreign key.
    let orphan = wishlist_service::add_to_wishlist(
        &state,
        ann,
        AddWishlistRequest {
            product_id: 999_999,
        },
    )
    .await;
    assert!(matches!(orphan, Err(AppError::ReferentialIntegrity(_))));

    let raw_feedback = feedback::ActiveModel {
        id: NotSet,
        user_id: Set(999_999),
        product_id: Set(lamp),
        rating: Set(4.0),
        comment: Set(None),
    }
    .insert(&state.orm)
    .await
    .map_err(AppError::from);
    assert!(matches!(raw_feedback, Err(AppError::ReferentialIntegrity(_))));

    // feedback.comment is optional.
    let note = feedback_service::create_feedback(
        &state,
        lamp,
        CreateFeedbackRequest {
            user_id: ben,
            rating: 5.0,
            comment: None,
        },
    )
    .await?
    .data
    .unwrap();
    assert!(note.comment.is_none());

    // Wishlisting twice keeps a single row.
    for _ in 0..2 {
        wishlist_service::add_to_wishlist(&state, ann, AddWishlistRequest { product_id: lamp })
            .await?;
    }
    let wished = wishlist_service::list_wishlist(&state, ann, Pagination::default())
        .await?
        .data
        .unwrap();
    assert_eq!(wished.items.len(), 1);

    // Concurrent adds of the same pair still leave one row.
    let (first, second) = tokio::join!(
        wishlist_service::add_to_wishlist(&state, ben, AddWishlistRequest { product_id: lamp }),
        wishlist_service::add_to_wishlist(&state, ben, AddWishlistRequest { product_id: lamp }),
    );
    assert_eq!(first?.data.unwrap().id, second?.data.unwrap().id);
    let ben_wished = wishlist_service::list_wishlist(&state, ben, Pagination::default())
        .await?
        .data
        .unwrap();
    assert_eq!(ben_wished.items.len(), 1);
    wishlist_service::remove_from_wishlist(&state, ben, lamp).await?;

    // Interactions and neg-interactions round-trip and need existing parents.
    interaction_service::record_interaction(
        &state,
        ann,
        CreateInteractionRequest {
            product_id: rug,
            rating: 4.5,
            quantity: 2,
        },
    )
    .await?;
    interaction_service::record_neg_interaction(
        &state,
        ben,
        CreateNegInteractionRequest {
            product_id: rug,
            rating: 1.0,
        },
    )
    .await?;
    let positives = interaction_service::list_interactions(&state, ann)
        .await?
        .data
        .unwrap();
    assert_eq!(positives.items.len(), 1);
    assert_eq!(positives.items[0].product_id, rug);
    assert_eq!(positives.items[0].quantity, 2);
    let negatives = interaction_service::list_neg_interactions(&state, ben)
        .await?
        .data
        .unwrap();
    assert_eq!(negatives.items.len(), 1);
    assert_eq!(negatives.items[0].rating, 1.0);

    let dangling_interaction = interaction_service::record_interaction(
        &state,
        ann,
        CreateInteractionRequest {
            product_id: 999_999,
            rating: 3.0,
            quantity: 1,
        },
    )
    .await;
    assert!(matches!(
        dangling_interaction,
        Err(AppError::ReferentialIntegrity(_))
    ));
    let dangling_user = interaction_service::record_interaction(
        &state,
        999_999,
        CreateInteractionRequest {
            product_id: rug,
            rating: 3.0,
            quantity: 1,
        },
    )
    .await;
    assert!(matches!(dangling_user, Err(AppError::ReferentialIntegrity(_))));
    let dangling_neg = interaction_service::record_neg_interaction(
        &state,
        ben,
        CreateNegInteractionRequest {
            product_id: 999_999,
            rating: 0.0,
        },
    )
    .await;
    assert!(matches!(dangling_neg, Err(AppError::ReferentialIntegrity(_))));

    // A product referenced only by interactions is still protected.
    let rug_delete = product_service::delete_product(&state, rug).await;
    assert!(matches!(rug_delete, Err(AppError::ReferentialIntegrity(_))));

    // Cart: dangling product, add-or-set, set quantity, remove.
    let dangling_cart = cart_service::add_to_cart(
        &state,
        ben,
        AddToCartRequest {
            product_id: 999_999,
            quantity: 1,
        },
    )
    .await;
    assert!(matches!(dangling_cart, Err(AppError::ReferentialIntegrity(_))));

    let (a, b) = tokio::join!(
        cart_service::add_to_cart(
            &state,
            ben,
            AddToCartRequest {
                product_id: lamp,
                quantity: 2,
            },
        ),
        cart_service::add_to_cart(
            &state,
            ben,
            AddToCartRequest {
                product_id: lamp,
                quantity: 2,
            },
        ),
    );
    a?;
    b?;
    let again = cart_service::add_to_cart(
        &state,
        ben,
        AddToCartRequest {
            product_id: lamp,
            quantity: 5,
        },
    )
    .await?
    .data
    .unwrap();
    assert_eq!(again.quantity, 5);
    let cart = cart_service::list_cart(&state, ben, Pagination::default())
        .await?
        .data
        .unwrap();
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity, 5);

    let raw_duplicate = cart_items::ActiveModel {
        id: NotSet,
        user_id: Set(ben),
        product_id: Set(lamp),
        quantity: Set(1),
    }
    .insert(&state.orm)
    .await
    .map_err(AppError::from);
    assert!(matches!(raw_duplicate, Err(AppError::Conflict(_))));

    let updated = cart_service::update_cart_item(
        &state,
        ben,
        lamp,
        UpdateCartItemRequest { quantity: 3 },
    )
    .await?
    .data
    .unwrap();
    assert_eq!(updated.quantity, 3);
    let not_in_cart =
        cart_service::update_cart_item(&state, ben, rug, UpdateCartItemRequest { quantity: 1 })
            .await;
    assert!(matches!(not_in_cart, Err(AppError::NotFound)));

    // Referenced parents cannot be deleted.
    let product_delete = product_service::delete_product(&state, lamp).await;
    assert!(matches!(product_delete, Err(AppError::ReferentialIntegrity(_))));
    let user_delete = user_service::delete_user(&state, ann).await;
    assert!(matches!(user_delete, Err(AppError::ReferentialIntegrity(_))));

    // Once the children are gone the parent delete goes through.
    cart_service::remove_from_cart(&state, ben, lamp).await?;
    let removed_twice = cart_service::remove_from_cart(&state, ben, lamp).await;
    assert!(matches!(removed_twice, Err(AppError::NotFound)));
    wishlist_service::remove_from_wishlist(&state, ann, lamp).await?;
    feedback_service::delete_feedback(&state, note.id).await?;
    product_service::delete_product(&state, lamp).await?;

    let missing = product_service::get_product(&state, lamp).await;
    assert!(matches!(missing, Err(AppError::NotFound)));

    Ok(())
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

fn user_request(email: &str) -> CreateUserRequest {
    CreateUserRequest {
        email: email.into(),
        age: 35,
        gender: "M".into(),
        signup_date: None,
        preferences: String::new(),
    }
}

fn login_request(email: &str) -> CreateLoginRequest {
    CreateLoginRequest {
        email: email.into(),
        password: "correct horse battery".into(),
    }
}

async fn create_user(state: &AppState, email: &str) -> anyhow::Result<i32> {
    let user = user_service::create_user(state, user_request(email))
        .await?
        .data
        .unwrap();
    Ok(user.user_id)
}

async fn create_product(state: &AppState, name: &str) -> anyhow::Result<i32> {
    let product = product_service::create_product(
        state,
        CreateProductRequest {
            category: "Home".into(),
            name: name.into(),
            description: String::new(),
            subcategory: "Lighting".into(),
            price: 24.0,
            avg_rating: 0.0,
            num_ratings: 0,
            popular: 0.0,
            new_arrival: 1.0,
            on_sale: 0.0,
            arrival_date: None,
        },
    )
    .await?
    .data
    .unwrap();
    Ok(product.item_id)
}
