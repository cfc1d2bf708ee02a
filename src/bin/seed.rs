use shop_backend::{
    config::AppConfig,
    db::{connect, run_migrations},
    services::login_service::hash_password,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let state = connect(&config).await?;
    run_migrations(&state.orm).await?;

    let alice = ensure_user(&state.pool, "alice@example.com", 29, "F", "electronics,books").await?;
    let bob = ensure_user(&state.pool, "bob@example.com", 41, "M", "home,garden").await?;
    ensure_login(&state.pool, alice, "alice@example.com", "alice-password").await?;
    seed_products(&state.pool).await?;

    println!("Seed completed. Users: {alice}, {bob}");
    Ok(())
}

async fn ensure_user(
    pool: &sqlx::PgPool,
    email: &str,
    age: i32,
    gender: &str,
    preferences: &str,
) -> anyhow::Result<i32> {
    let row: (i32,) = sqlx::query_as(
        r#"
        INSERT INTO users (email, age, gender, signup_date, preferences)
        VALUES ($1, $2, $3, CURRENT_DATE, $4)
        ON CONFLICT (email) DO UPDATE SET preferences = EXCLUDED.preferences
        RETURNING user_id
        "#,
    )
    .bind(email)
    .bind(age)
    .bind(gender)
    .bind(preferences)
    .fetch_one(pool)
    .await?;

    println!("Ensured user {email} (user_id={})", row.0);
    Ok(row.0)
}

async fn ensure_login(
    pool: &sqlx::PgPool,
    user_id: i32,
    email: &str,
    password: &str,
) -> anyhow::Result<()> {
    let hashed = hash_password(password).map_err(|e| anyhow::anyhow!(e.to_string()))?;

    sqlx::query(
        r#"
        INSERT INTO logins (user_id, email, hashed_password)
        VALUES ($1, $2, $3)
        ON CONFLICT (user_id) DO NOTHING
        "#,
    )
    .bind(user_id)
    .bind(email)
    .bind(hashed)
    .execute(pool)
    .await?;

    Ok(())
}

async fn seed_products(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        println!("Products already present ({existing}), skipping");
        return Ok(());
    }

    let products = vec![
        ("Electronics", "Noise Cancelling Headphones", "Over-ear, 30h battery", "Audio", 199.99),
        ("Electronics", "USB-C Charger", "65W fast charger", "Accessories", 39.5),
        ("Books", "The Rust Programming Language", "Paperback edition", "Programming", 44.0),
        ("Home", "Ceramic Mug", "350ml, dishwasher safe", "Kitchen", 12.75),
    ];

    for (category, name, description, subcategory, price) in products {
        sqlx::query(
            r#"
            INSERT INTO products
                (category, name, description, subcategory, price,
                 avg_rating, num_ratings, popular, new_arrival, on_sale, arrival_date)
            VALUES ($1, $2, $3, $4, $5, 0, 0, 0, 1, 0, CURRENT_DATE)
            "#,
        )
        .bind(category)
        .bind(name)
        .bind(description)
        .bind(subcategory)
        .bind(price)
        .execute(pool)
        .await?;
    }

    println!("Seeded products");
    Ok(())
}
