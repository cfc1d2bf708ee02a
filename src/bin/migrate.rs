use shop_backend::{
    config::AppConfig,
    db::{connect, run_migrations},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    let state = connect(&config).await?;
    run_migrations(&state.orm).await?;
    println!("Migrations applied");
    Ok(())
}
