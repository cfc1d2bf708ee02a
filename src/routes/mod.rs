use axum::Router;

use crate::state::AppState;

pub mod cart;
pub mod doc;
pub mod feedback;
pub mod health;
pub mod interactions;
pub mod logins;
pub mod orders;
pub mod params;
pub mod products;
pub mod users;
pub mod wishlist;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    let user_scoped = Router::new()
        .merge(users::router())
        .merge(cart::router())
        .merge(wishlist::router())
        .merge(feedback::user_router())
        .merge(interactions::router())
        .merge(logins::router());

    let product_scoped = Router::new()
        .merge(products::router())
        .merge(feedback::product_router());

    Router::new()
        .merge(orders::router())
        .nest("/users", user_scoped)
        .nest("/products", product_scoped)
        .nest("/feedback", feedback::router())
}
