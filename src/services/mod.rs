pub mod cart_service;
pub mod feedback_service;
pub mod interaction_service;
pub mod integrity;
pub mod login_service;
pub mod order_service;
pub mod product_service;
pub mod user_service;
pub mod wishlist_service;
