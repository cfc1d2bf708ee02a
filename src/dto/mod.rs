pub mod cart;
pub mod feedback;
pub mod interactions;
pub mod logins;
pub mod orders;
pub mod products;
pub mod users;
pub mod wishlist;
