pub mod audit_logs;
pub mod cart_items;
pub mod feedback;
pub mod interactions;
pub mod logins;
pub mod neg_interactions;
pub mod orders;
pub mod products;
pub mod users;
pub mod wishlist;

pub use audit_logs::Entity as AuditLogs;
pub use cart_items::Entity as CartItems;
pub use feedback::Entity as Feedback;
pub use interactions::Entity as Interactions;
pub use logins::Entity as Logins;
pub use neg_interactions::Entity as NegInteractions;
pub use orders::Entity as Orders;
pub use products::Entity as Products;
pub use users::Entity as Users;
pub use wishlist::Entity as Wishlist;
