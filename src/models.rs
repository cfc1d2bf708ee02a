use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::entity;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, FromRow)]
pub struct User {
    pub user_id: i32,
    pub email: String,
    pub age: i32,
    pub gender: String,
    pub signup_date: NaiveDate,
    pub preferences: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, FromRow)]
pub struct Product {
    pub item_id: i32,
    pub category: String,
    pub name: String,
    pub description: String,
    pub subcategory: String,
    pub price: f64,
    pub avg_rating: f64,
    pub num_ratings: i32,
    pub popular: f64,
    pub new_arrival: f64,
    pub on_sale: f64,
    pub arrival_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, FromRow)]
pub struct Feedback {
    pub id: i32,
    pub user_id: i32,
    pub product_id: i32,
    pub rating: f64,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, FromRow)]
pub struct CartItem {
    pub id: i32,
    pub user_id: i32,
    pub product_id: i32,
    pub quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, FromRow)]
pub struct Order {
    pub order_id: i32,
    pub user_id: i32,
    pub total_amount: f64,
    pub order_date: NaiveDateTime,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, FromRow)]
pub struct WishlistItem {
    pub id: i32,
    pub user_id: i32,
    pub product_id: i32,
}

/// A login row without its password hash.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, FromRow)]
pub struct LoginAccount {
    pub id: i32,
    pub user_id: i32,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, FromRow)]
pub struct Interaction {
    pub id: i32,
    pub user_id: i32,
    pub product_id: i32,
    pub rating: f64,
    pub quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, FromRow)]
pub struct NegInteraction {
    pub id: i32,
    pub user_id: i32,
    pub product_id: i32,
    pub rating: f64,
}

impl From<entity::users::Model> for User {
    fn from(model: entity::users::Model) -> Self {
        Self {
            user_id: model.user_id,
            email: model.email,
            age: model.age,
            gender: model.gender,
            signup_date: model.signup_date,
            preferences: model.preferences,
        }
    }
}

impl From<entity::products::Model> for Product {
    fn from(model: entity::products::Model) -> Self {
        Self {
            item_id: model.item_id,
            category: model.category,
            name: model.name,
            description: model.description,
            subcategory: model.subcategory,
            price: model.price,
            avg_rating: model.avg_rating,
            num_ratings: model.num_ratings,
            popular: model.popular,
            new_arrival: model.new_arrival,
            on_sale: model.on_sale,
            arrival_date: model.arrival_date,
        }
    }
}

impl From<entity::feedback::Model> for Feedback {
    fn from(model: entity::feedback::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            product_id: model.product_id,
            rating: model.rating,
            comment: model.comment,
        }
    }
}

impl From<entity::cart_items::Model> for CartItem {
    fn from(model: entity::cart_items::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            product_id: model.product_id,
            quantity: model.quantity,
        }
    }
}

impl From<entity::orders::Model> for Order {
    fn from(model: entity::orders::Model) -> Self {
        Self {
            order_id: model.order_id,
            user_id: model.user_id,
            total_amount: model.total_amount,
            order_date: model.order_date,
            status: model.status,
        }
    }
}

impl From<entity::wishlist::Model> for WishlistItem {
    fn from(model: entity::wishlist::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            product_id: model.product_id,
        }
    }
}

impl From<entity::logins::Model> for LoginAccount {
    fn from(model: entity::logins::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            email: model.email,
        }
    }
}

impl From<entity::interactions::Model> for Interaction {
    fn from(model: entity::interactions::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            product_id: model.product_id,
            rating: model.rating,
            quantity: model.quantity,
        }
    }
}

impl From<entity::neg_interactions::Model> for NegInteraction {
    fn from(model: entity::neg_interactions::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            product_id: model.product_id,
            rating: model.rating,
        }
    }
}
