use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Product;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub category: String,
    pub name: String,
    pub description: String,
    pub subcategory: String,
    pub price: f64,
    #[serde(default)]
    pub avg_rating: f64,
    #[serde(default)]
    pub num_ratings: i32,
    #[serde(default)]
    pub popular: f64,
    #[serde(default)]
    pub new_arrival: f64,
    #[serde(default)]
    pub on_sale: f64,
    /// Defaults to today (UTC).
    pub arrival_date: Option<NaiveDate>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    pub category: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub subcategory: Option<String>,
    pub price: Option<f64>,
    pub avg_rating: Option<f64>,
    pub num_ratings: Option<i32>,
    pub popular: Option<f64>,
    pub new_arrival: Option<f64>,
    pub on_sale: Option<f64>,
    pub arrival_date: Option<NaiveDate>,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<Product>)]
    pub items: Vec<Product>,
}
