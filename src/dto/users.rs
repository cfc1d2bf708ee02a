use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::User;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub email: String,
    pub age: i32,
    pub gender: String,
    /// Defaults to today (UTC).
    pub signup_date: Option<NaiveDate>,
    #[serde(default)]
    pub preferences: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub signup_date: Option<NaiveDate>,
    pub preferences: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserList {
    pub items: Vec<User>,
}
