use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Feedback;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateFeedbackRequest {
    pub user_id: i32,
    pub rating: f64,
    pub comment: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FeedbackList {
    pub items: Vec<Feedback>,
}
