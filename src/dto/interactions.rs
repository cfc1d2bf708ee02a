use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Interaction, NegInteraction};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateInteractionRequest {
    pub product_id: i32,
    pub rating: f64,
    pub quantity: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateNegInteractionRequest {
    pub product_id: i32,
    pub rating: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InteractionList {
    pub items: Vec<Interaction>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NegInteractionList {
    pub items: Vec<NegInteraction>,
}
