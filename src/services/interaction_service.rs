//! Implicit feedback events: positive `interactions` and negative `neg_interactions`.

use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::{
    audit,
    dto::interactions::{
        CreateInteractionRequest, CreateNegInteractionRequest, InteractionList,
        NegInteractionList,
    },
    entity::{interactions, neg_interactions},
    error::{AppError, AppResult},
    models::{Interaction, NegInteraction},
    response::{ApiResponse, Meta},
    services::integrity,
    state::AppState,
};

pub async fn record_interaction(
    state: &AppState,
    user_id: i32,
    payload: CreateInteractionRequest,
) -> AppResult<ApiResponse<Interaction>> {
    validate_rating(payload.rating)?;
    if payload.quantity < 0 {
        return Err(AppError::BadRequest("quantity must not be negative".into()));
    }
    integrity::require_user_and_product(&state.orm, user_id, payload.product_id).await?;

    let row = interactions::ActiveModel {
        id: NotSet,
        user_id: Set(user_id),
        product_id: Set(payload.product_id),
        rating: Set(payload.rating),
        quantity: Set(payload.quantity),
    }
    .insert(&state.orm)
    .await?;

    audit::record(
        &state.pool,
        Some(user_id),
        "interaction_record",
        "interactions",
        serde_json::json!({ "product_id": row.product_id }),
    )
    .await;

    Ok(ApiResponse::success("Recorded", row.into(), Some(Meta::empty())))
}

pub async fn list_interactions(
    state: &AppState,
    user_id: i32,
) -> AppResult<ApiResponse<InteractionList>> {
    integrity::find_user(&state.orm, user_id).await?;
    let items: Vec<Interaction> = interactions::Entity::find()
        .filter(interactions::Column::UserId.eq(user_id))
        .order_by_desc(interactions::Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Interaction::from)
        .collect();

    let meta = Meta::total(items.len() as i64);
    Ok(ApiResponse::success("OK", InteractionList { items }, Some(meta)))
}

pub async fn record_neg_interaction(
    state: &AppState,
    user_id: i32,
    payload: CreateNegInteractionRequest,
) -> AppResult<ApiResponse<NegInteraction>> {
    validate_rating(payload.rating)?;
    integrity::require_user_and_product(&state.orm, user_id, payload.product_id).await?;

    let row = neg_interactions::ActiveModel {
        id: NotSet,
        user_id: Set(user_id),
        product_id: Set(payload.product_id),
        rating: Set(payload.rating),
    }
    .insert(&state.orm)
    .await?;

    audit::record(
        &state.pool,
        Some(user_id),
        "neg_interaction_record",
        "neg_interactions",
        serde_json::json!({ "product_id": row.product_id }),
    )
    .await;

    Ok(ApiResponse::success("Recorded", row.into(), Some(Meta::empty())))
}

pub async fn list_neg_interactions(
    state: &AppState,
    user_id: i32,
) -> AppResult<ApiResponse<NegInteractionList>> {
    integrity::find_user(&state.orm, user_id).await?;
    let items: Vec<NegInteraction> = neg_interactions::Entity::find()
        .filter(neg_interactions::Column::UserId.eq(user_id))
        .order_by_desc(neg_interactions::Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(NegInteraction::from)
        .collect();

    let meta = Meta::total(items.len() as i64);
    Ok(ApiResponse::success("OK", NegInteractionList { items }, Some(meta)))
}

// Event ratings are model scores and may be any finite value.
fn validate_rating(rating: f64) -> AppResult<()> {
    if !rating.is_finite() {
        return Err(AppError::BadRequest("rating must be a finite number".into()));
    }
    Ok(())
}
