use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::{
    audit,
    dto::feedback::{CreateFeedbackRequest, FeedbackList},
    entity::feedback::{ActiveModel, Column, Entity as FeedbackRows},
    error::{AppError, AppResult},
    models::Feedback,
    response::{ApiResponse, Meta},
    services::integrity,
    state::AppState,
};

pub async fn create_feedback(
    state: &AppState,
    product_id: i32,
    payload: CreateFeedbackRequest,
) -> AppResult<ApiResponse<Feedback>> {
    validate_rating(payload.rating)?;
    integrity::require_user_and_product(&state.orm, payload.user_id, product_id).await?;

    let comment = payload
        .comment
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());

    let feedback = ActiveModel {
        id: NotSet,
        user_id: Set(payload.user_id),
        product_id: Set(product_id),
        rating: Set(payload.rating),
        comment: Set(comment),
    }
    .insert(&state.orm)
    .await?;

    audit::record(
        &state.pool,
        Some(feedback.user_id),
        "feedback_create",
        "feedback",
        serde_json::json!({ "feedback_id": feedback.id, "product_id": product_id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Feedback created",
        feedback.into(),
        Some(Meta::empty()),
    ))
}

pub async fn list_product_feedback(
    state: &AppState,
    product_id: i32,
) -> AppResult<ApiResponse<FeedbackList>> {
    integrity::find_product(&state.orm, product_id).await?;
    list_where(state, Column::ProductId.eq(product_id)).await
}

pub async fn list_user_feedback(
    state: &AppState,
    user_id: i32,
) -> AppResult<ApiResponse<FeedbackList>> {
    integrity::find_user(&state.orm, user_id).await?;
    list_where(state, Column::UserId.eq(user_id)).await
}

pub async fn delete_feedback(
    state: &AppState,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = FeedbackRows::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        &state.pool,
        None,
        "feedback_delete",
        "feedback",
        serde_json::json!({ "feedback_id": id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

async fn list_where(
    state: &AppState,
    filter: sea_orm::sea_query::SimpleExpr,
) -> AppResult<ApiResponse<FeedbackList>> {
    let items: Vec<Feedback> = FeedbackRows::find()
        .filter(filter)
        .order_by_desc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Feedback::from)
        .collect();

    let meta = Meta::total(items.len() as i64);
    Ok(ApiResponse::success("OK", FeedbackList { items }, Some(meta)))
}

/// Any finite rating is stored; the scale belongs to the rating source.
fn validate_rating(rating: f64) -> AppResult<()> {
    if !rating.is_finite() {
        return Err(AppError::BadRequest("rating must be a finite number".into()));
    }
    Ok(())
}
