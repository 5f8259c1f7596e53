use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use super::{
    deal_dto::{CreateDealRequest, DealFilters, UpdateDealStatusRequest},
    deal_models::{Deal, DealStatus},
};
use crate::{
    error::{AppError, Result},
    state::AppState,
};

/// List deals, optionally for one pipeline stage
#[utoipa::path(
    get,
    path = "/api/deals",
    params(DealFilters),
    responses((status = 200, description = "List of deals", body = Vec<Deal>)),
    tag = "deals"
)]
pub async fn get_deals(
    State(state): State<AppState>,
    Query(filters): Query<DealFilters>,
) -> Json<Vec<Deal>> {
    Json(state.deal_repository.find_all(filters.status).await)
}

/// Create a deal
#[utoipa::path(
    post,
    path = "/api/deals",
    request_body = CreateDealRequest,
    responses(
        (status = 201, description = "Deal created", body = Deal),
        (status = 400, description = "Invalid payload")
    ),
    tag = "deals"
)]
pub async fn create_deal(
    State(state): State<AppState>,
    Json(payload): Json<CreateDealRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    let deal = Deal {
        id: format!("deal_{}", uuid::Uuid::new_v4().simple()),
        title: payload.title,
        contact_name: payload.contact_name,
        company: payload.company,
        value: payload.value,
        status: payload.status.unwrap_or(DealStatus::New),
        close_date: payload.close_date,
    };
    let deal = state.deal_repository.create(deal).await;

    Ok((StatusCode::CREATED, Json(deal)))
}

/// Move a deal to another pipeline stage
#[utoipa::path(
    patch,
    path = "/api/deals/{id}/status",
    params(("id" = String, Path, description = "Deal ID")),
    request_body = UpdateDealStatusRequest,
    responses(
        (status = 200, description = "Deal moved", body = Deal),
        (status = 404, description = "Deal not found")
    ),
    tag = "deals"
)]
pub async fn update_deal_status(
    State(state): State<AppState>,
    Path(deal_id): Path<String>,
    Json(payload): Json<UpdateDealStatusRequest>,
) -> Result<Json<Deal>> {
    let deal = state
        .deal_repository
        .update_status(&deal_id, payload.status)
        .await
        .ok_or_else(|| AppError::NotFound("Deal not found".to_string()))?;

    tracing::debug!("Deal {} moved to {}", deal.id, deal.status);
    Ok(Json(deal))
}

/// Delete a deal
#[utoipa::path(
    delete,
    path = "/api/deals/{id}",
    params(("id" = String, Path, description = "Deal ID")),
    responses(
        (status = 204, description = "Deal deleted"),
        (status = 404, description = "Deal not found")
    ),
    tag = "deals"
)]
pub async fn delete_deal(
    State(state): State<AppState>,
    Path(deal_id): Path<String>,
) -> Result<StatusCode> {
    let rows_affected = state.deal_repository.delete(&deal_id).await;

    if rows_affected == 0 {
        return Err(AppError::NotFound("Deal not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
