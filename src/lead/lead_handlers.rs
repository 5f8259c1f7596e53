use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use super::{lead_dto::SaveLeadRequest, lead_models::Lead};
use crate::{
    error::{AppError, Result},
    state::AppState,
};

fn into_lead(id: String, payload: SaveLeadRequest) -> Lead {
    Lead {
        id,
        name: payload.name,
        company: payload.company,
        email: payload.email,
        status: payload.status,
        value: payload.value,
        last_contact: payload.last_contact,
        source: payload.source,
        notes: payload.notes,
    }
}

/// List all leads
#[utoipa::path(
    get,
    path = "/api/leads",
    responses((status = 200, description = "List of leads", body = Vec<Lead>)),
    tag = "leads"
)]
pub async fn get_leads(State(state): State<AppState>) -> Json<Vec<Lead>> {
    Json(state.lead_repository.find_all().await)
}

/// Get a single lead
#[utoipa::path(
    get,
    path = "/api/leads/{id}",
    params(("id" = String, Path, description = "Lead ID")),
    responses(
        (status = 200, description = "Lead", body = Lead),
        (status = 404, description = "Lead not found")
    ),
    tag = "leads"
)]
pub async fn get_lead(
    State(state): State<AppState>,
    Path(lead_id): Path<String>,
) -> Result<Json<Lead>> {
    state
        .lead_repository
        .find_by_id(&lead_id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Lead not found".to_string()))
}

/// Create a lead
#[utoipa::path(
    post,
    path = "/api/leads",
    request_body = SaveLeadRequest,
    responses(
        (status = 201, description = "Lead created", body = Lead),
        (status = 400, description = "Invalid payload")
    ),
    tag = "leads"
)]
pub async fn create_lead(
    State(state): State<AppState>,
    Json(payload): Json<SaveLeadRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    let id = format!("lead_{}", uuid::Uuid::new_v4().simple());
    let lead = state.lead_repository.create(into_lead(id, payload)).await;
    tracing::debug!("Created lead {}", lead.id);

    Ok((StatusCode::CREATED, Json(lead)))
}

/// Replace a lead
#[utoipa::path(
    put,
    path = "/api/leads/{id}",
    params(("id" = String, Path, description = "Lead ID")),
    request_body = SaveLeadRequest,
    responses(
        (status = 200, description = "Lead updated", body = Lead),
        (status = 404, description = "Lead not found")
    ),
    tag = "leads"
)]
pub async fn update_lead(
    State(state): State<AppState>,
    Path(lead_id): Path<String>,
    Json(payload): Json<SaveLeadRequest>,
) -> Result<Json<Lead>> {
    payload.validate()?;

    state
        .lead_repository
        .update(into_lead(lead_id, payload))
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Lead not found".to_string()))
}

/// Delete a lead
#[utoipa::path(
    delete,
    path = "/api/leads/{id}",
    params(("id" = String, Path, description = "Lead ID")),
    responses(
        (status = 204, description = "Lead deleted"),
        (status = 404, description = "Lead not found")
    ),
    tag = "leads"
)]
pub async fn delete_lead(
    State(state): State<AppState>,
    Path(lead_id): Path<String>,
) -> Result<StatusCode> {
    let rows_affected = state.lead_repository.delete(&lead_id).await;

    if rows_affected == 0 {
        return Err(AppError::NotFound("Lead not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
