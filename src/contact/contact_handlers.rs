use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use super::{
    contact_dto::{ContactFilters, SaveContactRequest},
    contact_models::Contact,
};
use crate::{
    error::{AppError, Result},
    state::AppState,
};

fn into_contact(id: String, payload: SaveContactRequest) -> Contact {
    Contact {
        id,
        tags: payload.clean_tags(),
        name: payload.name,
        company: payload.company,
        phone: payload.phone,
        email: payload.email,
    }
}

/// List contacts, optionally filtered by a search term
#[utoipa::path(
    get,
    path = "/api/contacts",
    params(ContactFilters),
    responses((status = 200, description = "List of contacts", body = Vec<Contact>)),
    tag = "contacts"
)]
pub async fn get_contacts(
    State(state): State<AppState>,
    Query(filters): Query<ContactFilters>,
) -> Json<Vec<Contact>> {
    Json(state.contact_repository.find_all(filters.search.as_deref()).await)
}

/// Get a single contact
#[utoipa::path(
    get,
    path = "/api/contacts/{id}",
    params(("id" = String, Path, description = "Contact ID")),
    responses(
        (status = 200, description = "Contact", body = Contact),
        (status = 404, description = "Contact not found")
    ),
    tag = "contacts"
)]
pub async fn get_contact(
    State(state): State<AppState>,
    Path(contact_id): Path<String>,
) -> Result<Json<Contact>> {
    state
        .contact_repository
        .find_by_id(&contact_id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Contact not found".to_string()))
}

/// Create a contact
#[utoipa::path(
    post,
    path = "/api/contacts",
    request_body = SaveContactRequest,
    responses(
        (status = 201, description = "Contact created", body = Contact),
        (status = 400, description = "Invalid payload")
    ),
    tag = "contacts"
)]
pub async fn create_contact(
    State(state): State<AppState>,
    Json(payload): Json<SaveContactRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    let id = format!("contact_{}", uuid::Uuid::new_v4().simple());
    let contact = state.contact_repository.create(into_contact(id, payload)).await;
    tracing::debug!("Created contact {}", contact.id);

    Ok((StatusCode::CREATED, Json(contact)))
}

/// Replace a contact
#[utoipa::path(
    put,
    path = "/api/contacts/{id}",
    params(("id" = String, Path, description = "Contact ID")),
    request_body = SaveContactRequest,
    responses(
        (status = 200, description = "Contact updated", body = Contact),
        (status = 404, description = "Contact not found")
    ),
    tag = "contacts"
)]
pub async fn update_contact(
    State(state): State<AppState>,
    Path(contact_id): Path<String>,
    Json(payload): Json<SaveContactRequest>,
) -> Result<Json<Contact>> {
    payload.validate()?;

    state
        .contact_repository
        .update(into_contact(contact_id, payload))
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Contact not found".to_string()))
}

/// Delete a contact
#[utoipa::path(
    delete,
    path = "/api/contacts/{id}",
    params(("id" = String, Path, description = "Contact ID")),
    responses(
        (status = 204, description = "Contact deleted"),
        (status = 404, description = "Contact not found")
    ),
    tag = "contacts"
)]
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(contact_id): Path<String>,
) -> Result<StatusCode> {
    if state.contact_repository.delete(&contact_id).await == 0 {
        return Err(AppError::NotFound("Contact not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
