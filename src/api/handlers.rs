use axum::{
    Json,
    extract::{
        Extension, Path, Query,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use std::sync::Arc;

use super::error::ApiError;
use super::protocol::{ContactPayload, SearchParams};
use super::validation::{ValidationGroup, validate};
use crate::contacts::{Contact, ContactDirectory};

// Extractors are taken as `Result`s so malformed requests render as `ApiError`.

pub async fn handle_create_contact(
    Extension(directory): Extension<Arc<ContactDirectory>>,
    payload: Result<Json<ContactPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Contact>), ApiError> {
    let Json(payload) = payload?;
    let contact = validate(payload, ValidationGroup::Create)?;
    let created = directory.create(contact);

    tracing::info!("Created contact {:?}", created.id);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn handle_read_contact(
    Extension(directory): Extension<Arc<ContactDirectory>>,
    contact_id: Result<Path<u64>, PathRejection>,
) -> Result<(StatusCode, Json<Contact>), ApiError> {
    let Path(contact_id) = contact_id?;
    let contact = directory.read(contact_id)?;
    Ok((StatusCode::OK, Json(contact)))
}

pub async fn handle_update_contact(
    Extension(directory): Extension<Arc<ContactDirectory>>,
    contact_id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<ContactPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Contact>), ApiError> {
    let Path(contact_id) = contact_id?;
    let Json(payload) = payload?;
    let contact = validate(payload, ValidationGroup::Update)?;
    if contact.id != Some(contact_id) {
        return Err(ApiError::IdMismatch {
            path: contact_id,
            body: contact.id,
        });
    }

    let updated = directory.update(contact)?;

    tracing::info!("Updated contact {}", contact_id);
    Ok((StatusCode::OK, Json(updated)))
}

pub async fn handle_delete_contact(
    Extension(directory): Extension<Arc<ContactDirectory>>,
    contact_id: Result<Path<u64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(contact_id) = contact_id?;
    directory.delete(contact_id)?;

    tracing::info!("Deleted contact {}", contact_id);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn handle_search_contacts(
    Extension(directory): Extension<Arc<ContactDirectory>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<Contact>>, ApiError> {
    let Query(params) = params?;
    let contacts = directory.search_by_prefix(&params.contact_prefix);

    tracing::debug!(
        "Prefix '{}' matched {} contacts",
        params.contact_prefix,
        contacts.len()
    );
    Ok(Json(contacts))
}
