//! HTTP API Module
//!
//! REST surface of the address book, mounted under `/v1/contact`.
//!
//! Handlers validate request bodies, call into `ContactDirectory` and map
//! `DirectoryError`s onto status codes (404 for unknown ids, 400 for invalid
//! bodies or a path/body id mismatch).
//!
//! ## Submodules
//! - **`protocol`**: Route paths and JSON DTOs.
//! - **`validation`**: Field rules for create and update bodies.
//! - **`handlers`**: Axum request handlers.
//! - **`error`**: `ApiError` and its HTTP rendering.

pub mod error;
pub mod handlers;
pub mod protocol;
pub mod validation;

use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use std::sync::Arc;

use crate::contacts::ContactDirectory;
use handlers::*;
use protocol::{ENDPOINT_CONTACT, ENDPOINT_CONTACTS};

/// Builds the application router around a shared directory.
pub fn router(directory: Arc<ContactDirectory>) -> Router {
    Router::new()
        .route(
            ENDPOINT_CONTACTS,
            post(handle_create_contact).get(handle_search_contacts),
        )
        .route(
            ENDPOINT_CONTACT,
            get(handle_read_contact)
                .put(handle_update_contact)
                .delete(handle_delete_contact),
        )
        .layer(Extension(directory))
}
