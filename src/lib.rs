//! Address Book Service Library
//!
//! Core modules of the address book. The binary (`main.rs`) wires them into an
//! HTTP server.
//!
//! ## Modules
//! - **`contacts`**: The in-memory engine. A record store keyed by id and a
//!   prefix-searchable name index, kept consistent by `ContactDirectory`.
//! - **`api`**: The REST layer. Validates requests, calls the directory and
//!   maps errors to HTTP status codes.
//! - **`config`**: Runtime settings from defaults, environment and flags.

pub mod api;
pub mod config;
pub mod contacts;
