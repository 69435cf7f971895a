//! Contact Storage Module
//!
//! The in-memory engine behind the address book.
//!
//! ## Core Concepts
//! - **Record Store**: `RecordStore` owns the id -> contact map and hands out ids.
//! - **Name Index**: `NameIndex` files contacts under their name in an ordered map
//!   so prefix queries only touch the matching key range.
//! - **Directory**: `ContactDirectory` composes both behind a single lock and keeps
//!   them in step across create, update and delete.

pub mod directory;
pub mod error;
pub mod index;
pub mod store;
pub mod types;

pub use directory::ContactDirectory;
pub use error::{DirectoryError, Result};
pub use types::{Contact, ContactId};
