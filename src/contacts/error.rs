use thiserror::Error;

/// Result type alias for directory operations.
pub type Result<T> = std::result::Result<T, DirectoryError>;

/// Errors raised by the contact directory and its stores.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// No record exists for the requested id.
    #[error("contact id {0} not found")]
    NotFound(u64),

    /// An update was attempted with a contact that carries no id.
    #[error("contact has no id")]
    MissingId,

    /// The record store and the name index disagree.
    #[error("directory corrupted: {0}")]
    Corrupted(String),
}
