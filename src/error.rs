use thiserror::Error;

/// Errors that can occur when converting an external editor format into a
/// canonical `Document`.
#[derive(Error, Debug, Clone)]
pub enum DocumentConversionError {
    #[error("Invalid editor data: {0}")]
    ValidationError(String),

    #[error("Id '{0}' appears more than once in the editor payload")]
    DuplicateId(String),
}

/// Errors that can occur while saving or loading a document payload.
#[derive(Error, Debug, Clone)]
pub enum PersistError {
    #[error("Could not access file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Serialization failed: {0}")]
    Encode(String),

    #[error("Deserialization failed: {0}")]
    Decode(String),
}
