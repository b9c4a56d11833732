//! Error types for the atlas build

pub type AtlasResult<T> = Result<T, AtlasError>;

#[derive(Debug, thiserror::Error)]
pub enum AtlasError {
    #[error("Missing or unreadable image '{name}.png': {reason}")]
    MissingImage { name: String, reason: String },
    #[error("Failed to write atlas to {path}: {reason}")]
    WriteFailed { path: String, reason: String },
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),
}
