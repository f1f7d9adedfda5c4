use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistError {
    #[cfg(feature = "mongodb")]
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Blog post not found: {0}")]
    PostNotFound(String),

    #[error("Contact message not found: {0}")]
    MessageNotFound(i64),

    #[error("Slug already in use: {0}")]
    DuplicateSlug(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl PersistError {
    /// Failures caused by store availability rather than the request itself
    pub fn is_transient(&self) -> bool {
        match self {
            #[cfg(feature = "mongodb")]
            PersistError::Database(_) => true,
            PersistError::Connection(_) => true,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, PersistError>;
