use models::errors::StorageError;
use sea_orm::DbErr;
use thiserror::Error;

/// Error taxonomy shared by repositories and coordinators.
///
/// Lower-level failures are wrapped, never replaced: `Context` keeps the
/// original error as its source, and [`ServiceError::kind`] looks through
/// every layer to the root classification.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    /// The referenced category could not be loaded (absent or lookup failed).
    #[error("invalid category: {0}")]
    InvalidCategory(#[source] Box<ServiceError>),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(#[from] DbErr),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("{context}: {source}")]
    Context {
        context: &'static str,
        #[source]
        source: Box<ServiceError>,
    },
}

/// Root classification of a [`ServiceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Conflict,
    NotFound,
    Storage,
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn validation(msg: impl Into<String>) -> Self { Self::Validation(msg.into()) }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::Validation(_) | ServiceError::InvalidCategory(_) => ErrorKind::Validation,
            ServiceError::Conflict(_) => ErrorKind::Conflict,
            ServiceError::NotFound(_) => ErrorKind::NotFound,
            ServiceError::Db(_) | ServiceError::Storage(_) => ErrorKind::Storage,
            ServiceError::Context { source, .. } => source.kind(),
        }
    }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self.kind() {
            ErrorKind::Validation => 1001,
            ErrorKind::Conflict => 1002,
            ErrorKind::NotFound => 1003,
            ErrorKind::Storage => 1200,
        }
    }

    /// True for failures caused by the caller's input rather than the backend.
    pub fn is_client_error(&self) -> bool {
        self.kind() != ErrorKind::Storage
    }
}

/// Attach an operation name to an error while keeping it as the source.
pub trait ErrorContext<T> {
    fn context(self, context: &'static str) -> Result<T, ServiceError>;
}

impl<T> ErrorContext<T> for Result<T, ServiceError> {
    fn context(self, context: &'static str) -> Result<T, ServiceError> {
        self.map_err(|source| ServiceError::Context { context, source: Box::new(source) })
    }
}
