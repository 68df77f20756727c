use crate::context::Role;
use sea_orm::DbErr;
use thiserror::Error;

/// Domain errors returned by repository operations.
///
/// Every variant is recoverable at the caller boundary; a failed
/// operation leaves the store unchanged (multi-step mutations run in a
/// single transaction).
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("already registered for this exam")]
    AlreadyRegistered,

    #[error("operation requires {required} role")]
    Unauthorized { required: Role },

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("invalid state transition: {0}")]
    InvalidTransition(&'static str),

    #[error(transparent)]
    Database(#[from] DbErr),
}

pub type Result<T> = std::result::Result<T, ServiceError>;
