//! Domain error taxonomy shared by every crate.

use crate::types::DbId;

/// Domain-level error for Spriggly operations.
///
/// Variants map 1:1 onto HTTP statuses in the api crate's `AppError`:
/// `NotFound` → 404, `Validation` → 400, `Conflict` → 409,
/// `Unauthorized` → 401, `Forbidden` → 403, `Internal` → 500.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An entity referenced by id does not exist (or is not visible to the
    /// caller -- ownership misses are reported as not-found, not forbidden).
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input failed validation; no mutation was attempted.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A state precondition was not met (already completed, already claimed,
    /// insufficient funds or inventory).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// No valid session / credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated but not allowed.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Configuration or data-integrity failure (e.g. a missing catalog row).
    /// Indicates a deployment/content bug, never user error.
    #[error("Internal error: {0}")]
    Internal(String),
}
