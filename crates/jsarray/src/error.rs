//! Container error types.

use thiserror::Error;

use crate::key::Key;

/// Errors surfaced by container operations.
///
/// Both core kinds are a programmer-error class: reported immediately,
/// never recovered or patched internally. `Json` is the interchange
/// decode surface.
#[derive(Debug, Error)]
pub enum ArrayError {
    /// Malformed input to an operation
    #[error("InvalidArgument: {0}")]
    InvalidArgument(String),

    /// Read access to an absent key; there is no default-value fallback
    #[error("KeyNotFound: {0}")]
    KeyNotFound(Key),

    /// Interchange text failed to parse
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
}
