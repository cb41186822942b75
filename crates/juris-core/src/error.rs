use thiserror::Error;

/// Error taxonomy for the consent engine.
///
/// Storage and parse failures are recoverable by design: callers degrade to
/// "no settings found" rather than propagating them to page rendering or an
/// audit pass. Validation failures are the one hard rejection — the store
/// refuses to persist a settings object that violates the necessary
/// invariant.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JurisError {
    /// The cookie jar is inaccessible (non-browser / non-cookie context).
    #[error("cookie storage unavailable")]
    StorageUnavailable,

    /// A persisted consent record is not valid JSON or has the wrong shape.
    #[error("malformed consent record: {0}")]
    MalformedRecord(String),

    /// A settings object failed a blocking validation rule.
    #[error("validation error: {0}")]
    Validation(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type JurisResult<T> = Result<T, JurisError>;
