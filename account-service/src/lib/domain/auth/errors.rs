use thiserror::Error;

/// Rejection reasons for the authorization gate.
///
/// Every rejection is terminal for the current call; the caller must
/// reauthenticate to obtain a new token. Only `Store` is a server
/// fault, the rest belong to the unauthenticated class.
#[derive(Debug, Clone, Error)]
pub enum GateError {
    #[error("Missing bearer token in authorization carrier")]
    MissingCredential,

    #[error("Token is expired")]
    Expired,

    #[error("Token is invalid: {0}")]
    Invalid(String),

    /// The token verified but no account matches its subject: a
    /// revoked or deleted account whose token has not yet expired.
    /// An authorization failure, not a server error.
    #[error("No account for token subject: {0}")]
    UnknownIdentity(String),

    #[error("Store error during identity resolution: {0}")]
    Store(String),
}
