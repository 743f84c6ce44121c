use thiserror::Error;

/// Error type for password operations.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Stored hash is not a parseable PHC string. Surfaced as an error
    /// rather than a silent verification failure.
    #[error("Invalid password hash format: {0}")]
    InvalidHashFormat(String),

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
}
