//! Authentication utilities library
//!
//! Provides the credential and session-token core for the account
//! service:
//! - Password hashing (Argon2id, salted per call)
//! - Signed, expiring access tokens (JWT, HS256)
//! - Authentication coordination
//!
//! Sessions are stateless: a token's validity is derived entirely from
//! its own signed contents and expiry. There is no server-side session
//! record, so rotating the signing secret invalidates every
//! outstanding token.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::{Claims, JwtHandler, DEFAULT_TOKEN_TTL_MINUTES};
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::for_account("account-1", "alice@example.com", DEFAULT_TOKEN_TTL_MINUTES);
//! let token = handler.encode(&claims).unwrap();
//! let decoded = handler.decode(&token).unwrap();
//! assert_eq!(decoded.sub, "account-1");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, Claims};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Signup: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! let claims = Claims::for_account("account-1", "alice@example.com", 15);
//! let result = auth.authenticate("password123", &hash, &claims).unwrap();
//!
//! // Later request: validate token
//! let decoded = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(decoded.email, "alice@example.com");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::claims::DEFAULT_TOKEN_TTL_MINUTES;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
