use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Default token lifetime in minutes.
///
/// Sessions are stateless, so expiry is the only revocation mechanism;
/// keep this short.
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 15;

/// Claim set embedded in every access token.
///
/// Carries the minimal identity needed to resolve the account on a
/// subsequent request: the subject (account id) plus the email at
/// issuance time. `exp`/`iat` are Unix timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (account identifier)
    pub sub: String,

    /// Email address at issuance time
    pub email: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for an account with expiration `ttl_minutes` from now.
    ///
    /// # Arguments
    /// * `account_id` - Unique account identifier (becomes `sub`)
    /// * `email` - Account email address
    /// * `ttl_minutes` - Minutes until the token expires
    ///
    /// # Returns
    /// Claims with sub, email, iat, and exp set
    pub fn for_account(
        account_id: impl ToString,
        email: impl Into<String>,
        ttl_minutes: i64,
    ) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::minutes(ttl_minutes);

        Self {
            sub: account_id.to_string(),
            email: email.into(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Check whether the token is expired at `current_timestamp`.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
