use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::account::errors::AccountError;
use crate::account::errors::AccountIdError;
use crate::account::errors::EmailError;
use crate::account::errors::NameError;

/// Account aggregate entity.
///
/// The password hash is never the plaintext and is never serialized
/// back to a client; response types strip it by construction.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub name: AccountName,
    pub email: EmailAddress,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Account unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(pub Uuid);

impl AccountId {
    /// Generate a new random account ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an account ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, AccountIdError> {
        Uuid::parse_str(s)
            .map(AccountId)
            .map_err(|e| AccountIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Display name value type.
///
/// The only structural rule is non-emptiness; anything the user can
/// type is an acceptable display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountName(String);

impl AccountName {
    /// Create a new valid account name.
    ///
    /// # Errors
    /// * `Empty` - Name is empty or whitespace only
    pub fn new(name: String) -> Result<Self, NameError> {
        if name.trim().is_empty() {
            return Err(NameError::Empty);
        }
        Ok(Self(name))
    }

    /// Get name as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type.
///
/// Validates with the RFC 5321/5322 parser, then additionally requires
/// a dot in the domain part so bare hostnames like `a@b` are rejected.
/// Comparison is case-sensitive exact match throughout; uniqueness and
/// login lookups use the address exactly as registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Not a parseable address, or domain without a dot
    pub fn new(email: String) -> Result<Self, EmailError> {
        let parsed = email_address::EmailAddress::from_str(&email)
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))?;

        if !parsed.domain().contains('.') {
            return Err(EmailError::InvalidFormat(format!(
                "domain '{}' is missing a dot",
                parsed.domain()
            )));
        }

        Ok(EmailAddress(email))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Transient login credentials.
///
/// Exists only for the duration of a login call and is never
/// persisted. The email is kept as the raw submitted string: login
/// matches it against stored records, it does not re-validate format.
#[derive(Debug)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Construct credentials, requiring both fields non-empty.
    ///
    /// # Errors
    /// * `MissingField` - Email or password is empty
    pub fn new(email: String, password: String) -> Result<Self, AccountError> {
        if email.trim().is_empty() {
            return Err(AccountError::MissingField("email"));
        }
        if password.is_empty() {
            return Err(AccountError::MissingField("password"));
        }
        Ok(Self { email, password })
    }
}

/// Command to create a new account with domain types
#[derive(Debug)]
pub struct SignupCommand {
    pub name: AccountName,
    pub email: EmailAddress,
    pub password: String,
}

impl SignupCommand {
    /// Construct a new signup command.
    ///
    /// # Arguments
    /// * `name` - Validated display name
    /// * `email` - Validated email address
    /// * `password` - Plain text password (will be hashed by service)
    ///
    /// # Errors
    /// * `MissingField` - Password is empty
    pub fn new(
        name: AccountName,
        email: EmailAddress,
        password: String,
    ) -> Result<Self, AccountError> {
        if password.is_empty() {
            return Err(AccountError::MissingField("password"));
        }
        Ok(Self {
            name,
            email,
            password,
        })
    }
}

/// Command to update an existing account with optional validated fields.
///
/// All fields are optional to support partial updates.
/// Only provided fields will be updated.
#[derive(Debug)]
pub struct UpdateAccountCommand {
    pub name: Option<AccountName>,
    pub email: Option<EmailAddress>,
    pub password: Option<String>,
}

/// Result of a successful login or signup: the account plus a freshly
/// issued access token.
#[derive(Debug)]
pub struct AuthenticatedSession {
    pub account: Account,
    pub access_token: String,
}
