use async_trait::async_trait;

use crate::account::errors::AccountError;
use crate::account::models::Account;
use crate::account::models::AccountId;
use crate::account::models::AuthenticatedSession;
use crate::account::models::Credentials;
use crate::account::models::SignupCommand;
use crate::account::models::UpdateAccountCommand;
use crate::domain::auth::AuthenticatedIdentity;

/// Port for account domain service operations.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Verify credentials and open a session.
    ///
    /// # Arguments
    /// * `credentials` - Submitted email and password, both non-empty
    ///
    /// # Returns
    /// The account plus a freshly issued access token
    ///
    /// # Errors
    /// * `InvalidCredentials` - No account with this email, or password mismatch
    /// * `Database` - Store operation failed
    async fn login(&self, credentials: Credentials) -> Result<AuthenticatedSession, AccountError>;

    /// Register a new account and open a session.
    ///
    /// # Arguments
    /// * `command` - Validated command containing name, email, and password
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Database` - Store operation failed
    async fn signup(&self, command: SignupCommand) -> Result<AuthenticatedSession, AccountError>;

    /// Fetch the caller's own account.
    ///
    /// Re-fetches by the admitted identity's id so the response
    /// reflects the latest stored state, not the claims snapshot.
    ///
    /// # Errors
    /// * `NotFound` - Account no longer exists
    /// * `Database` - Store operation failed
    async fn get_self(&self, identity: &AuthenticatedIdentity) -> Result<Account, AccountError>;

    /// Update the caller's own account with optional fields.
    ///
    /// The ownership check runs before any store access: a mismatched
    /// target id is rejected whether or not that id exists.
    ///
    /// # Errors
    /// * `NotAuthorized` - Target id is not the admitted identity's id
    /// * `NotFound` - Account no longer exists
    /// * `Database` - Store operation failed
    async fn update_self(
        &self,
        target: &AccountId,
        command: UpdateAccountCommand,
        identity: &AuthenticatedIdentity,
    ) -> Result<Account, AccountError>;

    /// Delete the caller's own account.
    ///
    /// Same ownership rule as `update_self`.
    ///
    /// # Errors
    /// * `NotAuthorized` - Target id is not the admitted identity's id
    /// * `NotFound` - Account no longer exists
    /// * `Database` - Store operation failed
    async fn delete_self(
        &self,
        target: &AccountId,
        identity: &AuthenticatedIdentity,
    ) -> Result<(), AccountError>;
}

/// Persistence operations for the account aggregate.
///
/// The store is the single source of truth; it is responsible for
/// per-record consistency, including enforcing email uniqueness under
/// concurrent signups.
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Persist a new account to storage.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Database` - Store operation failed
    async fn create(&self, account: Account) -> Result<Account, AccountError>;

    /// Retrieve an account by identifier.
    ///
    /// # Returns
    /// Optional account entity (None if not found)
    ///
    /// # Errors
    /// * `Database` - Store operation failed
    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, AccountError>;

    /// Retrieve an account by email address (exact match).
    ///
    /// # Returns
    /// Optional account entity (None if not found)
    ///
    /// # Errors
    /// * `Database` - Store operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError>;

    /// Persist mutated fields of an existing account.
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `EmailAlreadyExists` - New email is already registered
    /// * `Database` - Store operation failed
    async fn update(&self, account: Account) -> Result<Account, AccountError>;

    /// Remove an account from storage.
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `Database` - Store operation failed
    async fn delete(&self, id: &AccountId) -> Result<(), AccountError>;
}
