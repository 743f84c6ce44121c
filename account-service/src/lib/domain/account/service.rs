use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::Claims;
use chrono::Utc;

use crate::account::errors::AccountError;
use crate::account::models::Account;
use crate::account::models::AccountId;
use crate::account::models::AuthenticatedSession;
use crate::account::models::Credentials;
use crate::account::models::SignupCommand;
use crate::account::models::UpdateAccountCommand;
use crate::account::ports::AccountRepository;
use crate::account::ports::AccountServicePort;
use crate::domain::auth::AuthenticatedIdentity;

/// Domain service implementation for account operations.
///
/// Orchestrates the password hasher, token issuer, and the external
/// store. The store remains the single source of truth; this service
/// holds no mutable state across requests.
pub struct AccountService<R>
where
    R: AccountRepository,
{
    repository: Arc<R>,
    authenticator: Arc<Authenticator>,
    token_ttl_minutes: i64,
}

impl<R> AccountService<R>
where
    R: AccountRepository,
{
    /// Create a new account service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Account persistence implementation
    /// * `authenticator` - Password hashing and token issuance
    /// * `token_ttl_minutes` - Lifetime of issued access tokens
    pub fn new(
        repository: Arc<R>,
        authenticator: Arc<Authenticator>,
        token_ttl_minutes: i64,
    ) -> Self {
        Self {
            repository,
            authenticator,
            token_ttl_minutes,
        }
    }

    fn claims_for(&self, account: &Account) -> Claims {
        Claims::for_account(account.id, account.email.as_str(), self.token_ttl_minutes)
    }
}

#[async_trait]
impl<R> AccountServicePort for AccountService<R>
where
    R: AccountRepository,
{
    async fn login(&self, credentials: Credentials) -> Result<AuthenticatedSession, AccountError> {
        // Exact-match lookup; an absent account is an explicit branch,
        // never a crash path, and is indistinguishable from a wrong
        // password in the returned error.
        let account = match self.repository.find_by_email(&credentials.email).await? {
            Some(account) => account,
            None => {
                tracing::debug!(email = %credentials.email, "Login failed: no such account");
                return Err(AccountError::InvalidCredentials);
            }
        };

        let claims = self.claims_for(&account);

        let result = self
            .authenticator
            .authenticate(&credentials.password, &account.password_hash, &claims)
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => {
                    tracing::debug!(account_id = %account.id, "Login failed: password mismatch");
                    AccountError::InvalidCredentials
                }
                AuthenticationError::Password(err) => {
                    AccountError::Unknown(format!("Password verification failed: {}", err))
                }
                AuthenticationError::Jwt(err) => {
                    AccountError::Unknown(format!("Token issuance failed: {}", err))
                }
            })?;

        Ok(AuthenticatedSession {
            account,
            access_token: result.access_token,
        })
    }

    async fn signup(&self, command: SignupCommand) -> Result<AuthenticatedSession, AccountError> {
        if let Some(existing) = self.repository.find_by_email(command.email.as_str()).await? {
            return Err(AccountError::EmailAlreadyExists(
                existing.email.as_str().to_string(),
            ));
        }

        let password_hash = self
            .authenticator
            .hash_password(&command.password)
            .map_err(|e| AccountError::Unknown(format!("Password hashing failed: {}", e)))?;

        let account = Account {
            id: AccountId::new(),
            name: command.name,
            email: command.email,
            password_hash,
            created_at: Utc::now(),
        };

        let created = self.repository.create(account).await?;

        let claims = self.claims_for(&created);
        let access_token = self
            .authenticator
            .issue_token(&claims)
            .map_err(|e| AccountError::Unknown(format!("Token issuance failed: {}", e)))?;

        tracing::info!(account_id = %created.id, "Account created");

        Ok(AuthenticatedSession {
            account: created,
            access_token,
        })
    }

    async fn get_self(&self, identity: &AuthenticatedIdentity) -> Result<Account, AccountError> {
        self.repository
            .find_by_id(&identity.id)
            .await?
            .ok_or(AccountError::NotFound(identity.id.to_string()))
    }

    async fn update_self(
        &self,
        target: &AccountId,
        command: UpdateAccountCommand,
        identity: &AuthenticatedIdentity,
    ) -> Result<Account, AccountError> {
        // Ownership first, independent of whether the target exists.
        if *target != identity.id {
            return Err(AccountError::NotAuthorized);
        }

        let mut account = self
            .repository
            .find_by_id(target)
            .await?
            .ok_or(AccountError::NotFound(target.to_string()))?;

        if let Some(new_name) = command.name {
            account.name = new_name;
        }

        if let Some(new_email) = command.email {
            account.email = new_email;
        }

        if let Some(new_password) = command.password {
            account.password_hash = self
                .authenticator
                .hash_password(&new_password)
                .map_err(|e| AccountError::Unknown(format!("Password hashing failed: {}", e)))?;
        }

        let updated = self.repository.update(account).await?;

        tracing::info!(account_id = %updated.id, "Account updated");

        Ok(updated)
    }

    async fn delete_self(
        &self,
        target: &AccountId,
        identity: &AuthenticatedIdentity,
    ) -> Result<(), AccountError> {
        if *target != identity.id {
            return Err(AccountError::NotAuthorized);
        }

        self.repository.delete(target).await?;

        tracing::info!(account_id = %target, "Account deleted");

        Ok(())
    }
}
