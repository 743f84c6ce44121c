use std::sync::Arc;

use auth::Authenticator;
use auth::Claims;
use auth::JwtError;

use crate::account::models::AccountId;
use crate::account::ports::AccountRepository;
use crate::domain::auth::errors::GateError;
use crate::domain::auth::models::AuthenticatedIdentity;

/// Request-time gatekeeper for protected operations.
///
/// Runs the extract -> verify -> resolve -> admit sequence against a
/// raw carrier value, so the core stays transport-agnostic: the HTTP
/// middleware hands over the `Authorization` header, a non-HTTP
/// transport would hand over its out-of-band token field.
pub struct AuthorizationGate {
    authenticator: Arc<Authenticator>,
    repository: Arc<dyn AccountRepository>,
}

impl AuthorizationGate {
    /// Create a new gate.
    ///
    /// # Arguments
    /// * `authenticator` - Token verifier holding the signing secret
    /// * `repository` - Store used to resolve token subjects to accounts
    pub fn new(authenticator: Arc<Authenticator>, repository: Arc<dyn AccountRepository>) -> Self {
        Self {
            authenticator,
            repository,
        }
    }

    /// Admit or reject a call given its raw carrier value.
    ///
    /// # Arguments
    /// * `bearer` - Carrier content, expected as `Bearer <token>`
    ///
    /// # Returns
    /// The resolved identity to attach to the call context
    ///
    /// # Errors
    /// * `MissingCredential` - No carrier, or not a bearer scheme
    /// * `Expired` - Token past its expiry
    /// * `Invalid` - Bad signature, malformed token, or unusable subject claim
    /// * `UnknownIdentity` - No account matches the token subject
    /// * `Store` - Identity lookup failed in the store
    pub async fn admit(&self, bearer: Option<&str>) -> Result<AuthenticatedIdentity, GateError> {
        let token = extract_bearer_token(bearer)?;

        let claims = self.verify(token)?;

        self.resolve(&claims).await
    }

    fn verify(&self, token: &str) -> Result<Claims, GateError> {
        self.authenticator.validate_token(token).map_err(|e| match e {
            JwtError::TokenExpired => GateError::Expired,
            other => GateError::Invalid(other.to_string()),
        })
    }

    async fn resolve(&self, claims: &Claims) -> Result<AuthenticatedIdentity, GateError> {
        let account_id = AccountId::from_string(&claims.sub)
            .map_err(|e| GateError::Invalid(format!("unusable subject claim: {}", e)))?;

        let account = self
            .repository
            .find_by_id(&account_id)
            .await
            .map_err(|e| GateError::Store(e.to_string()))?
            .ok_or_else(|| GateError::UnknownIdentity(claims.sub.clone()))?;

        Ok(AuthenticatedIdentity::from(&account))
    }
}

fn extract_bearer_token(bearer: Option<&str>) -> Result<&str, GateError> {
    let carrier = bearer.ok_or(GateError::MissingCredential)?;

    let token = carrier
        .strip_prefix("Bearer ")
        .ok_or(GateError::MissingCredential)?;

    if token.is_empty() {
        return Err(GateError::MissingCredential);
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::Utc;
    use mockall::mock;

    use super::*;
    use crate::account::errors::AccountError;
    use crate::account::models::Account;
    use crate::account::models::AccountName;
    use crate::account::models::EmailAddress;

    mock! {
        pub TestAccountRepository {}

        #[async_trait]
        impl AccountRepository for TestAccountRepository {
            async fn create(&self, account: Account) -> Result<Account, AccountError>;
            async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, AccountError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError>;
            async fn update(&self, account: Account) -> Result<Account, AccountError>;
            async fn delete(&self, id: &AccountId) -> Result<(), AccountError>;
        }
    }

    const SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

    fn account_with_id(id: AccountId) -> Account {
        Account {
            id,
            name: AccountName::new("Ann".to_string()).unwrap(),
            email: EmailAddress::new("ann@example.com".to_string()).unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
            created_at: Utc::now(),
        }
    }

    fn gate_with(repository: MockTestAccountRepository) -> AuthorizationGate {
        AuthorizationGate::new(Arc::new(Authenticator::new(SECRET)), Arc::new(repository))
    }

    #[tokio::test]
    async fn test_admit_success() {
        let account_id = AccountId::new();
        let account = account_with_id(account_id);

        let mut repository = MockTestAccountRepository::new();
        repository
            .expect_find_by_id()
            .withf(move |id| *id == account_id)
            .times(1)
            .returning(move |_| Ok(Some(account.clone())));

        let authenticator = Authenticator::new(SECRET);
        let claims = Claims::for_account(account_id, "ann@example.com", 15);
        let token = authenticator.issue_token(&claims).unwrap();

        let gate = gate_with(repository);
        let header = format!("Bearer {}", token);
        let identity = gate.admit(Some(&header)).await.expect("admission failed");

        assert_eq!(identity.id, account_id);
        assert_eq!(identity.email, "ann@example.com");
        assert_eq!(identity.name, "Ann");
    }

    #[tokio::test]
    async fn test_admit_missing_carrier() {
        let mut repository = MockTestAccountRepository::new();
        repository.expect_find_by_id().times(0);

        let gate = gate_with(repository);
        let result = gate.admit(None).await;
        assert!(matches!(result, Err(GateError::MissingCredential)));
    }

    #[tokio::test]
    async fn test_admit_non_bearer_scheme() {
        let mut repository = MockTestAccountRepository::new();
        repository.expect_find_by_id().times(0);

        let gate = gate_with(repository);
        let result = gate.admit(Some("Basic dXNlcjpwYXNz")).await;
        assert!(matches!(result, Err(GateError::MissingCredential)));
    }

    #[tokio::test]
    async fn test_admit_expired_token() {
        let mut repository = MockTestAccountRepository::new();
        repository.expect_find_by_id().times(0);

        let authenticator = Authenticator::new(SECRET);
        let mut claims = Claims::for_account(AccountId::new(), "ann@example.com", 15);
        // Push expiry well past the verifier's 60s leeway
        claims.iat -= 30 * 60;
        claims.exp = claims.iat + 60;
        let token = authenticator.issue_token(&claims).unwrap();

        let gate = gate_with(repository);
        let header = format!("Bearer {}", token);
        let result = gate.admit(Some(&header)).await;
        assert!(matches!(result, Err(GateError::Expired)));
    }

    #[tokio::test]
    async fn test_admit_token_from_other_secret() {
        let mut repository = MockTestAccountRepository::new();
        repository.expect_find_by_id().times(0);

        let other = Authenticator::new(b"another-secret-key-at-least-32-bytes-long");
        let claims = Claims::for_account(AccountId::new(), "ann@example.com", 15);
        let token = other.issue_token(&claims).unwrap();

        let gate = gate_with(repository);
        let header = format!("Bearer {}", token);
        let result = gate.admit(Some(&header)).await;
        assert!(matches!(result, Err(GateError::Invalid(_))));
    }

    #[tokio::test]
    async fn test_admit_unknown_identity() {
        // Valid token for an account that has since been deleted
        let mut repository = MockTestAccountRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let authenticator = Authenticator::new(SECRET);
        let claims = Claims::for_account(AccountId::new(), "ann@example.com", 15);
        let token = authenticator.issue_token(&claims).unwrap();

        let gate = gate_with(repository);
        let header = format!("Bearer {}", token);
        let result = gate.admit(Some(&header)).await;
        assert!(matches!(result, Err(GateError::UnknownIdentity(_))));
    }

    #[tokio::test]
    async fn test_admit_non_uuid_subject() {
        let mut repository = MockTestAccountRepository::new();
        repository.expect_find_by_id().times(0);

        let authenticator = Authenticator::new(SECRET);
        let claims = Claims::for_account("not-a-uuid", "ann@example.com", 15);
        let token = authenticator.issue_token(&claims).unwrap();

        let gate = gate_with(repository);
        let header = format!("Bearer {}", token);
        let result = gate.admit(Some(&header)).await;
        assert!(matches!(result, Err(GateError::Invalid(_))));
    }
}
