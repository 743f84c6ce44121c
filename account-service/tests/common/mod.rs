use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use account_service::account::errors::AccountError;
use account_service::account::models::Account;
use account_service::account::models::AccountId;
use account_service::account::ports::AccountRepository;
use account_service::domain::account::service::AccountService;
use account_service::domain::auth::AuthorizationGate;
use account_service::inbound::http::router::create_router;
use async_trait::async_trait;
use auth::Authenticator;
use auth::JwtHandler;
use uuid::Uuid;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// In-memory stand-in for the external account store.
///
/// Mirrors the Postgres adapter's contract, including exact-match
/// email uniqueness on create/update.
#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: Mutex<HashMap<Uuid, Account>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.accounts.lock().unwrap().len()
    }

    pub fn get(&self, id: &AccountId) -> Option<Account> {
        self.accounts.lock().unwrap().get(&id.0).cloned()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, account: Account) -> Result<Account, AccountError> {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts
            .values()
            .any(|existing| existing.email == account.email)
        {
            return Err(AccountError::EmailAlreadyExists(
                account.email.as_str().to_string(),
            ));
        }
        accounts.insert(account.id.0, account.clone());
        Ok(account)
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, AccountError> {
        Ok(self.accounts.lock().unwrap().get(&id.0).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .values()
            .find(|account| account.email.as_str() == email)
            .cloned())
    }

    async fn update(&self, account: Account) -> Result<Account, AccountError> {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts
            .values()
            .any(|existing| existing.id != account.id && existing.email == account.email)
        {
            return Err(AccountError::EmailAlreadyExists(
                account.email.as_str().to_string(),
            ));
        }
        if !accounts.contains_key(&account.id.0) {
            return Err(AccountError::NotFound(account.id.to_string()));
        }
        accounts.insert(account.id.0, account.clone());
        Ok(account)
    }

    async fn delete(&self, id: &AccountId) -> Result<(), AccountError> {
        if self.accounts.lock().unwrap().remove(&id.0).is_none() {
            return Err(AccountError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub repository: Arc<InMemoryAccountRepository>,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let repository = Arc::new(InMemoryAccountRepository::new());
        let authenticator = Arc::new(Authenticator::new(TEST_SECRET));

        let account_service = Arc::new(AccountService::new(
            Arc::clone(&repository),
            Arc::clone(&authenticator),
            15,
        ));
        let gate = Arc::new(AuthorizationGate::new(
            Arc::clone(&authenticator),
            Arc::clone(&repository) as Arc<dyn AccountRepository>,
        ));

        let router = create_router(account_service, gate);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            repository,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(TEST_SECRET),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make PATCH request
    pub fn patch(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.patch(format!("{}{}", self.address, path))
    }

    /// Helper to make DELETE request
    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Sign up an account and return the response body.
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> serde_json::Value {
        let response = self
            .post("/api/auth/signup")
            .json(&serde_json::json!({
                "name": name,
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute signup request");

        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        response.json().await.expect("Failed to parse signup body")
    }
}
