#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenCipher;
use chrono::Duration;
use finance_service::domain::auth::service::AuthService;
use finance_service::domain::transaction::errors::TransactionError;
use finance_service::domain::transaction::models::NewTransaction;
use finance_service::domain::transaction::models::Transaction;
use finance_service::domain::transaction::models::TransactionId;
use finance_service::domain::transaction::ports::TransactionRepository;
use finance_service::domain::transaction::service::TransactionService;
use finance_service::domain::user::errors::UserError;
use finance_service::domain::user::models::NewUser;
use finance_service::domain::user::models::User;
use finance_service::domain::user::models::UserId;
use finance_service::domain::user::ports::UserRepository;
use finance_service::inbound::http::router::create_router;
use serde_json::json;
use serde_json::Value;

pub const TEST_KEY: &[u8; 32] = b"test_symmetric_key_32_bytes_long";

/// Credential store kept in memory, enforcing email uniqueness like the
/// `users_email_key` constraint.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }

        let user = user.with_id(UserId(users.len() as i64 + 1));
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email.as_str() == email).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryTransactionRepository {
    state: Mutex<(i64, Vec<Transaction>)>,
}

#[async_trait]
impl TransactionRepository for InMemoryTransactionRepository {
    async fn create(&self, transaction: NewTransaction) -> Result<Transaction, TransactionError> {
        let mut state = self.state.lock().unwrap();
        state.0 += 1;
        let transaction = transaction.with_id(TransactionId(state.0));
        state.1.push(transaction.clone());
        Ok(transaction)
    }

    async fn find_by_id(
        &self,
        id: TransactionId,
    ) -> Result<Option<Transaction>, TransactionError> {
        let state = self.state.lock().unwrap();
        Ok(state.1.iter().find(|t| t.id == id).cloned())
    }

    async fn find_by_user(&self, user_id: UserId) -> Result<Vec<Transaction>, TransactionError> {
        let state = self.state.lock().unwrap();
        let mut owned: Vec<Transaction> = state
            .1
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(owned)
    }

    async fn update(&self, transaction: Transaction) -> Result<Transaction, TransactionError> {
        let mut state = self.state.lock().unwrap();
        let stored = state
            .1
            .iter_mut()
            .find(|t| t.id == transaction.id)
            .ok_or(TransactionError::NotFound(transaction.id))?;
        *stored = transaction.clone();
        Ok(transaction)
    }

    async fn delete(&self, id: TransactionId) -> Result<(), TransactionError> {
        let mut state = self.state.lock().unwrap();
        let before = state.1.len();
        state.1.retain(|t| t.id != id);
        if state.1.len() == before {
            return Err(TransactionError::NotFound(id));
        }
        Ok(())
    }
}

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub users: Arc<InMemoryUserRepository>,
    pub token_cipher: TokenCipher,
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

        let users = Arc::new(InMemoryUserRepository::default());
        let transactions = Arc::new(InMemoryTransactionRepository::default());
        let token_cipher = TokenCipher::new(TEST_KEY).expect("Failed to create token cipher");
        // Low work factor keeps the suite fast
        let password_hasher =
            PasswordHasher::with_params(8, 1, 1).expect("Failed to create password hasher");

        let auth_service = Arc::new(
            AuthService::new(
                Arc::clone(&users),
                Arc::new(token_cipher.clone()),
                Arc::new(password_hasher),
                Duration::hours(24),
            )
            .expect("Failed to create auth service"),
        );
        let transaction_service = Arc::new(TransactionService::new(transactions));

        let router = create_router(auth_service, transaction_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            users,
            token_cipher,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(self.url(path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(self.url(path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client.put(self.url(path)).bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(self.url(path)).bearer_auth(token)
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> reqwest::Response {
        self.post("/api/v1/auth/register")
            .json(&json!({ "name": name, "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/api/v1/auth/login")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Register a user and return a bearer token for it
    pub async fn register_and_login(&self, name: &str, email: &str) -> String {
        let response = self.register(name, email, "secret123").await;
        assert_eq!(response.status(), 201);

        let body: Value = self
            .login(email, "secret123")
            .await
            .json()
            .await
            .expect("Failed to parse login response");

        body["access_token"]
            .as_str()
            .expect("Missing access_token")
            .to_string()
    }
}
