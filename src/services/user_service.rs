use crate::auth::{hash_password, verify_password};
use crate::config::AdminSeed;
use crate::models::{NewUser, ServiceError, User};
use crate::repositories::UserRepository;
use std::sync::Arc;

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_user(&self, id: i64) -> Result<Option<User>, ServiceError> {
        self.repository.find_by_id(id).await
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, ServiceError> {
        self.repository.find_by_username(username).await
    }

    /// Hashes `password` and stores the user. Fails with a constraint
    /// violation when the username is taken.
    pub async fn create_user(
        &self,
        username: &str,
        password: &str,
        email: &str,
        is_admin: bool,
    ) -> Result<User, ServiceError> {
        let user = NewUser {
            username: username.to_string(),
            password: hash_password(password)?,
            email: email.to_string(),
            is_admin,
        };

        let created = self.repository.create(user).await?;
        tracing::info!(id = created.id, username = %created.username, "Created user");
        Ok(created)
    }

    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, ServiceError> {
        let invalid = || ServiceError::AuthenticationError("Invalid credentials".to_string());

        let user = self.repository.find_by_username(username).await?.ok_or_else(invalid)?;
        if !verify_password(password, &user.password) {
            return Err(invalid());
        }
        Ok(user)
    }

    /// Create the configured admin account unless it already exists.
    pub async fn ensure_admin(&self, seed: &AdminSeed) -> Result<(), ServiceError> {
        if self.repository.find_by_username(&seed.username).await?.is_some() {
            return Ok(());
        }

        match &seed.password {
            Some(password) => {
                self.create_user(&seed.username, password, &seed.email, true).await?;
                tracing::info!(username = %seed.username, "Admin user initialized");
            }
            None => {
                tracing::warn!(
                    username = %seed.username,
                    "No admin user exists and ADMIN_PASSWORD is not set; admin routes are unreachable"
                );
            }
        }
        Ok(())
    }
}
