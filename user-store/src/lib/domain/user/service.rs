use std::sync::Arc;

use async_trait::async_trait;
use credentials::PasswordError;
use credentials::PasswordHasher;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserProfile;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
/// The password hasher carries the pepper; it is built once at startup and shared.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: Arc<PasswordHasher>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `password_hasher` - Peppered Argon2id hasher
    ///
    /// # Returns
    /// Configured user service instance
    pub fn new(repository: Arc<UR>, password_hasher: Arc<PasswordHasher>) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }

    /// Re-hash a just-verified password under the current parameters.
    ///
    /// Failures are logged only; the login that triggered the upgrade still succeeds.
    async fn upgrade_password_hash(&self, id: &UserId, password: &str) {
        let new_hash = match self.password_hasher.hash(password) {
            Ok(hash) => hash,
            Err(e) => {
                tracing::warn!(user_id = %id, error = %e, "Failed to rehash password");
                return;
            }
        };

        match self.repository.update_password_hash(id, &new_hash).await {
            Ok(()) => tracing::info!(user_id = %id, "Password hash upgraded to current parameters"),
            Err(e) => tracing::warn!(user_id = %id, error = %e, "Failed to store rehashed password"),
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<UserId, UserError> {
        let password_hash = self.password_hasher.hash(&command.password)?;

        let user = User::register(command.username, command.email, password_hash);
        let created_user = self.repository.create(user).await?;

        tracing::info!(
            user_id = %created_user.id,
            username = %created_user.username,
            "User created"
        );

        Ok(created_user.id)
    }

    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<UserProfile>, UserError> {
        // Checked before the lookup so the outcome does not depend on whether the user exists
        if password.is_empty() {
            return Err(PasswordError::EmptyPassword.into());
        }

        let username = match Username::new(username.to_string()) {
            Ok(username) => username,
            Err(_) => {
                tracing::debug!("Authentication rejected: malformed username");
                return Ok(None);
            }
        };

        let user = match self.repository.find_by_username(&username).await? {
            Some(user) if user.is_active => user,
            Some(user) => {
                tracing::info!(user_id = %user.id, "Authentication rejected: account inactive");
                return Ok(None);
            }
            None => {
                tracing::debug!("Authentication rejected: unknown username");
                return Ok(None);
            }
        };

        if !self.password_hasher.verify(password, &user.password_hash)? {
            tracing::info!(user_id = %user.id, "Authentication failed");
            return Ok(None);
        }

        if self.password_hasher.needs_rehash(&user.password_hash) {
            self.upgrade_password_hash(&user.id, password).await;
        }

        let last_login = self.repository.record_login(&user.id).await?;
        tracing::info!(user_id = %user.id, "User authenticated");

        let mut profile = UserProfile::from(user);
        profile.last_login = Some(last_login);

        Ok(Some(profile))
    }

    async fn change_password(
        &self,
        id: &UserId,
        old_password: &str,
        new_password: &str,
    ) -> Result<bool, UserError> {
        let user = match self.repository.find_by_id(id).await? {
            Some(user) if user.is_active => user,
            _ => return Ok(false),
        };

        if !self.password_hasher.verify(old_password, &user.password_hash)? {
            tracing::info!(user_id = %id, "Password change rejected: old password mismatch");
            return Ok(false);
        }

        let new_hash = self.password_hasher.hash(new_password)?;
        self.repository.update_password_hash(id, &new_hash).await?;

        tracing::info!(user_id = %id, "Password changed");

        Ok(true)
    }

    async fn deactivate(&self, id: &UserId) -> Result<(), UserError> {
        self.repository.deactivate(id).await?;

        tracing::info!(user_id = %id, "User deactivated");

        Ok(())
    }

    async fn get_user(&self, id: &UserId) -> Result<UserProfile, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .map(UserProfile::from)
            .ok_or(UserError::NotFound(id.to_string()))
    }
}
