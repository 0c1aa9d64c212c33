use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserProfile;
use crate::user::errors::UserError;
use crate::user::models::Username;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user, storing a peppered Argon2id hash of the password.
    ///
    /// # Arguments
    /// * `command` - Validated command containing username, email, and password
    ///
    /// # Returns
    /// Identifier of the created user
    ///
    /// # Errors
    /// * `Password` - Password is empty or hashing failed
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `StoreUnavailable` / `DatabaseError` - Store operation failed
    async fn create_user(&self, command: CreateUserCommand) -> Result<UserId, UserError>;

    /// Check a username/password pair.
    ///
    /// Unknown usernames, inactive accounts and wrong passwords all yield `None`,
    /// so callers cannot tell them apart. On success `last_login` is updated.
    ///
    /// # Returns
    /// Profile of the authenticated user, or None
    ///
    /// # Errors
    /// * `Password(EmptyPassword)` - Password is empty
    /// * `Password(MalformedHash)` - Stored hash record is corrupt
    /// * `StoreUnavailable` / `DatabaseError` - Store operation failed
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<UserProfile>, UserError>;

    /// Replace a user's password after checking the current one.
    ///
    /// # Returns
    /// True if the password was changed; false if the user is unknown or
    /// inactive or the old password does not match (nothing is written)
    ///
    /// # Errors
    /// * `Password` - A password is empty or the stored hash is corrupt
    /// * `StoreUnavailable` / `DatabaseError` - Store operation failed
    async fn change_password(
        &self,
        id: &UserId,
        old_password: &str,
        new_password: &str,
    ) -> Result<bool, UserError>;

    /// Soft-delete a user by clearing its active flag.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `StoreUnavailable` / `DatabaseError` - Store operation failed
    async fn deactivate(&self, id: &UserId) -> Result<(), UserError>;

    /// Retrieve a user's profile.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `StoreUnavailable` / `DatabaseError` - Store operation failed
    async fn get_user(&self, id: &UserId) -> Result<UserProfile, UserError>;
}

/// Persistence operations for user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `StoreUnavailable` / `DatabaseError` - Store operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by username.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    /// Replace the stored password hash record and bump `updated_at`.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    async fn update_password_hash(&self, id: &UserId, password_hash: &str)
        -> Result<(), UserError>;

    /// Set `last_login` to the current time.
    ///
    /// # Returns
    /// The stored login timestamp
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    async fn record_login(&self, id: &UserId) -> Result<DateTime<Utc>, UserError>;

    /// Clear the active flag without removing the row.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    async fn deactivate(&self, id: &UserId) -> Result<(), UserError>;
}
