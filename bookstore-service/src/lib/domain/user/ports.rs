use async_trait::async_trait;

use crate::domain::user::models::AccessToken;
use crate::domain::user::models::AuthenticateUserCommand;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::user::errors::AuthError;

/// Port for authentication service operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user and issue an access token.
    ///
    /// # Arguments
    /// * `command` - Validated command containing email and password
    ///
    /// # Returns
    /// Signed access token for the created user
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn signup(&self, command: CreateUserCommand) -> Result<AccessToken, AuthError>;

    /// Verify credentials and issue an access token.
    ///
    /// # Arguments
    /// * `command` - Validated email and the password to check
    ///
    /// # Returns
    /// Signed access token for the authenticated user
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password; the two
    ///   cases are indistinguishable to the caller
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, command: AuthenticateUserCommand) -> Result<AccessToken, AuthError>;
}

/// Persistence operations for the user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// Uniqueness of the email is the adapter's responsibility: when two
    /// inserts race on the same email, exactly one succeeds and the other
    /// reports `EmailAlreadyExists`.
    ///
    /// # Arguments
    /// * `user` - User entity to create
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, AuthError>;

    /// Retrieve user by email address.
    ///
    /// # Arguments
    /// * `email` - Email address to search for
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, AuthError>;
}
