use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::Claims;
use chrono::Utc;

use crate::domain::user::models::AccessToken;
use crate::domain::user::models::AuthenticateUserCommand;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::AuthError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

/// Domain service implementation for signup and login.
///
/// Concrete implementation of AuthServicePort with dependency injection.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
    jwt_expiration_hours: i64,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hashing and JWT signing facade
    /// * `jwt_expiration_hours` - Token lifetime in hours
    ///
    /// # Returns
    /// Configured auth service instance
    pub fn new(
        repository: Arc<UR>,
        authenticator: Arc<Authenticator>,
        jwt_expiration_hours: i64,
    ) -> Self {
        Self {
            repository,
            authenticator,
            jwt_expiration_hours,
        }
    }

    fn issue_token(&self, user: &User) -> Result<AccessToken, AuthError> {
        let claims = Claims::for_user(user.id, user.email.as_str(), self.jwt_expiration_hours);
        self.authenticator
            .generate_token(&claims)
            .map(AccessToken)
            .map_err(|e| AuthError::Unknown(format!("Token generation failed: {}", e)))
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn signup(&self, command: CreateUserCommand) -> Result<AccessToken, AuthError> {
        // Hash password using auth library
        let password_hash = self
            .authenticator
            .hash_password(command.password.as_str())
            .map_err(|e| AuthError::Unknown(format!("Password hashing failed: {}", e)))?;

        let user = User {
            id: UserId::new(),
            email: command.email,
            password_hash,
            created_at: Utc::now(),
        };

        // The repository reports the duplicate; no pre-check here, so two
        // racing signups cannot both pass a read-then-write gap
        let created_user = self.repository.create(user).await?;

        self.issue_token(&created_user)
    }

    async fn login(&self, command: AuthenticateUserCommand) -> Result<AccessToken, AuthError> {
        let user = self
            .repository
            .find_by_email(&command.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self
            .authenticator
            .verify_password(&command.password, &user.password_hash)
        {
            return Err(AuthError::InvalidCredentials);
        }

        self.issue_token(&user)
    }
}
