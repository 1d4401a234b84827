use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by an access token.
///
/// `sub` holds the user identifier and `email` the login identifier.
/// Timestamps are Unix seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Email address of the authenticated user
    pub email: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for an authenticated user with automatic expiration.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier, stored in `sub`
    /// * `email` - Email address of the user
    /// * `expiration_hours` - Hours until the token expires
    ///
    /// # Returns
    /// Claims with sub, email, iat, and exp set
    pub fn for_user(user_id: impl ToString, email: impl ToString, expiration_hours: i64) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(expiration_hours);

        Self {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }
}
