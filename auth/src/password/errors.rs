use thiserror::Error;

/// Error type for password operations.
///
/// Verification has no error: a hash that cannot be parsed verifies false.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}
