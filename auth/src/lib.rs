//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure:
//! - Password hashing (Argon2id)
//! - JWT access token generation and validation
//! - Authentication coordination
//!
//! The service defines its own domain traits and adapts these
//! implementations, keeping credential handling out of business logic.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("other_password", &hash));
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::{Claims, JwtHandler};
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::for_user("user123", "alice@example.com", 24);
//! let token = handler.encode(&claims).unwrap();
//! let decoded = handler.decode(&token).unwrap();
//! assert_eq!(decoded.sub, "user123");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, Claims};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Signup: hash the password for storage
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify the password and generate a token
//! assert!(auth.verify_password("password123", &hash));
//! let claims = Claims::for_user("user123", "alice@example.com", 24);
//! let token = auth.generate_token(&claims).unwrap();
//!
//! // Guarded request: validate the token
//! let decoded = auth.validate_token(&token).unwrap();
//! assert_eq!(decoded.email, "alice@example.com");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
