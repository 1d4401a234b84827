use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use super::AccessTokenResponseData;
use super::ApiError;
use super::ApiJson;
use super::ApiSuccess;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::inbound::http::router::AppState;
use crate::user::errors::EmailError;
use crate::user::errors::PasswordError;

pub async fn signup(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<SignupRequestBody>,
) -> Result<ApiSuccess<AccessTokenResponseData>, ApiError> {
    state
        .auth_service
        .signup(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|token| {
            ApiSuccess::new(
                StatusCode::CREATED,
                AccessTokenResponseData {
                    access_token: token.0,
                },
            )
        })
}

/// HTTP request body for registering a user (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignupRequestBody {
    email: String,
    password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseSignupRequestError {
    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Invalid password: {0}")]
    Password(#[from] PasswordError),
}

impl SignupRequestBody {
    fn try_into_command(self) -> Result<CreateUserCommand, ParseSignupRequestError> {
        let email = EmailAddress::new(self.email)?;
        let password = Password::new(self.password)?;
        Ok(CreateUserCommand::new(email, password))
    }
}

impl From<ParseSignupRequestError> for ApiError {
    fn from(err: ParseSignupRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
