use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use super::AccessTokenResponseData;
use super::ApiError;
use super::ApiJson;
use super::ApiSuccess;
use crate::domain::user::models::AuthenticateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::inbound::http::router::AppState;
use crate::user::errors::EmailError;

pub async fn login(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<LoginRequestBody>,
) -> Result<ApiSuccess<AccessTokenResponseData>, ApiError> {
    state
        .auth_service
        .login(body.try_into_command()?)
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

/// HTTP request body for authenticating a user (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    email: String,
    password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseLoginRequestError {
    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),
}

impl LoginRequestBody {
    // The password is deliberately not length-checked here: a short
    // password must fail as a credential mismatch, not as bad input
    fn try_into_command(self) -> Result<AuthenticateUserCommand, ParseLoginRequestError> {
        let email = EmailAddress::new(self.email)?;
        Ok(AuthenticateUserCommand::new(email, self.password))
    }
}

impl From<ParseLoginRequestError> for ApiError {
    fn from(err: ParseLoginRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
