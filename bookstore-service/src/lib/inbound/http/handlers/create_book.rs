use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;
use thiserror::Error;

use super::ApiError;
use super::ApiJson;
use super::ApiSuccess;
use super::BookResponseData;
use crate::book::errors::BookTitleError;
use crate::book::errors::RatingError;
use crate::domain::book::models::BookTitle;
use crate::domain::book::models::CreateBookCommand;
use crate::domain::book::models::Rating;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_book(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    ApiJson(body): ApiJson<CreateBookRequestBody>,
) -> Result<ApiSuccess<BookResponseData>, ApiError> {
    state
        .book_service
        .create_book(&auth_user.user_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref book| ApiSuccess::new(StatusCode::CREATED, book.into()))
}

/// HTTP request body for creating a book (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateBookRequestBody {
    title: String,
    description: Option<String>,
    author: Option<String>,
    category: Option<String>,
    rating: Option<i32>,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateBookRequestError {
    #[error("Invalid title: {0}")]
    Title(#[from] BookTitleError),

    #[error("Invalid rating: {0}")]
    Rating(#[from] RatingError),
}

impl CreateBookRequestBody {
    fn try_into_command(self) -> Result<CreateBookCommand, ParseCreateBookRequestError> {
        let title = BookTitle::new(self.title)?;
        let rating = self.rating.map(Rating::new).transpose()?;
        Ok(CreateBookCommand {
            title,
            description: self.description,
            author: self.author,
            category: self.category,
            rating,
        })
    }
}

impl From<ParseCreateBookRequestError> for ApiError {
    fn from(err: ParseCreateBookRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
