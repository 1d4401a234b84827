use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use super::ApiError;
use super::ApiJson;
use super::ApiSuccess;
use super::BookResponseData;
use crate::book::errors::BookTitleError;
use crate::book::errors::RatingError;
use crate::domain::book::models::BookId;
use crate::domain::book::models::BookTitle;
use crate::domain::book::models::Rating;
use crate::domain::book::models::UpdateBookCommand;
use crate::inbound::http::router::AppState;

pub async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    ApiJson(body): ApiJson<UpdateBookRequestBody>,
) -> Result<ApiSuccess<BookResponseData>, ApiError> {
    let book_id = BookId::from_string(&book_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .book_service
        .update_book(&book_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref book| ApiSuccess::new(StatusCode::OK, book.into()))
}

/// HTTP request body for a partial book update (raw JSON).
///
/// Absent fields leave the stored value untouched.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateBookRequestBody {
    title: Option<String>,
    description: Option<String>,
    author: Option<String>,
    category: Option<String>,
    rating: Option<i32>,
}

#[derive(Debug, Clone, Error)]
enum ParseUpdateBookRequestError {
    #[error("Invalid title: {0}")]
    Title(#[from] BookTitleError),

    #[error("Invalid rating: {0}")]
    Rating(#[from] RatingError),
}

impl UpdateBookRequestBody {
    fn try_into_command(self) -> Result<UpdateBookCommand, ParseUpdateBookRequestError> {
        let title = self.title.map(BookTitle::new).transpose()?;
        let rating = self.rating.map(Rating::new).transpose()?;
        Ok(UpdateBookCommand {
            title,
            description: self.description,
            author: self.author,
            category: self.category,
            rating,
        })
    }
}

impl From<ParseUpdateBookRequestError> for ApiError {
    fn from(err: ParseUpdateBookRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
