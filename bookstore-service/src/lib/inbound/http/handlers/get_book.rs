use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::BookResponseData;
use crate::domain::book::models::BookId;
use crate::inbound::http::router::AppState;

pub async fn get_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> Result<ApiSuccess<BookResponseData>, ApiError> {
    let book_id = BookId::from_string(&book_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .book_service
        .get_book(&book_id)
        .await
        .map_err(ApiError::from)
        .map(|ref book| ApiSuccess::new(StatusCode::OK, book.into()))
}
