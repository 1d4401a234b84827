use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::BookResponseData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// The owner-scoped counterpart of the catalogue listing: only books
/// created by the caller, no filtering.
pub async fn my_books(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<Vec<BookResponseData>>, ApiError> {
    state
        .book_service
        .list_books_by_owner(&auth_user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|books| {
            ApiSuccess::new(
                StatusCode::OK,
                books.iter().map(BookResponseData::from).collect(),
            )
        })
}
