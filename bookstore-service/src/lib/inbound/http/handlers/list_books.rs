use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::BookResponseData;
use crate::domain::book::models::BookFilter;
use crate::inbound::http::router::AppState;

pub async fn list_books(
    State(state): State<AppState>,
    Query(query): Query<ListBooksQuery>,
) -> Result<ApiSuccess<Vec<BookResponseData>>, ApiError> {
    state
        .book_service
        .list_books(query.into_filter())
        .await
        .map_err(ApiError::from)
        .map(|books| {
            ApiSuccess::new(
                StatusCode::OK,
                books.iter().map(BookResponseData::from).collect(),
            )
        })
}

/// Query string accepted by the catalogue listing.
///
/// The rating is taken as a plain integer on purpose: a value outside
/// the 1 to 5 scale is a valid query that matches no book.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListBooksQuery {
    author: Option<String>,
    category: Option<String>,
    rating: Option<i32>,
    title: Option<String>,
}

impl ListBooksQuery {
    fn into_filter(self) -> BookFilter {
        BookFilter {
            author: self.author,
            category: self.category,
            rating: self.rating,
            title: self.title,
        }
    }
}
