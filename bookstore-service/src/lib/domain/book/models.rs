use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::book::errors::BookIdError;
use crate::book::errors::BookTitleError;
use crate::book::errors::RatingError;
use crate::domain::user::models::UserId;

/// Book aggregate entity.
///
/// Every book belongs to the user who created it; all other fields
/// besides the title are optional.
#[derive(Debug, Clone)]
pub struct Book {
    pub id: BookId,
    pub title: BookTitle,
    pub description: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub rating: Option<Rating>,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Book unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookId(pub Uuid);

impl BookId {
    /// Generate a new random book ID.
    ///
    /// # Returns
    /// BookId with random UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a book ID from string.
    ///
    /// # Arguments
    /// * `s` - UUID string to parse
    ///
    /// # Returns
    /// Parsed BookId
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, BookIdError> {
        Uuid::parse_str(s)
            .map(BookId)
            .map_err(|e| BookIdError::InvalidFormat(e.to_string()))
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Book title value type
///
/// The only hard requirement on a title is that it is not empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookTitle(String);

impl BookTitle {
    /// Create a new non-empty book title.
    ///
    /// # Arguments
    /// * `title` - Raw title string
    ///
    /// # Returns
    /// Validated BookTitle value object
    ///
    /// # Errors
    /// * `Empty` - Title is the empty string
    pub fn new(title: String) -> Result<Self, BookTitleError> {
        if title.is_empty() {
            return Err(BookTitleError::Empty);
        }
        Ok(Self(title))
    }

    /// Get title as string slice.
    ///
    /// # Returns
    /// Title string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Star rating value type
///
/// Ensures the rating stays within the 1 to 5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rating(i32);

impl Rating {
    const MIN: i32 = 1;
    const MAX: i32 = 5;

    /// Create a new range-checked rating.
    ///
    /// # Arguments
    /// * `rating` - Raw rating value
    ///
    /// # Returns
    /// Validated Rating value object
    ///
    /// # Errors
    /// * `OutOfRange` - Rating outside 1 to 5
    pub fn new(rating: i32) -> Result<Self, RatingError> {
        if !(Self::MIN..=Self::MAX).contains(&rating) {
            return Err(RatingError::OutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: rating,
            });
        }
        Ok(Self(rating))
    }

    /// Get the rating as a plain integer.
    ///
    /// # Returns
    /// Rating value between 1 and 5
    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

/// Command to create a new book with domain types
#[derive(Debug)]
pub struct CreateBookCommand {
    pub title: BookTitle,
    pub description: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub rating: Option<Rating>,
}

/// Command to update an existing book with optional validated fields.
///
/// All fields are optional to support partial updates.
/// Only provided fields will be updated.
#[derive(Debug)]
pub struct UpdateBookCommand {
    pub title: Option<BookTitle>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub rating: Option<Rating>,
}

/// Catalogue search criteria.
///
/// Every field is optional; present fields are combined with AND.
/// Author, category and rating match exactly, the title matches as a
/// case-insensitive substring. The rating stays a raw integer here: an
/// out-of-range value is a legal query that simply matches nothing.
#[derive(Debug, Clone, Default)]
pub struct BookFilter {
    pub author: Option<String>,
    pub category: Option<String>,
    pub rating: Option<i32>,
    pub title: Option<String>,
}
