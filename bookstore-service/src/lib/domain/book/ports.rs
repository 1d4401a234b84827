use async_trait::async_trait;

use crate::book::errors::BookError;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookFilter;
use crate::domain::book::models::BookId;
use crate::domain::book::models::CreateBookCommand;
use crate::domain::book::models::UpdateBookCommand;
use crate::domain::user::models::UserId;

/// Port for book catalogue service operations.
#[async_trait]
pub trait BookServicePort: Send + Sync + 'static {
    /// Create a new book owned by the given user.
    ///
    /// # Arguments
    /// * `owner_id` - User the book is stamped with
    /// * `command` - Validated command containing title and optional fields
    ///
    /// # Returns
    /// Created book entity
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_book(
        &self,
        owner_id: &UserId,
        command: CreateBookCommand,
    ) -> Result<Book, BookError>;

    /// List books matching the filter, across all owners.
    ///
    /// # Arguments
    /// * `filter` - Search criteria; an empty filter returns everything
    ///
    /// # Returns
    /// Vector of matching books
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_books(&self, filter: BookFilter) -> Result<Vec<Book>, BookError>;

    /// List the books created by one user.
    ///
    /// # Arguments
    /// * `owner_id` - Owner to list books for
    ///
    /// # Returns
    /// Vector of books owned by the user
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_books_by_owner(&self, owner_id: &UserId) -> Result<Vec<Book>, BookError>;

    /// Retrieve book by unique identifier.
    ///
    /// # Arguments
    /// * `id` - Book ID
    ///
    /// # Returns
    /// Book entity
    ///
    /// # Errors
    /// * `NotFound` - Book does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_book(&self, id: &BookId) -> Result<Book, BookError>;

    /// Update existing book with optional fields.
    ///
    /// # Arguments
    /// * `id` - Book ID to update
    /// * `command` - Command with optional fields; absent fields are kept
    ///
    /// # Returns
    /// Updated book entity
    ///
    /// # Errors
    /// * `NotFound` - Book does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_book(&self, id: &BookId, command: UpdateBookCommand)
        -> Result<Book, BookError>;

    /// Delete existing book.
    ///
    /// # Arguments
    /// * `id` - Book ID to delete
    ///
    /// # Returns
    /// Unit on success
    ///
    /// # Errors
    /// * `NotFound` - Book does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_book(&self, id: &BookId) -> Result<(), BookError>;
}

/// Persistence operations for the book aggregate.
#[async_trait]
pub trait BookRepository: Send + Sync + 'static {
    /// Persist new book to storage.
    ///
    /// # Arguments
    /// * `book` - Book entity to create
    ///
    /// # Returns
    /// Created book entity
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, book: Book) -> Result<Book, BookError>;

    /// Retrieve book by identifier.
    ///
    /// # Arguments
    /// * `id` - Book ID
    ///
    /// # Returns
    /// Optional book entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError>;

    /// Retrieve books matching the filter.
    ///
    /// # Arguments
    /// * `filter` - Search criteria; empty criteria match everything
    ///
    /// # Returns
    /// Vector of matching books, newest first
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list(&self, filter: &BookFilter) -> Result<Vec<Book>, BookError>;

    /// Retrieve books owned by one user.
    ///
    /// # Arguments
    /// * `owner_id` - Owner to list books for
    ///
    /// # Returns
    /// Vector of owned books, newest first
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Book>, BookError>;

    /// Update existing book in storage.
    ///
    /// # Arguments
    /// * `book` - Book entity with updated fields
    ///
    /// # Returns
    /// Updated book entity
    ///
    /// # Errors
    /// * `NotFound` - Book does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, book: Book) -> Result<Book, BookError>;

    /// Remove book from storage.
    ///
    /// # Arguments
    /// * `id` - Book ID to delete
    ///
    /// # Returns
    /// Unit on success
    ///
    /// # Errors
    /// * `NotFound` - Book does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &BookId) -> Result<(), BookError>;
}
