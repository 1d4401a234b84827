use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::book::errors::BookError;
use crate::book::ports::BookRepository;
use crate::book::ports::BookServicePort;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookFilter;
use crate::domain::book::models::BookId;
use crate::domain::book::models::CreateBookCommand;
use crate::domain::book::models::UpdateBookCommand;
use crate::domain::user::models::UserId;

/// Domain service implementation for the book catalogue.
///
/// Concrete implementation of BookServicePort with dependency injection.
pub struct BookService<BR>
where
    BR: BookRepository,
{
    repository: Arc<BR>,
}

impl<BR> BookService<BR>
where
    BR: BookRepository,
{
    /// Create a new book service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Book persistence implementation
    ///
    /// # Returns
    /// Configured book service instance
    pub fn new(repository: Arc<BR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<BR> BookServicePort for BookService<BR>
where
    BR: BookRepository,
{
    async fn create_book(
        &self,
        owner_id: &UserId,
        command: CreateBookCommand,
    ) -> Result<Book, BookError> {
        // Ownership comes from the authenticated caller, never the payload
        let book = Book {
            id: BookId::new(),
            title: command.title,
            description: command.description,
            author: command.author,
            category: command.category,
            rating: command.rating,
            owner_id: *owner_id,
            created_at: Utc::now(),
        };

        self.repository.create(book).await
    }

    async fn list_books(&self, filter: BookFilter) -> Result<Vec<Book>, BookError> {
        self.repository.list(&filter).await
    }

    async fn list_books_by_owner(&self, owner_id: &UserId) -> Result<Vec<Book>, BookError> {
        self.repository.list_by_owner(owner_id).await
    }

    async fn get_book(&self, id: &BookId) -> Result<Book, BookError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(BookError::NotFound)
    }

    async fn update_book(
        &self,
        id: &BookId,
        command: UpdateBookCommand,
    ) -> Result<Book, BookError> {
        let mut book = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(BookError::NotFound)?;

        if let Some(new_title) = command.title {
            book.title = new_title;
        }

        if let Some(new_description) = command.description {
            book.description = Some(new_description);
        }

        if let Some(new_author) = command.author {
            book.author = Some(new_author);
        }

        if let Some(new_category) = command.category {
            book.category = Some(new_category);
        }

        if let Some(new_rating) = command.rating {
            book.rating = Some(new_rating);
        }

        self.repository.update(book).await
    }

    async fn delete_book(&self, id: &BookId) -> Result<(), BookError> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::book::models::BookTitle;
    use crate::domain::book::models::Rating;

    // Define mocks in the test module using mockall
    mock! {
        pub TestBookRepository {}

        #[async_trait]
        impl BookRepository for TestBookRepository {
            async fn create(&self, book: Book) -> Result<Book, BookError>;
            async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError>;
            async fn list(&self, filter: &BookFilter) -> Result<Vec<Book>, BookError>;
            async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Book>, BookError>;
            async fn update(&self, book: Book) -> Result<Book, BookError>;
            async fn delete(&self, id: &BookId) -> Result<(), BookError>;
        }
    }

    fn sample_book(owner_id: UserId) -> Book {
        Book {
            id: BookId::new(),
            title: BookTitle::new("The Name of the Wind".to_string()).unwrap(),
            description: Some("A tale of Kvothe".to_string()),
            author: Some("Patrick Rothfuss".to_string()),
            category: Some("Fantasy".to_string()),
            rating: Some(Rating::new(4).unwrap()),
            owner_id,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_book_stamps_owner() {
        let owner_id = UserId::new();
        let mut repository = MockTestBookRepository::new();

        repository
            .expect_create()
            .withf(move |book| {
                book.owner_id == owner_id && book.title.as_str() == "The Name of the Wind"
            })
            .times(1)
            .returning(|book| Ok(book));

        let service = BookService::new(Arc::new(repository));

        let command = CreateBookCommand {
            title: BookTitle::new("The Name of the Wind".to_string()).unwrap(),
            description: None,
            author: Some("Patrick Rothfuss".to_string()),
            category: None,
            rating: None,
        };

        let result = service.create_book(&owner_id, command).await;
        assert!(result.is_ok());

        let book = result.unwrap();
        assert_eq!(book.owner_id, owner_id);
        assert_eq!(book.author.as_deref(), Some("Patrick Rothfuss"));
        assert!(book.rating.is_none());
    }

    #[tokio::test]
    async fn test_get_book_success() {
        let book = sample_book(UserId::new());
        let book_id = book.id;

        let mut repository = MockTestBookRepository::new();
        repository
            .expect_find_by_id()
            .withf(move |id| *id == book_id)
            .times(1)
            .returning(move |_| Ok(Some(book.clone())));

        let service = BookService::new(Arc::new(repository));

        let result = service.get_book(&book_id).await;
        assert!(result.is_ok());
        assert_eq!(result.unwrap().id, book_id);
    }

    #[tokio::test]
    async fn test_get_book_not_found() {
        let mut repository = MockTestBookRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = BookService::new(Arc::new(repository));

        let result = service.get_book(&BookId::new()).await;
        assert!(matches!(result, Err(BookError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_book_applies_only_provided_fields() {
        let book = sample_book(UserId::new());
        let book_id = book.id;

        let mut repository = MockTestBookRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(book.clone())));
        repository
            .expect_update()
            .withf(|updated| {
                updated.title.as_str() == "The Name of the Wind"
                    && updated.description.as_deref() == Some("A tale of Kvothe")
                    && updated.rating.map(|r| r.as_i32()) == Some(5)
            })
            .times(1)
            .returning(|updated| Ok(updated));

        let service = BookService::new(Arc::new(repository));

        let command = UpdateBookCommand {
            title: None,
            description: None,
            author: None,
            category: None,
            rating: Some(Rating::new(5).unwrap()),
        };

        let result = service.update_book(&book_id, command).await;
        assert!(result.is_ok());

        let updated = result.unwrap();
        assert_eq!(updated.rating.map(|r| r.as_i32()), Some(5));
        assert_eq!(updated.title.as_str(), "The Name of the Wind");
    }

    #[tokio::test]
    async fn test_update_book_not_found_skips_write() {
        let mut repository = MockTestBookRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        repository.expect_update().times(0);

        let service = BookService::new(Arc::new(repository));

        let command = UpdateBookCommand {
            title: None,
            description: None,
            author: None,
            category: None,
            rating: Some(Rating::new(3).unwrap()),
        };

        let result = service.update_book(&BookId::new(), command).await;
        assert!(matches!(result, Err(BookError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_book_propagates_not_found() {
        let mut repository = MockTestBookRepository::new();
        repository
            .expect_delete()
            .times(1)
            .returning(|_| Err(BookError::NotFound));

        let service = BookService::new(Arc::new(repository));

        let result = service.delete_book(&BookId::new()).await;
        assert!(matches!(result, Err(BookError::NotFound)));
    }

    #[tokio::test]
    async fn test_list_books_forwards_filter() {
        let mut repository = MockTestBookRepository::new();
        repository
            .expect_list()
            .withf(|filter| {
                filter.author.as_deref() == Some("Patrick Rothfuss") && filter.title.is_none()
            })
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = BookService::new(Arc::new(repository));

        let filter = BookFilter {
            author: Some("Patrick Rothfuss".to_string()),
            ..BookFilter::default()
        };

        let result = service.list_books(filter).await;
        assert!(result.is_ok());
        assert!(result.unwrap().is_empty());
    }
}
