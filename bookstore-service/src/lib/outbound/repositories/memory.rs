use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::book::errors::BookError;
use crate::book::ports::BookRepository;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookFilter;
use crate::domain::book::models::BookId;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::AuthError;

/// In-memory user store.
///
/// Backs tests and local runs without a database. The duplicate check
/// and the insert happen under one write lock, so racing signups get
/// the same uniqueness guarantee the unique index gives Postgres.
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, AuthError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(AuthError::EmailAlreadyExists);
        }

        users.insert(user.id.0, user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, AuthError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| &u.email == email).cloned())
    }
}

/// In-memory book store mirroring the Postgres adapter's semantics,
/// including newest-first ordering.
pub struct InMemoryBookRepository {
    books: RwLock<HashMap<Uuid, Book>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self {
            books: RwLock::new(HashMap::new()),
        }
    }

    fn matches(book: &Book, filter: &BookFilter) -> bool {
        if let Some(author) = &filter.author {
            if book.author.as_deref() != Some(author.as_str()) {
                return false;
            }
        }

        if let Some(category) = &filter.category {
            if book.category.as_deref() != Some(category.as_str()) {
                return false;
            }
        }

        if let Some(rating) = filter.rating {
            if book.rating.map(|r| r.as_i32()) != Some(rating) {
                return false;
            }
        }

        if let Some(title) = &filter.title {
            let haystack = book.title.as_str().to_lowercase();
            if !haystack.contains(&title.to_lowercase()) {
                return false;
            }
        }

        true
    }

    fn newest_first(mut books: Vec<Book>) -> Vec<Book> {
        books.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        books
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn create(&self, book: Book) -> Result<Book, BookError> {
        let mut books = self.books.write().await;
        books.insert(book.id.0, book.clone());
        Ok(book)
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError> {
        let books = self.books.read().await;
        Ok(books.get(&id.0).cloned())
    }

    async fn list(&self, filter: &BookFilter) -> Result<Vec<Book>, BookError> {
        let books = self.books.read().await;
        let matching = books
            .values()
            .filter(|b| Self::matches(b, filter))
            .cloned()
            .collect();
        Ok(Self::newest_first(matching))
    }

    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Book>, BookError> {
        let books = self.books.read().await;
        let owned = books
            .values()
            .filter(|b| b.owner_id == *owner_id)
            .cloned()
            .collect();
        Ok(Self::newest_first(owned))
    }

    async fn update(&self, book: Book) -> Result<Book, BookError> {
        let mut books = self.books.write().await;

        if !books.contains_key(&book.id.0) {
            return Err(BookError::NotFound);
        }

        books.insert(book.id.0, book.clone());
        Ok(book)
    }

    async fn delete(&self, id: &BookId) -> Result<(), BookError> {
        let mut books = self.books.write().await;
        books.remove(&id.0).map(|_| ()).ok_or(BookError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::book::models::BookTitle;
    use crate::domain::book::models::Rating;

    fn user(email: &str) -> User {
        User {
            id: UserId::new(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            password_hash: "$argon2id$stub".to_string(),
            created_at: Utc::now(),
        }
    }

    fn book(title: &str, author: Option<&str>, rating: Option<i32>, owner_id: UserId) -> Book {
        Book {
            id: BookId::new(),
            title: BookTitle::new(title.to_string()).unwrap(),
            description: None,
            author: author.map(str::to_string),
            category: None,
            rating: rating.map(|r| Rating::new(r).unwrap()),
            owner_id,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_user_rejects_duplicate_email() {
        let repository = InMemoryUserRepository::new();

        let first = repository.create(user("dup@example.com")).await;
        assert!(first.is_ok());

        let second = repository.create(user("dup@example.com")).await;
        assert!(matches!(second, Err(AuthError::EmailAlreadyExists)));
    }

    #[tokio::test]
    async fn test_concurrent_create_same_email_one_wins() {
        let repository = InMemoryUserRepository::new();

        let (first, second) = tokio::join!(
            repository.create(user("race@example.com")),
            repository.create(user("race@example.com")),
        );

        // Exactly one of the racing inserts may succeed
        assert!(first.is_ok() != second.is_ok());

        let survivor = repository
            .find_by_email(&EmailAddress::new("race@example.com".to_string()).unwrap())
            .await
            .unwrap();
        assert!(survivor.is_some());
    }

    #[tokio::test]
    async fn test_find_by_email_roundtrip() {
        let repository = InMemoryUserRepository::new();
        let created = repository.create(user("find@example.com")).await.unwrap();

        let found = repository
            .find_by_email(&EmailAddress::new("find@example.com".to_string()).unwrap())
            .await
            .unwrap();
        assert_eq!(found.map(|u| u.id), Some(created.id));

        let missing = repository
            .find_by_email(&EmailAddress::new("other@example.com".to_string()).unwrap())
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_list_applies_all_filters() {
        let repository = InMemoryBookRepository::new();
        let owner_id = UserId::new();

        repository
            .create(book("The Rust Book", Some("Steve Klabnik"), Some(5), owner_id))
            .await
            .unwrap();
        repository
            .create(book("Rust for Rustaceans", Some("Jon Gjengset"), Some(5), owner_id))
            .await
            .unwrap();
        repository
            .create(book("The Hobbit", Some("J.R.R. Tolkien"), Some(4), owner_id))
            .await
            .unwrap();

        let by_author = repository
            .list(&BookFilter {
                author: Some("Jon Gjengset".to_string()),
                ..BookFilter::default()
            })
            .await
            .unwrap();
        assert_eq!(by_author.len(), 1);
        assert_eq!(by_author[0].title.as_str(), "Rust for Rustaceans");

        // Title matching is a case-insensitive substring
        let by_title = repository
            .list(&BookFilter {
                title: Some("rust".to_string()),
                ..BookFilter::default()
            })
            .await
            .unwrap();
        assert_eq!(by_title.len(), 2);

        let by_rating = repository
            .list(&BookFilter {
                rating: Some(4),
                ..BookFilter::default()
            })
            .await
            .unwrap();
        assert_eq!(by_rating.len(), 1);
        assert_eq!(by_rating[0].title.as_str(), "The Hobbit");

        let combined = repository
            .list(&BookFilter {
                title: Some("rust".to_string()),
                author: Some("Steve Klabnik".to_string()),
                ..BookFilter::default()
            })
            .await
            .unwrap();
        assert_eq!(combined.len(), 1);
        assert_eq!(combined[0].title.as_str(), "The Rust Book");

        // An out-of-range rating is a legal query that matches nothing
        let impossible = repository
            .list(&BookFilter {
                rating: Some(42),
                ..BookFilter::default()
            })
            .await
            .unwrap();
        assert!(impossible.is_empty());
    }

    #[tokio::test]
    async fn test_list_by_owner_scopes_to_one_user() {
        let repository = InMemoryBookRepository::new();
        let alice = UserId::new();
        let bob = UserId::new();

        repository
            .create(book("Alice's Book", None, None, alice))
            .await
            .unwrap();
        repository
            .create(book("Bob's Book", None, None, bob))
            .await
            .unwrap();

        let alices = repository.list_by_owner(&alice).await.unwrap();
        assert_eq!(alices.len(), 1);
        assert_eq!(alices[0].title.as_str(), "Alice's Book");
    }

    #[tokio::test]
    async fn test_update_missing_book() {
        let repository = InMemoryBookRepository::new();

        let result = repository.update(book("Ghost", None, None, UserId::new())).await;
        assert!(matches!(result, Err(BookError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_then_delete_again() {
        let repository = InMemoryBookRepository::new();
        let created = repository
            .create(book("Ephemeral", None, None, UserId::new()))
            .await
            .unwrap();

        assert!(repository.delete(&created.id).await.is_ok());
        assert!(matches!(
            repository.delete(&created.id).await,
            Err(BookError::NotFound)
        ));
    }
}
