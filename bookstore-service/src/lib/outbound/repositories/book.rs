use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::book::errors::BookError;
use crate::book::ports::BookRepository;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookFilter;
use crate::domain::book::models::BookId;
use crate::domain::book::models::BookTitle;
use crate::domain::book::models::Rating;
use crate::domain::user::models::UserId;

pub struct PostgresBookRepository {
    pool: PgPool,
}

impl PostgresBookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_book(row: &PgRow) -> Result<Book, BookError> {
        let title = BookTitle::new(row.get("title"))
            .map_err(|e| BookError::DatabaseError(format!("Stored title is invalid: {}", e)))?;
        let rating = row
            .get::<Option<i32>, _>("rating")
            .map(Rating::new)
            .transpose()
            .map_err(|e| BookError::DatabaseError(format!("Stored rating is invalid: {}", e)))?;

        Ok(Book {
            id: BookId(row.get("id")),
            title,
            description: row.get("description"),
            author: row.get("author"),
            category: row.get("category"),
            rating,
            owner_id: UserId(row.get("owner_id")),
            created_at: row.get("created_at"),
        })
    }
}

#[async_trait]
impl BookRepository for PostgresBookRepository {
    async fn create(&self, book: Book) -> Result<Book, BookError> {
        sqlx::query(
            r#"
            INSERT INTO books (id, title, description, author, category, rating, owner_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(book.id.0)
        .bind(book.title.as_str())
        .bind(&book.description)
        .bind(&book.author)
        .bind(&book.category)
        .bind(book.rating.map(|r| r.as_i32()))
        .bind(book.owner_id.0)
        .bind(book.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        Ok(book)
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError> {
        let row = sqlx::query(
            r#"
            SELECT id, title, description, author, category, rating, owner_id, created_at
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        row.map(|r| Self::row_to_book(&r)).transpose()
    }

    async fn list(&self, filter: &BookFilter) -> Result<Vec<Book>, BookError> {
        // One static statement; absent criteria collapse into IS NULL arms
        let rows = sqlx::query(
            r#"
            SELECT id, title, description, author, category, rating, owner_id, created_at
            FROM books
            WHERE ($1::text IS NULL OR author = $1)
              AND ($2::text IS NULL OR category = $2)
              AND ($3::int4 IS NULL OR rating = $3)
              AND ($4::text IS NULL OR title ILIKE '%' || $4 || '%')
            ORDER BY created_at DESC
            "#,
        )
        .bind(filter.author.as_deref())
        .bind(filter.category.as_deref())
        .bind(filter.rating)
        .bind(filter.title.as_deref())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_book).collect()
    }

    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Book>, BookError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, description, author, category, rating, owner_id, created_at
            FROM books
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_book).collect()
    }

    async fn update(&self, book: Book) -> Result<Book, BookError> {
        let result = sqlx::query(
            r#"
            UPDATE books
            SET title = $2,
                description = $3,
                author = $4,
                category = $5,
                rating = $6,
                updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(book.id.0)
        .bind(book.title.as_str())
        .bind(&book.description)
        .bind(&book.author)
        .bind(&book.category)
        .bind(book.rating.map(|r| r.as_i32()))
        .execute(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(BookError::NotFound);
        }

        Ok(book)
    }

    async fn delete(&self, id: &BookId) -> Result<(), BookError> {
        let result = sqlx::query(
            r#"
            DELETE FROM books
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(BookError::NotFound);
        }

        Ok(())
    }
}
