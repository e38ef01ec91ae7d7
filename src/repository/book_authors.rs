//! Book-author junction repository (N:M relationship)
//!
//! Link rows carry no validation of their own: referenced ids are checked by
//! the service layer before any row is written.

use sqlx::PgExecutor;

use crate::error::AppResult;

#[derive(Debug, Clone, Copy, Default)]
pub struct BookAuthorsRepository;

impl BookAuthorsRepository {
    pub fn new() -> Self {
        Self
    }

    /// Insert one link row. Duplicate pairs are rejected by the composite
    /// primary key.
    pub async fn insert(
        &self,
        exec: impl PgExecutor<'_>,
        book_id: i32,
        author_id: i32,
    ) -> AppResult<()> {
        sqlx::query("INSERT INTO book_authors (book_id, author_id) VALUES ($1, $2)")
            .bind(book_id)
            .bind(author_id)
            .execute(exec)
            .await?;

        Ok(())
    }

    /// Delete every link for a book. No-op when none exist.
    pub async fn delete_for_book(&self, exec: impl PgExecutor<'_>, book_id: i32) -> AppResult<()> {
        sqlx::query("DELETE FROM book_authors WHERE book_id = $1")
            .bind(book_id)
            .execute(exec)
            .await?;

        Ok(())
    }
}
