//! Authors repository for database operations

use chrono::NaiveDate;
use sqlx::{PgExecutor, Postgres, QueryBuilder};

use crate::{
    error::{AppError, AppResult},
    models::author::{Author, AuthorQuery},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorsRepository;

impl AuthorsRepository {
    pub fn new() -> Self {
        Self
    }

    /// Insert a new author and return the generated id.
    pub async fn insert(
        &self,
        exec: impl PgExecutor<'_>,
        name: &str,
        birth_date: NaiveDate,
    ) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO authors (name, birth_date) VALUES ($1, $2) RETURNING id",
        )
        .bind(name)
        .bind(birth_date)
        .fetch_one(exec)
        .await?;

        Ok(id)
    }

    /// Overwrite name and birth date for an author.
    /// Zero rows affected is not an error; existence is the caller's concern.
    pub async fn update(
        &self,
        exec: impl PgExecutor<'_>,
        author_id: i32,
        name: &str,
        birth_date: NaiveDate,
    ) -> AppResult<()> {
        sqlx::query("UPDATE authors SET name = $1, birth_date = $2 WHERE id = $3")
            .bind(name)
            .bind(birth_date)
            .bind(author_id)
            .execute(exec)
            .await?;

        Ok(())
    }

    /// Check if an author exists
    pub async fn exists_by_id(&self, exec: impl PgExecutor<'_>, author_id: i32) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM authors WHERE id = $1)")
            .bind(author_id)
            .fetch_one(exec)
            .await?;

        Ok(exists)
    }

    /// Search authors with optional filters, ordered by id.
    /// Conditions are appended only for filters that are present.
    pub async fn find(
        &self,
        exec: impl PgExecutor<'_>,
        query: &AuthorQuery,
    ) -> AppResult<Vec<Author>> {
        let mut sql =
            QueryBuilder::<Postgres>::new("SELECT id, name, birth_date FROM authors WHERE 1=1");

        if let Some(ref name) = query.name {
            sql.push(" AND name ILIKE ");
            sql.push_bind(format!("%{}%", name));
        }
        if let Some(author_id) = query.author_id {
            sql.push(" AND id = ");
            sql.push_bind(author_id);
        }
        if let Some(birth_date) = query.birth_date {
            sql.push(" AND birth_date = ");
            sql.push_bind(birth_date);
        }
        sql.push(" ORDER BY id");

        let authors = sql.build_query_as::<Author>().fetch_all(exec).await?;

        Ok(authors)
    }

    /// Get a single author by id
    pub async fn find_by_id(&self, exec: impl PgExecutor<'_>, author_id: i32) -> AppResult<Author> {
        sqlx::query_as::<_, Author>("SELECT id, name, birth_date FROM authors WHERE id = $1")
            .bind(author_id)
            .fetch_optional(exec)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Author with id {} not found", author_id)))
    }
}
