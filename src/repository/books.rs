//! Books repository: catalog writes, search and aggregation.
//!
//! Search queries return one row per book×author pair; `group_rows` folds
//! them into one `Book` per group with its nested author list.

use chrono::NaiveDate;
use sqlx::{FromRow, PgExecutor, Postgres, QueryBuilder};

use crate::{
    error::{AppError, AppResult},
    models::{
        author::Author,
        book::{Book, BookQuery},
        enums::PublishStatus,
    },
};

/// One row of the book×author join
#[derive(Debug, FromRow)]
struct BookAuthorRow {
    book_id: i32,
    title: String,
    price: i32,
    publish_status: String,
    author_id: i32,
    author_name: String,
    birth_date: NaiveDate,
}

const BOOK_AUTHOR_SELECT: &str = "SELECT b.id AS book_id, b.title, b.price, b.publish_status, \
     a.id AS author_id, a.name AS author_name, a.birth_date \
     FROM books b \
     JOIN book_authors ba ON ba.book_id = b.id \
     JOIN authors a ON a.id = ba.author_id";

/// Fold joined rows (ordered by book id) into one book per group.
/// The first row of a group supplies the scalar fields; every row
/// contributes one author entry, preserving row order.
fn group_rows(rows: Vec<BookAuthorRow>) -> Vec<Book> {
    let mut books: Vec<Book> = Vec::new();

    for row in rows {
        let author = Author {
            id: row.author_id,
            name: row.author_name,
            birth_date: row.birth_date,
        };

        match books.last_mut() {
            Some(book) if book.id == row.book_id => book.authors.push(author),
            _ => books.push(Book {
                id: row.book_id,
                title: row.title,
                price: row.price,
                publish_status_name: PublishStatus::label_for_code(&row.publish_status),
                publish_status: row.publish_status,
                authors: vec![author],
            }),
        }
    }

    books
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BooksRepository;

impl BooksRepository {
    pub fn new() -> Self {
        Self
    }

    // =========================================================================
    // SEARCH
    // =========================================================================

    /// Search books with optional filters.
    ///
    /// The author-name filter determines a candidate set of book ids through
    /// the link table; title and id filters apply on top of that set. Groups
    /// are ordered by book id, authors within a group by author id.
    pub async fn find(&self, exec: impl PgExecutor<'_>, query: &BookQuery) -> AppResult<Vec<Book>> {
        let mut sql = QueryBuilder::<Postgres>::new(BOOK_AUTHOR_SELECT);

        sql.push(
            " WHERE b.id IN (SELECT ba2.book_id FROM book_authors ba2 \
             JOIN authors a2 ON a2.id = ba2.author_id",
        );
        if let Some(ref author_name) = query.author_name {
            sql.push(" WHERE a2.name ILIKE ");
            sql.push_bind(format!("%{}%", author_name));
        }
        sql.push(")");

        if let Some(ref title) = query.title {
            sql.push(" AND b.title ILIKE ");
            sql.push_bind(format!("%{}%", title));
        }
        if let Some(book_id) = query.book_id {
            sql.push(" AND b.id = ");
            sql.push_bind(book_id);
        }
        sql.push(" ORDER BY b.id, a.id");

        let rows = sql.build_query_as::<BookAuthorRow>().fetch_all(exec).await?;

        Ok(group_rows(rows))
    }

    /// Get a single book with its authors by id
    pub async fn find_by_id(&self, exec: impl PgExecutor<'_>, book_id: i32) -> AppResult<Book> {
        let sql = format!("{} WHERE b.id = $1 ORDER BY a.id", BOOK_AUTHOR_SELECT);

        let rows = sqlx::query_as::<_, BookAuthorRow>(&sql)
            .bind(book_id)
            .fetch_all(exec)
            .await?;

        group_rows(rows)
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", book_id)))
    }

    /// List every book linked to the given author
    pub async fn find_by_author_id(
        &self,
        exec: impl PgExecutor<'_>,
        author_id: i32,
    ) -> AppResult<Vec<Book>> {
        let sql = format!(
            "{} WHERE b.id IN (SELECT book_id FROM book_authors WHERE author_id = $1) \
             ORDER BY b.id, a.id",
            BOOK_AUTHOR_SELECT
        );

        let rows = sqlx::query_as::<_, BookAuthorRow>(&sql)
            .bind(author_id)
            .fetch_all(exec)
            .await?;

        Ok(group_rows(rows))
    }

    // =========================================================================
    // WRITE
    // =========================================================================

    /// Insert a new book and return the generated id.
    pub async fn insert(
        &self,
        exec: impl PgExecutor<'_>,
        title: &str,
        price: i32,
        publish_status: &str,
    ) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO books (title, price, publish_status) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(title)
        .bind(price)
        .bind(publish_status)
        .fetch_one(exec)
        .await?;

        Ok(id)
    }

    /// Unconditional field overwrite; lifecycle validation happens one layer up.
    pub async fn update(
        &self,
        exec: impl PgExecutor<'_>,
        book_id: i32,
        title: &str,
        price: i32,
        publish_status: &str,
    ) -> AppResult<()> {
        sqlx::query("UPDATE books SET title = $1, price = $2, publish_status = $3 WHERE id = $4")
            .bind(title)
            .bind(price)
            .bind(publish_status)
            .bind(book_id)
            .execute(exec)
            .await?;

        Ok(())
    }

    /// Check if a book exists
    pub async fn exists_by_id(&self, exec: impl PgExecutor<'_>, book_id: i32) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE id = $1)")
            .bind(book_id)
            .fetch_one(exec)
            .await?;

        Ok(exists)
    }

    /// Current status code of a book, or `None` when the book does not exist.
    /// Used only to evaluate the publish lifecycle rule before an update.
    pub async fn find_status_by_id(
        &self,
        exec: impl PgExecutor<'_>,
        book_id: i32,
    ) -> AppResult<Option<String>> {
        let status: Option<String> =
            sqlx::query_scalar("SELECT publish_status FROM books WHERE id = $1")
                .bind(book_id)
                .fetch_optional(exec)
                .await?;

        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(book_id: i32, title: &str, status: &str, author_id: i32, author_name: &str) -> BookAuthorRow {
        BookAuthorRow {
            book_id,
            title: title.to_string(),
            price: 2000,
            publish_status: status.to_string(),
            author_id,
            author_name: author_name.to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 12, 31).unwrap(),
        }
    }

    #[test]
    fn test_group_rows_empty() {
        assert!(group_rows(vec![]).is_empty());
    }

    #[test]
    fn test_group_rows_folds_authors_per_book() {
        let rows = vec![
            row(1, "World Atlas", "0", 1, "Jane Doe"),
            row(1, "World Atlas", "0", 2, "John Smith"),
            row(2, "Sky Atlas", "1", 2, "John Smith"),
        ];

        let books = group_rows(rows);

        assert_eq!(books.len(), 2);
        assert_eq!(books[0].id, 1);
        assert_eq!(books[0].title, "World Atlas");
        assert_eq!(books[0].publish_status, "0");
        assert_eq!(books[0].publish_status_name, "Unpublished");
        assert_eq!(books[0].authors.len(), 2);
        assert_eq!(books[0].authors[0].name, "Jane Doe");
        assert_eq!(books[0].authors[1].name, "John Smith");
        assert_eq!(books[1].id, 2);
        assert_eq!(books[1].publish_status_name, "Published");
        assert_eq!(books[1].authors.len(), 1);
    }

    #[test]
    fn test_group_rows_keeps_unknown_status_code() {
        let books = group_rows(vec![row(1, "World Atlas", "9", 1, "Jane Doe")]);

        assert_eq!(books[0].publish_status, "9");
        assert_eq!(books[0].publish_status_name, "9");
    }
}
