//! Repository layer for database operations
//!
//! Repository methods take their executor explicitly, so the same code runs
//! against the pool for plain reads and against an open transaction inside
//! a service use case.

pub mod authors;
pub mod book_authors;
pub mod books;

use sqlx::{Pool, Postgres};

/// Main repository struct holding the database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub authors: authors::AuthorsRepository,
    pub books: books::BooksRepository,
    pub book_authors: book_authors::BookAuthorsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            authors: authors::AuthorsRepository::new(),
            books: books::BooksRepository::new(),
            book_authors: book_authors::BookAuthorsRepository::new(),
            pool,
        }
    }
}
