//! Book management service

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, BookPayload, BookQuery},
        enums::PublishStatus,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct BookService {
    repository: Repository,
}

impl BookService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Register a new book together with its author links.
    ///
    /// Every requested author id must already exist; ids are checked one by
    /// one and the first missing one fails the whole use case.
    pub async fn create_book(&self, payload: &BookPayload) -> AppResult<Book> {
        let mut tx = self.repository.pool.begin().await?;

        for &author_id in &payload.author_ids {
            if !self
                .repository
                .authors
                .exists_by_id(&mut *tx, author_id)
                .await?
            {
                return Err(AppError::Validation(format!(
                    "author {} does not exist",
                    author_id
                )));
            }
        }

        let book_id = self
            .repository
            .books
            .insert(&mut *tx, &payload.title, payload.price, &payload.publish_status)
            .await?;

        for &author_id in &payload.author_ids {
            self.repository
                .book_authors
                .insert(&mut *tx, book_id, author_id)
                .await?;
        }

        tx.commit().await?;

        self.repository
            .books
            .find_by_id(&self.repository.pool, book_id)
            .await
    }

    /// Update a book and replace its author links.
    ///
    /// Checks run in order: book existence, publish lifecycle, author
    /// existence. The old link set is deleted and rebuilt from the request
    /// inside the same transaction as the field update.
    pub async fn update_book(&self, book_id: i32, payload: &BookPayload) -> AppResult<Book> {
        let mut tx = self.repository.pool.begin().await?;

        if !self
            .repository
            .books
            .exists_by_id(&mut *tx, book_id)
            .await?
        {
            return Err(AppError::Validation(format!(
                "book {} does not exist",
                book_id
            )));
        }

        let current = self
            .repository
            .books
            .find_status_by_id(&mut *tx, book_id)
            .await?;
        if is_forbidden_transition(current.as_deref(), &payload.publish_status) {
            return Err(AppError::Validation(
                "a published book cannot be changed back to unpublished".to_string(),
            ));
        }

        for &author_id in &payload.author_ids {
            if !self
                .repository
                .authors
                .exists_by_id(&mut *tx, author_id)
                .await?
            {
                return Err(AppError::Validation(format!(
                    "author {} does not exist",
                    author_id
                )));
            }
        }

        self.repository
            .books
            .update(&mut *tx, book_id, &payload.title, payload.price, &payload.publish_status)
            .await?;
        self.repository
            .book_authors
            .delete_for_book(&mut *tx, book_id)
            .await?;
        for &author_id in &payload.author_ids {
            self.repository
                .book_authors
                .insert(&mut *tx, book_id, author_id)
                .await?;
        }

        tx.commit().await?;

        self.repository
            .books
            .find_by_id(&self.repository.pool, book_id)
            .await
    }

    /// Search books with filters
    pub async fn find_books(&self, query: &BookQuery) -> AppResult<Vec<Book>> {
        self.repository
            .books
            .find(&self.repository.pool, query)
            .await
    }

    /// Get a single book with its authors by id
    pub async fn find_book_by_id(&self, book_id: i32) -> AppResult<Book> {
        self.repository
            .books
            .find_by_id(&self.repository.pool, book_id)
            .await
    }

    /// List every book linked to the given author
    pub async fn find_books_by_author_id(&self, author_id: i32) -> AppResult<Vec<Book>> {
        self.repository
            .books
            .find_by_author_id(&self.repository.pool, author_id)
            .await
    }
}

/// Once published, a book can never go back to unpublished.
/// Every other transition, including self-transitions, is allowed.
fn is_forbidden_transition(current: Option<&str>, requested: &str) -> bool {
    requested == PublishStatus::UnPublished.code()
        && current == Some(PublishStatus::Published.code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_published_cannot_revert() {
        assert!(is_forbidden_transition(Some("1"), "0"));
    }

    #[test]
    fn test_allowed_transitions() {
        // unpublished -> published
        assert!(!is_forbidden_transition(Some("0"), "1"));
        // self-transitions
        assert!(!is_forbidden_transition(Some("0"), "0"));
        assert!(!is_forbidden_transition(Some("1"), "1"));
        // no stored status
        assert!(!is_forbidden_transition(None, "0"));
    }
}
