//! Author management service

use chrono::{NaiveDate, Utc};

use crate::{
    error::{AppError, AppResult},
    models::author::{Author, AuthorPayload, AuthorQuery},
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthorService {
    repository: Repository,
}

impl AuthorService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Register a new author. The birth date must be strictly in the past.
    pub async fn create_author(&self, payload: &AuthorPayload) -> AppResult<Author> {
        if !is_before_today(payload.birth_date) {
            return Err(AppError::Validation(
                "birth date must be earlier than today".to_string(),
            ));
        }

        let mut tx = self.repository.pool.begin().await?;
        let id = self
            .repository
            .authors
            .insert(&mut *tx, &payload.name, payload.birth_date)
            .await?;
        tx.commit().await?;

        self.repository
            .authors
            .find_by_id(&self.repository.pool, id)
            .await
    }

    /// Update an existing author. Existence is checked before the date rule.
    pub async fn update_author(&self, author_id: i32, payload: &AuthorPayload) -> AppResult<Author> {
        let mut tx = self.repository.pool.begin().await?;

        if !self
            .repository
            .authors
            .exists_by_id(&mut *tx, author_id)
            .await?
        {
            return Err(AppError::Validation(format!(
                "author {} is not registered",
                author_id
            )));
        }
        if !is_before_today(payload.birth_date) {
            return Err(AppError::Validation(
                "birth date must be earlier than today".to_string(),
            ));
        }

        self.repository
            .authors
            .update(&mut *tx, author_id, &payload.name, payload.birth_date)
            .await?;
        tx.commit().await?;

        self.repository
            .authors
            .find_by_id(&self.repository.pool, author_id)
            .await
    }

    /// Search authors with filters
    pub async fn find_authors(&self, query: &AuthorQuery) -> AppResult<Vec<Author>> {
        self.repository
            .authors
            .find(&self.repository.pool, query)
            .await
    }

    /// Get a single author by id
    pub async fn find_author_by_id(&self, author_id: i32) -> AppResult<Author> {
        self.repository
            .authors
            .find_by_id(&self.repository.pool, author_id)
            .await
    }
}

/// True when the date is strictly before today.
fn is_before_today(date: NaiveDate) -> bool {
    date < Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_is_before_today() {
        let today = Utc::now().date_naive();

        assert!(is_before_today(today - Duration::days(1)));
        assert!(!is_before_today(today));
        assert!(!is_before_today(today + Duration::days(1)));
    }
}
