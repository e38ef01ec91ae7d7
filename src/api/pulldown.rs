//! Reference data endpoints for UI select boxes

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::author::{Author, AuthorQuery},
};

/// List every registered author
#[utoipa::path(
    get,
    path = "/pulldown/authors",
    tag = "pulldown",
    responses(
        (status = 200, description = "All authors, ordered by id", body = Vec<Author>)
    )
)]
pub async fn list_all_authors(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Author>>> {
    let authors = state
        .services
        .authors
        .find_authors(&AuthorQuery::default())
        .await?;
    Ok(Json(authors))
}
