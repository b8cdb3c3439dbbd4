use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    Json,
};
use serde::Serialize;

use crate::db;
use crate::error::{AppError, Result};
use crate::models::Category;
use crate::pagination::paginate;
use crate::routes::questions::QuestionPageResponse;
use crate::routes::validation::{path_id, PageQuery};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: Vec<Category>,
}

/// GET /categories
pub async fn list_categories(State(state): State<AppState>) -> Result<Json<CategoriesResponse>> {
    let categories = db::categories::list_all(&state.pool).await?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

/// Questions of one category, ten per page
///
/// `total_questions` counts the category's questions, not the whole store.
///
/// GET /categories/{id}/questions?page=N
pub async fn category_questions(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
    query: Option<Query<PageQuery>>,
) -> Result<Json<QuestionPageResponse>> {
    let category_id = path_id(id)?;
    let page = query.map(|Query(q)| q.page()).unwrap_or(1);

    let current_category = db::categories::find(&state.pool, category_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Questions requested for unknown category {}", category_id);
            AppError::NotFound
        })?;

    let categories = db::categories::list_all(&state.pool).await?;
    let questions = db::questions::list_by_category(&state.pool, category_id).await?;
    let page_questions = paginate(&questions, page)?.to_vec();

    Ok(Json(QuestionPageResponse {
        success: true,
        questions: page_questions,
        total_questions: questions.len(),
        categories,
        current_category: Some(current_category),
    }))
}
