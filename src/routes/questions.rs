use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CATEGORY_ID;
use crate::db;
use crate::error::{AppError, Result};
use crate::models::{Category, CreateQuestionRequest, Question};
use crate::pagination::paginate;
use crate::routes::validation::{json_body, path_id, PageQuery};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct QuestionPageResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: Vec<Category>,
    pub current_category: Option<Category>,
}

#[derive(Debug, Serialize)]
pub struct CreateQuestionResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    pub deleted_question: i64,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub search_term: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
}

/// List all questions, ten per page
///
/// `current_category` is always category 1 (or `null` if it does not exist),
/// independent of the page contents.
///
/// GET /questions?page=N
pub async fn list_questions(
    State(state): State<AppState>,
    query: Option<Query<PageQuery>>,
) -> Result<Json<QuestionPageResponse>> {
    let page = query.map(|Query(q)| q.page()).unwrap_or(1);

    let questions = db::questions::list_all(&state.pool).await?;
    let categories = db::categories::list_all(&state.pool).await?;
    let current_category = categories
        .iter()
        .find(|c| c.id == DEFAULT_CATEGORY_ID)
        .cloned();

    let page_questions = paginate(&questions, page)?.to_vec();

    Ok(Json(QuestionPageResponse {
        success: true,
        questions: page_questions,
        total_questions: questions.len(),
        categories,
        current_category,
    }))
}

/// Create a new question
///
/// All four fields are required; a missing field is a bad request and nothing
/// is written. A store failure during insert is a server error.
///
/// POST /questions
pub async fn create_question(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> Result<Json<CreateQuestionResponse>> {
    let new_question = json_body(payload)?.validate()?;

    let id = db::questions::insert(&state.pool, &new_question).await?;
    tracing::info!(
        "Created question {} in category {}",
        id,
        new_question.category
    );

    Ok(Json(CreateQuestionResponse { success: true }))
}

/// Permanently delete a question
///
/// DELETE /questions/{id}
pub async fn delete_question(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<DeleteQuestionResponse>> {
    let id = path_id(id)?;

    if db::questions::find(&state.pool, id).await?.is_none() {
        tracing::warn!("Delete attempt for non-existent question {}", id);
        return Err(AppError::NotFound);
    }

    // A concurrent delete may win between the lookup and this statement
    if !db::questions::delete(&state.pool, id).await? {
        tracing::warn!("Question {} was removed before it could be deleted", id);
        return Err(AppError::NotFound);
    }

    tracing::info!("Deleted question {}", id);

    Ok(Json(DeleteQuestionResponse {
        success: true,
        deleted_question: id,
    }))
}

/// Case-insensitive substring search over question text, unpaginated
///
/// POST /questions/search
pub async fn search_questions(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>> {
    let search_term = json_body(payload)?
        .search_term
        .ok_or_else(|| AppError::BadRequest("missing required field `search_term`".to_string()))?;

    let questions = db::questions::search(&state.pool, &search_term).await?;
    tracing::debug!(
        "Search for {:?} matched {} questions",
        search_term,
        questions.len()
    );

    Ok(Json(SearchResponse {
        success: true,
        questions,
    }))
}
