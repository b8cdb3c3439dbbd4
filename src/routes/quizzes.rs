use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::db;
use crate::error::{AppError, Result};
use crate::models::Question;
use crate::quiz::select_next_question;
use crate::routes::validation::json_body;
use crate::AppState;

/// Category selector sent by quiz clients
///
/// Either a bare id or a category object; only the id is used.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum QuizCategory {
    Id(i64),
    Object { id: i64 },
}

impl QuizCategory {
    pub fn id(&self) -> i64 {
        match self {
            QuizCategory::Id(id) | QuizCategory::Object { id } => *id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub quiz_category: Option<QuizCategory>,
    pub previous_questions: Option<Vec<i64>>,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
    /// True once every question of the category has been played
    pub empty: bool,
}

/// Pick a random question of the category that has not been played yet
///
/// POST /quizzes
pub async fn next_quiz_question(
    State(state): State<AppState>,
    payload: std::result::Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>> {
    let request = json_body(payload)?;
    let category_id = request
        .quiz_category
        .ok_or_else(|| AppError::BadRequest("missing required field `quiz_category`".to_string()))?
        .id();
    let previous = request.previous_questions.ok_or_else(|| {
        AppError::BadRequest("missing required field `previous_questions`".to_string())
    })?;

    if db::categories::find(&state.pool, category_id).await?.is_none() {
        tracing::warn!("Quiz requested for unknown category {}", category_id);
        return Err(AppError::NotFound);
    }

    let category_questions = db::questions::list_by_category(&state.pool, category_id).await?;
    let question = select_next_question(category_questions, &previous, &mut rand::rng());

    match &question {
        Some(q) => tracing::debug!("Quiz in category {} picked question {}", category_id, q.id),
        None => tracing::debug!("Quiz in category {} exhausted", category_id),
    }

    Ok(Json(QuizResponse {
        success: true,
        empty: question.is_none(),
        question,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_quiz_category_accepts_id_or_object() {
        let bare: QuizCategory = serde_json::from_value(json!(2)).unwrap();
        assert_eq!(bare.id(), 2);

        let object: QuizCategory =
            serde_json::from_value(json!({ "id": 5, "type": "Entertainment" })).unwrap();
        assert_eq!(object.id(), 5);

        assert!(serde_json::from_value::<QuizCategory>(json!("Art")).is_err());
    }
}
