use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Trivia question as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    /// Store-assigned identifier
    pub id: i64,
    pub question: String,
    pub answer: String,
    /// Id of the owning category (not checked against the categories table)
    pub category: i64,
    pub difficulty: i64,
}

/// Validated question ready to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// Body of `POST /questions`
///
/// Every field is optional at the serde level so that a missing field is
/// reported as a bad request by [`CreateQuestionRequest::validate`] rather
/// than as an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
}

impl CreateQuestionRequest {
    /// Check that all required fields are present
    pub fn validate(self) -> Result<NewQuestion> {
        Ok(NewQuestion {
            question: required(self.question, "question")?,
            answer: required(self.answer, "answer")?,
            category: required(self.category, "category")?,
            difficulty: required(self.difficulty, "difficulty")?,
        })
    }
}

fn required<T>(value: Option<T>, field: &str) -> Result<T> {
    value.ok_or_else(|| AppError::BadRequest(format!("missing required field `{}`", field)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_request() -> CreateQuestionRequest {
        CreateQuestionRequest {
            question: Some("How old is the Egyptian civilization?".to_string()),
            answer: Some("Seven thousand years".to_string()),
            category: Some(4),
            difficulty: Some(3),
        }
    }

    #[test]
    fn test_validate_complete_request() {
        let new_question = full_request().validate().unwrap();
        assert_eq!(new_question.question, "How old is the Egyptian civilization?");
        assert_eq!(new_question.answer, "Seven thousand years");
        assert_eq!(new_question.category, 4);
        assert_eq!(new_question.difficulty, 3);
    }

    #[test]
    fn test_validate_rejects_each_missing_field() {
        let cases = [
            CreateQuestionRequest { question: None, ..full_request() },
            CreateQuestionRequest { answer: None, ..full_request() },
            CreateQuestionRequest { category: None, ..full_request() },
            CreateQuestionRequest { difficulty: None, ..full_request() },
        ];

        for request in cases {
            assert!(matches!(request.validate(), Err(AppError::BadRequest(_))));
        }
    }

    #[test]
    fn test_misspelled_fields_are_missing() {
        let request: CreateQuestionRequest = serde_json::from_value(json!({
            "Auestion": "how old is Egyptian civilization?",
            "Answer": "seven thousand year",
            "Category": 4,
            "diffiiiiiculty": 3
        }))
        .unwrap();

        assert!(matches!(request.validate(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_null_counts_as_missing() {
        let request: CreateQuestionRequest = serde_json::from_value(json!({
            "question": "q",
            "answer": null,
            "category": 1,
            "difficulty": 1
        }))
        .unwrap();

        assert!(request.validate().is_err());
    }
}
