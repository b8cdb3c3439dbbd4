pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;
pub mod validation;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::error::AppError;
use crate::AppState;

pub use categories::{category_questions, list_categories};
pub use health::health_check;
pub use questions::{create_question, delete_question, list_questions, search_questions};
pub use quizzes::next_quiz_question;

/// Build the application router
///
/// Unknown paths answer with the 404 envelope and known paths called with an
/// unsupported method answer with the 405 envelope.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check).fallback(method_not_allowed))
        .route(
            "/categories",
            get(list_categories).fallback(method_not_allowed),
        )
        .route(
            "/categories/:id/questions",
            get(category_questions).fallback(method_not_allowed),
        )
        .route(
            "/questions",
            get(list_questions)
                .post(create_question)
                .fallback(method_not_allowed),
        )
        .route(
            "/questions/search",
            post(search_questions).fallback(method_not_allowed),
        )
        .route(
            "/questions/:id",
            delete(delete_question).fallback(method_not_allowed),
        )
        .route(
            "/quizzes",
            post(next_quiz_question).fallback(method_not_allowed),
        )
        .fallback(not_found)
        .with_state(state)
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

async fn not_found() -> AppError {
    AppError::NotFound
}
