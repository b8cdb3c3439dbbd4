//! Question queries. Every listing is ordered by id so pages are stable.

use sqlx::SqlitePool;

use crate::models::{NewQuestion, Question};

const COLUMNS: &str = "id, question, answer, category, difficulty";

pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(&format!("SELECT {COLUMNS} FROM questions ORDER BY id"))
        .fetch_all(pool)
        .await
}

pub async fn list_by_category(
    pool: &SqlitePool,
    category_id: i64,
) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(&format!(
        "SELECT {COLUMNS} FROM questions WHERE category = ? ORDER BY id"
    ))
    .bind(category_id)
    .fetch_all(pool)
    .await
}

/// Case-insensitive substring match on the question text only
///
/// Folding happens in Rust because SQLite's `lower()` only folds ASCII. The
/// term is matched literally, so `%` and `_` are not wildcards.
pub async fn search(pool: &SqlitePool, term: &str) -> Result<Vec<Question>, sqlx::Error> {
    let needle = term.to_lowercase();

    Ok(list_all(pool)
        .await?
        .into_iter()
        .filter(|q| q.question.to_lowercase().contains(&needle))
        .collect())
}

pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(&format!("SELECT {COLUMNS} FROM questions WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Insert a question and return its store-assigned id
pub async fn insert(pool: &SqlitePool, new_question: &NewQuestion) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO questions (question, answer, category, difficulty) VALUES (?, ?, ?, ?)",
    )
    .bind(&new_question.question)
    .bind(&new_question.answer)
    .bind(new_question.category)
    .bind(new_question.difficulty)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Delete a question, returning whether a row was removed
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM questions WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
