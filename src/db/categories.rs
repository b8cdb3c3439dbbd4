use sqlx::SqlitePool;

use crate::models::Category;

pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}
