use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use std::{path::Path, str::FromStr, time::Duration};

/// Create a SQLite connection pool, creating the database file if needed
pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Creating database connection pool...");

    if let Some(path) = database_file(database_url) {
        ensure_parent_dir(path)?;
    }

    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await?;

    tracing::info!("Database connection pool created successfully");

    Ok(pool)
}

/// File path named by a `sqlite:` URL, `None` for in-memory databases
fn database_file(database_url: &str) -> Option<&Path> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();

    if path.is_empty() || path == ":memory:" {
        None
    } else {
        Some(Path::new(path))
    }
}

fn ensure_parent_dir(path: &Path) -> Result<(), sqlx::Error> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            std::fs::create_dir_all(parent).map_err(|e| {
                tracing::error!("Failed to create database directory: {}", e);
                sqlx::Error::Io(e)
            })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_file() {
        assert_eq!(
            database_file("sqlite://./data/trivia.db"),
            Some(Path::new("./data/trivia.db"))
        );
        assert_eq!(
            database_file("sqlite:trivia.db?mode=rwc"),
            Some(Path::new("trivia.db"))
        );
        assert_eq!(database_file("sqlite::memory:"), None);
        assert_eq!(database_file("postgres://localhost/trivia"), None);
    }
}
