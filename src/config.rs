use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
    /// Allowed CORS origins; a single `*` entry allows any origin
    pub allowed_origins: Vec<String>,
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists (development)
        dotenvy::dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .map_err(|_| "Invalid SERVER_PORT")?;

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://./data/trivia.db".to_string());

        let database_max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .map_err(|_| "Invalid DATABASE_MAX_CONNECTIONS")?;

        let allowed_origins = parse_origins(
            &env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string()),
        );

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            server_host,
            server_port,
            database_url,
            database_max_connections,
            allowed_origins,
            environment,
        })
    }

    /// Get server address as string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Whether CORS should accept requests from any origin
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_origins(origins: &[&str]) -> Config {
        Config {
            server_host: "127.0.0.1".to_string(),
            server_port: 5000,
            database_url: "sqlite::memory:".to_string(),
            database_max_connections: 1,
            allowed_origins: origins.iter().map(|s| s.to_string()).collect(),
            environment: "test".to_string(),
        }
    }

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins("http://localhost:3000, http://example.com ,"),
            vec!["http://localhost:3000", "http://example.com"]
        );
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn test_allows_any_origin() {
        assert!(config_with_origins(&["*"]).allows_any_origin());
        assert!(config_with_origins(&[]).allows_any_origin());
        assert!(!config_with_origins(&["http://localhost:3000"]).allows_any_origin());
    }

    #[test]
    fn test_server_address() {
        assert_eq!(config_with_origins(&[]).server_address(), "127.0.0.1:5000");
    }
}
