//! Trivia API Library
//!
//! This module exports the core types and functions for testing and reuse.

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod pagination;
pub mod quiz;
pub mod routes;

pub use config::Config;
pub use db::{create_pool, run_migrations};
pub use error::{AppError, Result};

use sqlx::SqlitePool;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState with the given pool and configuration
    pub fn new(pool: SqlitePool, config: Config) -> Self {
        Self { pool, config }
    }
}
