//! Schema bootstrap
//!
//! Runs an SQL script statement by statement against a fresh server
//! connection. The script is split on every `;`, so statements must not
//! contain semicolons inside string literals or routine bodies.

use std::path::Path;

use async_trait::async_trait;
use sqlx::{mysql::MySqlConnection, Connection};

use crate::{
    config::DatabaseConfig,
    constants::STATEMENT_LOG_PREVIEW,
    error::{AppError, AppResult},
};

use super::connection;

/// Something that can run one SQL statement
#[async_trait]
pub trait StatementExecutor: Send {
    async fn execute(&mut self, statement: &str) -> AppResult<()>;
}

#[async_trait]
impl StatementExecutor for MySqlConnection {
    async fn execute(&mut self, statement: &str) -> AppResult<()> {
        sqlx::Executor::execute(&mut *self, sqlx::raw_sql(statement)).await?;
        Ok(())
    }
}

/// Non-empty statements of `script`, trimmed, in order
pub fn split_statements(script: &str) -> Vec<&str> {
    script
        .split(';')
        .map(str::trim)
        .filter(|stmt| !stmt.is_empty())
        .collect()
}

/// First characters of a statement for the progress log
pub fn statement_preview(statement: &str) -> String {
    let head: String = statement.chars().take(STATEMENT_LOG_PREVIEW).collect();
    format!("{}...", head)
}

/// Read the bootstrap script
pub async fn read_script(path: &Path) -> AppResult<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| AppError::File(format!("{}: {}", path.display(), e)))
}

/// Execute every statement in order, stopping at the first failure
///
/// Returns the number of statements executed.
pub async fn run_script<E>(executor: &mut E, script: &str) -> AppResult<usize>
where
    E: StatementExecutor + ?Sized,
{
    let statements = split_statements(script);
    for (index, statement) in statements.iter().enumerate() {
        tracing::info!(statement = %statement_preview(statement), "Executing");
        executor.execute(statement).await.map_err(|e| {
            tracing::error!(index, error = %e, "Statement failed");
            e
        })?;
    }
    Ok(statements.len())
}

/// Create the database and tables from the configured script
pub async fn setup_database(config: &DatabaseConfig) -> AppResult<usize> {
    let script = read_script(&config.script_path).await?;

    tracing::info!(host = %config.host, port = config.port, "Creating database and tables...");
    let mut conn = connection::connect(config).await?;

    let result = run_script(&mut conn, &script).await;
    if let Err(e) = conn.close().await {
        tracing::warn!(error = %e, "Failed to close database connection");
    }

    let executed = result?;
    tracing::info!(statements = executed, "Database setup completed successfully");
    Ok(executed)
}
