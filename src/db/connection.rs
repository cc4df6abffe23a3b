//! Database connection management

use sqlx::{
    mysql::{MySqlConnectOptions, MySqlConnection},
    Connection,
};

use crate::config::DatabaseConfig;

/// Server-level connect options; no database is selected
pub fn connect_options(config: &DatabaseConfig) -> MySqlConnectOptions {
    MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
}

/// Open a single connection to the MySQL server
pub async fn connect(config: &DatabaseConfig) -> Result<MySqlConnection, sqlx::Error> {
    MySqlConnection::connect_with(&connect_options(config)).await
}
