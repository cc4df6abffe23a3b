//! Database module
//!
//! This module handles the MySQL connection and the schema bootstrap.

pub mod connection;
pub mod setup;

pub use connection::*;
pub use setup::{run_script, setup_database, split_statements, StatementExecutor};
