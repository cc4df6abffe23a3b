//! LiteCode - Problem authoring and judging client
//!
//! This library drives the LiteCode judge from the author's and solver's
//! side: building problems with their test cases, importing test cases from
//! JSON, running and submitting code, and bootstrapping the database.
//!
//! # Architecture
//!
//! The crate follows a layered architecture:
//! - **Pages**: per-page state and user flows (thin layer)
//! - **Editor**: test-case collection, JSON import and rendering
//! - **Services**: validation and backend calls
//! - **Client**: HTTP access behind the `Backend` trait
//! - **Models**: domain models and DTOs

pub mod client;
pub mod config;
pub mod constants;
pub mod db;
pub mod editor;
pub mod error;
pub mod feedback;
pub mod models;
pub mod pages;
pub mod services;
pub mod telemetry;
pub mod utils;

// Re-export commonly used types
pub use client::{ApiClient, Backend};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use feedback::{Feedback, Presenter};
