//! Domain models
//!
//! This module contains the data shapes exchanged between the pages and the backend.

pub mod api;
pub mod auth;
pub mod judge;
pub mod problem;
pub mod test_case;

pub use api::*;
pub use auth::*;
pub use judge::*;
pub use problem::*;
pub use test_case::*;
