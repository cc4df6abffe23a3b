//! Login and signup form models

use serde::{Deserialize, Serialize};

/// Login form, posted as JSON to `/api/login`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Signup form, posted as JSON to `/api/signup`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub full_name: String,
}
