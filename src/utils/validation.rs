//! Input validation utilities
//!
//! Each validator returns the first rule the value breaks, worded for the user.
//! Lengths are counted in characters after trimming.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{
    self, MAX_CODE_LENGTH, MAX_EMAIL_LENGTH, MAX_FULL_NAME_LENGTH, MAX_PASSWORD_LENGTH,
    MAX_PROBLEM_DESCRIPTION_LENGTH, MAX_PROBLEM_TITLE_LENGTH, MAX_SLUG_LENGTH,
    MAX_USERNAME_LENGTH, MIN_FULL_NAME_LENGTH, MIN_PASSWORD_LENGTH,
    MIN_PROBLEM_DESCRIPTION_LENGTH, MIN_PROBLEM_TITLE_LENGTH, MIN_SLUG_LENGTH,
    MIN_USERNAME_LENGTH,
};

static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").expect("valid slug pattern"));

static USERNAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("valid username pattern"));

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email pattern")
});

static FULL_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z\s\-'àáâãäåèéêëìíîïòóôõöùúûüýÿ]+$").expect("valid full name pattern")
});

fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Validate problem title
pub fn validate_title(title: &str) -> Result<(), &'static str> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Please enter a problem title");
    }
    if char_len(title) < MIN_PROBLEM_TITLE_LENGTH {
        return Err("Title must be at least 3 characters");
    }
    if char_len(title) > MAX_PROBLEM_TITLE_LENGTH {
        return Err("Title must not exceed 200 characters");
    }
    Ok(())
}

/// Validate problem slug (lowercase letters, digits, inner hyphens)
pub fn validate_slug(slug: &str) -> Result<(), &'static str> {
    let slug = slug.trim();
    if slug.is_empty() {
        return Err("Please enter a problem slug");
    }
    if char_len(slug) < MIN_SLUG_LENGTH {
        return Err("Slug must be at least 3 characters");
    }
    if char_len(slug) > MAX_SLUG_LENGTH {
        return Err("Slug must not exceed 100 characters");
    }
    if !SLUG_PATTERN.is_match(slug) {
        return Err("Slug can only contain lowercase letters, numbers, and hyphens");
    }
    if slug.starts_with('-') || slug.ends_with('-') {
        return Err("Slug cannot start or end with a hyphen");
    }
    Ok(())
}

/// Validate problem description
pub fn validate_description(description: &str) -> Result<(), &'static str> {
    let description = description.trim();
    if description.is_empty() {
        return Err("Please enter a problem description");
    }
    if char_len(description) < MIN_PROBLEM_DESCRIPTION_LENGTH {
        return Err("Description must be at least 10 characters");
    }
    if char_len(description) > MAX_PROBLEM_DESCRIPTION_LENGTH {
        return Err("Description is too long (max 50,000 characters)");
    }
    Ok(())
}

/// Validate difficulty selection
pub fn validate_difficulty(difficulty: &str) -> Result<(), &'static str> {
    if difficulty.is_empty() {
        return Err("Please select a difficulty level");
    }
    Ok(())
}

/// Validate username format
pub fn validate_username(username: &str) -> Result<(), &'static str> {
    let username = username.trim();
    if username.is_empty() {
        return Err("Username is required");
    }
    if char_len(username) < MIN_USERNAME_LENGTH {
        return Err("Username must be at least 3 characters");
    }
    if char_len(username) > MAX_USERNAME_LENGTH {
        return Err("Username must not exceed 20 characters");
    }
    if !USERNAME_PATTERN.is_match(username) {
        return Err("Username can only contain letters, numbers, underscore, and hyphen");
    }
    Ok(())
}

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    let email = email.trim().to_lowercase();
    if email.is_empty() {
        return Err("Email is required");
    }
    if char_len(&email) > MAX_EMAIL_LENGTH {
        return Err("Email is too long");
    }
    if !EMAIL_PATTERN.is_match(&email) {
        return Err("Invalid email format");
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.is_empty() {
        return Err("Password is required");
    }
    if char_len(password) < MIN_PASSWORD_LENGTH {
        return Err("Password must be at least 6 characters");
    }
    if char_len(password) > MAX_PASSWORD_LENGTH {
        return Err("Password is too long");
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        return Err("Password must contain at least 1 uppercase letter");
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        return Err("Password must contain at least 1 lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password must contain at least 1 number");
    }
    Ok(())
}

/// Validate full name (optional field)
pub fn validate_full_name(full_name: &str) -> Result<(), &'static str> {
    let full_name = full_name.trim();
    if full_name.is_empty() {
        return Ok(());
    }
    if char_len(full_name) < MIN_FULL_NAME_LENGTH {
        return Err("Full name must be at least 2 characters");
    }
    if char_len(full_name) > MAX_FULL_NAME_LENGTH {
        return Err("Full name must not exceed 100 characters");
    }
    if !FULL_NAME_PATTERN.is_match(full_name) {
        return Err("Full name contains invalid characters");
    }
    Ok(())
}

/// Validate source code before it is sent to the judge
pub fn validate_source_code(code: &str) -> Result<(), &'static str> {
    if code.is_empty() {
        return Err("Code cannot be empty");
    }
    if code.trim().is_empty() {
        return Err("Code cannot contain only whitespace");
    }
    if char_len(code) > MAX_CODE_LENGTH {
        return Err("Code is too long (maximum 50000 characters)");
    }
    if code.contains('\0') {
        return Err("Code contains invalid null bytes");
    }
    Ok(())
}

/// Validate programming language, returning its normalized identifier
pub fn validate_language(language: &str) -> Result<String, String> {
    let normalized = language.trim().to_lowercase();
    if normalized.is_empty() {
        return Err("Language is required".to_string());
    }
    if constants::languages::ALL.contains(&normalized.as_str()) {
        Ok(normalized)
    } else {
        let mut supported = constants::languages::ALL.to_vec();
        supported.sort_unstable();
        Err(format!(
            "Language '{}' is not supported. Supported languages: {}",
            language,
            supported.join(", ")
        ))
    }
}

/// Validate problem id
pub fn validate_problem_id(problem_id: u64) -> Result<(), &'static str> {
    if problem_id == 0 {
        return Err("Problem ID must be a positive number");
    }
    Ok(())
}
