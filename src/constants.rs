//! Application-wide constants
//!
//! This module contains all constant values used throughout the client.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// CLIENT DEFAULTS
// =============================================================================

/// Default base URL of the LiteCode web backend
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Header sent with form submissions so the backend answers with JSON
pub const REQUESTED_WITH_HEADER: &str = "X-Requested-With";

/// Value of the `X-Requested-With` header
pub const REQUESTED_WITH_VALUE: &str = "XMLHttpRequest";

// =============================================================================
// DATABASE BOOTSTRAP DEFAULTS
// =============================================================================

/// Default MySQL host
pub const DEFAULT_MYSQL_HOST: &str = "localhost";

/// Default MySQL port
pub const DEFAULT_MYSQL_PORT: u16 = 3306;

/// Default MySQL user
pub const DEFAULT_MYSQL_USER: &str = "root";

/// Default bootstrap script location
pub const DEFAULT_SETUP_SCRIPT: &str = "database/init.sql";

/// Number of characters of each statement echoed to the log
pub const STATEMENT_LOG_PREVIEW: usize = 50;

// =============================================================================
// ENDPOINTS
// =============================================================================

/// Backend routes consumed by the pages
pub mod routes {
    pub const PROBLEMS: &str = "/problems";
    pub const CREATE_PROBLEM: &str = "/problems/create";
    pub const EDIT_PROBLEM_PREFIX: &str = "/problems/edit";
    pub const DELETE_PROBLEM_PREFIX: &str = "/problems/delete";
    pub const SUBMISSION_PREFIX: &str = "/submission";
    pub const LOGIN: &str = "/api/login";
    pub const SIGNUP: &str = "/api/signup";
    pub const RUN: &str = "/api/run";
    pub const SUBMIT: &str = "/api/submit";
    pub const HOME: &str = "/";
    pub const LOGIN_PAGE: &str = "/login";
}

/// Name of the hidden form field carrying the serialized test cases
pub const TEST_CASES_FIELD: &str = "test_cases_json";

// =============================================================================
// FEEDBACK TIMINGS
// =============================================================================

/// Success toast lifetime before navigating away (milliseconds)
pub const SUCCESS_TOAST_MS: u64 = 1500;

/// Import / validate success banner lifetime (milliseconds)
pub const IMPORT_BANNER_MS: u64 = 3000;

/// Format success banner lifetime (milliseconds)
pub const FORMAT_BANNER_MS: u64 = 2000;

// =============================================================================
// PROBLEM FORM VALIDATION
// =============================================================================

/// Minimum problem title length (trimmed, in characters)
pub const MIN_PROBLEM_TITLE_LENGTH: usize = 3;

/// Maximum problem title length
pub const MAX_PROBLEM_TITLE_LENGTH: usize = 200;

/// Minimum slug length
pub const MIN_SLUG_LENGTH: usize = 3;

/// Maximum slug length
pub const MAX_SLUG_LENGTH: usize = 100;

/// Minimum problem description length
pub const MIN_PROBLEM_DESCRIPTION_LENGTH: usize = 10;

/// Maximum problem description length
pub const MAX_PROBLEM_DESCRIPTION_LENGTH: usize = 50_000;

/// Default time limit sent with the problem form (milliseconds)
pub const DEFAULT_TIME_LIMIT_MS: u32 = 1000;

/// Default memory limit sent with the problem form (megabytes)
pub const DEFAULT_MEMORY_LIMIT_MB: u32 = 256;

/// Problem difficulty levels
pub mod difficulties {
    pub const EASY: &str = "Easy";
    pub const MEDIUM: &str = "Medium";
    pub const HARD: &str = "Hard";

    /// All difficulty levels
    pub const ALL: &[&str] = &[EASY, MEDIUM, HARD];
}

// =============================================================================
// ACCOUNT VALIDATION
// =============================================================================

/// Username minimum length
pub const MIN_USERNAME_LENGTH: usize = 3;

/// Username maximum length
pub const MAX_USERNAME_LENGTH: usize = 20;

/// Maximum email length (RFC 5321)
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Full name minimum length
pub const MIN_FULL_NAME_LENGTH: usize = 2;

/// Full name maximum length
pub const MAX_FULL_NAME_LENGTH: usize = 100;

// =============================================================================
// CODE SUBMISSION
// =============================================================================

/// Maximum source code length in characters
pub const MAX_CODE_LENGTH: usize = 50_000;

/// Function name used by fallback starter templates
pub const DEFAULT_FUNCTION_NAME: &str = "solve";

/// Language identifiers accepted by the judge
pub mod languages {
    pub const PYTHON: &str = "python";
    pub const JAVA: &str = "java";
    pub const CPP: &str = "cpp";
    pub const CPP_ALIAS: &str = "c++";
    pub const JAVASCRIPT: &str = "javascript";
    pub const JAVASCRIPT_ALIAS: &str = "js";

    /// All accepted language identifiers (including aliases)
    pub const ALL: &[&str] = &[PYTHON, JAVA, CPP, CPP_ALIAS, JAVASCRIPT, JAVASCRIPT_ALIAS];
}

/// Verdict reported by the judge for a fully passing run
pub const VERDICT_ACCEPTED: &str = "Accepted";

/// Per-case status reported by `/api/run` for a passing case
pub const CASE_PASSED: &str = "Passed";

// =============================================================================
// PROBLEM LISTING
// =============================================================================

/// Maximum length of the listing search term
pub const MAX_SEARCH_LENGTH: usize = 100;
