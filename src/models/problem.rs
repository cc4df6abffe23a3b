//! Problem form model

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MEMORY_LIMIT_MB, DEFAULT_TIME_LIMIT_MS, difficulties};

/// Fields of the create/edit problem form
///
/// `difficulty` holds the raw selection so an unselected box can be reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProblemForm {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub difficulty: String,
    /// Time limit in milliseconds
    pub time_limit: u32,
    /// Memory limit in megabytes
    pub memory_limit: u32,
    /// Tag ids
    pub tags: Vec<String>,
}

impl Default for ProblemForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            slug: String::new(),
            description: String::new(),
            difficulty: String::new(),
            time_limit: DEFAULT_TIME_LIMIT_MS,
            memory_limit: DEFAULT_MEMORY_LIMIT_MB,
            tags: Vec::new(),
        }
    }
}

impl ProblemForm {
    /// Flatten into multipart form fields, in form order
    ///
    /// `tags` repeats its key once per selected tag.
    pub fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields = vec![
            ("title".to_string(), self.title.clone()),
            ("slug".to_string(), self.slug.clone()),
            ("description".to_string(), self.description.clone()),
            ("difficulty".to_string(), self.difficulty.clone()),
            ("time_limit".to_string(), self.time_limit.to_string()),
            ("memory_limit".to_string(), self.memory_limit.to_string()),
        ];
        fields.extend(self.tags.iter().map(|tag| ("tags".to_string(), tag.clone())));
        fields
    }
}

/// Problem difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Get difficulty as the string the backend stores
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => difficulties::EASY,
            Self::Medium => difficulties::MEDIUM,
            Self::Hard => difficulties::HARD,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(format!("Unknown difficulty: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_defaults_from_partial_json() {
        let form: ProblemForm =
            serde_json::from_str(r#"{"title": "Two Sum", "slug": "two-sum"}"#).unwrap();
        assert_eq!(form.title, "Two Sum");
        assert_eq!(form.difficulty, "");
        assert_eq!(form.time_limit, 1000);
        assert_eq!(form.memory_limit, 256);
        assert!(form.tags.is_empty());
    }

    #[test]
    fn test_form_fields_repeat_tags() {
        let form = ProblemForm {
            title: "Two Sum".into(),
            tags: vec!["1".into(), "4".into()],
            ..ProblemForm::default()
        };
        let fields = form.form_fields();
        let tags: Vec<_> = fields
            .iter()
            .filter(|(k, _)| k == "tags")
            .map(|(_, v)| v.as_str())
            .collect();
        assert_eq!(tags, vec!["1", "4"]);
        assert!(fields.contains(&("time_limit".to_string(), "1000".to_string())));
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("Hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("expert".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::Medium.to_string(), "Medium");
    }
}
