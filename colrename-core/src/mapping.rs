use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Built-in column renames for the posts, social connections and users tables.
const STANDARD_MAPPINGS: &[(&str, &str)] = &[
    ("\"teamId\"", "team_id"),
    ("\"userId\"", "user_id"),
    ("\"providerId\"", "provider_id"),
    ("\"scheduledFor\"", "scheduled_for"),
    ("\"publishedAt\"", "published_at"),
    ("\"createdAt\"", "created_at"),
    ("\"updatedAt\"", "updated_at"),
    ("\"lastPublishJobId\"", "last_publish_job_id"),
    ("\"lastPublishStatus\"", "last_publish_status"),
    ("\"lastPublishError\"", "last_publish_error"),
    ("\"lastPublishAttemptAt\"", "last_publish_attempt_at"),
    ("\"imageUrl\"", "image_url"),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MappingError {
    #[error("mapping table is empty")]
    Empty,
    #[error("mapping #{index} has an empty old token")]
    EmptyToken { index: usize },
    #[error("duplicate old token {token}")]
    DuplicateToken { token: String },
}

/// A single legacy column literal and the identifier that replaces it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    pub old: String,
    pub new: String,
}

impl ColumnMapping {
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
        }
    }

    /// Build a mapping from a bare camelCase column name: `teamId` becomes
    /// `"teamId"` -> `team_id`.
    pub fn from_column(column: &str) -> Self {
        Self::new(format!("\"{column}\""), to_snake_case(column))
    }
}

/// Ordered set of mappings. Old tokens are unique and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingTable {
    mappings: Vec<ColumnMapping>,
}

impl MappingTable {
    pub fn new(mappings: Vec<ColumnMapping>) -> Result<Self, MappingError> {
        if mappings.is_empty() {
            return Err(MappingError::Empty);
        }

        for (index, mapping) in mappings.iter().enumerate() {
            if mapping.old.is_empty() {
                return Err(MappingError::EmptyToken { index });
            }
            if mappings[..index].iter().any(|m| m.old == mapping.old) {
                return Err(MappingError::DuplicateToken {
                    token: mapping.old.clone(),
                });
            }
        }

        Ok(Self { mappings })
    }

    /// The built-in table used when no mappings are configured
    pub fn standard() -> Self {
        Self {
            mappings: STANDARD_MAPPINGS
                .iter()
                .map(|(old, new)| ColumnMapping::new(*old, *new))
                .collect(),
        }
    }

    pub fn from_columns<S: AsRef<str>>(columns: &[S]) -> Result<Self, MappingError> {
        Self::new(
            columns
                .iter()
                .map(|c| ColumnMapping::from_column(c.as_ref()))
                .collect(),
        )
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColumnMapping> {
        self.mappings.iter()
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// True when no new token contains an old token, so a second pass over
    /// already rewritten text replaces nothing.
    pub fn is_idempotent(&self) -> bool {
        self.offending_pairs().is_empty()
    }

    /// Pairs of (new token, old token it contains) that break idempotence
    pub fn offending_pairs(&self) -> Vec<(&str, &str)> {
        let mut pairs = Vec::new();
        for produced in &self.mappings {
            for candidate in &self.mappings {
                if produced.new.contains(candidate.old.as_str()) {
                    pairs.push((produced.new.as_str(), candidate.old.as_str()));
                }
            }
        }
        pairs
    }
}

impl Default for MappingTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> IntoIterator for &'a MappingTable {
    type Item = &'a ColumnMapping;
    type IntoIter = std::slice::Iter<'a, ColumnMapping>;

    fn into_iter(self) -> Self::IntoIter {
        self.mappings.iter()
    }
}

/// Convert a camelCase or PascalCase identifier to snake_case.
///
/// Uppercase runs are kept together as one word, so `imageURL` becomes
/// `image_url` and `HTTPServer` becomes `http_server`.
pub fn to_snake_case(ident: &str) -> String {
    let chars: Vec<char> = ident.chars().collect();
    let mut out = String::with_capacity(ident.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '-' || c == ' ' || c == '_' {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            continue;
        }

        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let word_start = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if word_start && !out.ends_with('_') {
                out.push('_');
            }
        }

        out.extend(c.to_lowercase());
    }

    out
}
