//! Todo field rules shared by the API layer and the client.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::types::DbId;

/// Maximum title length, matching the `VARCHAR(255)` column.
pub const TITLE_MAX_LEN: usize = 255;

/// Maximum category length, matching the `VARCHAR(50)` column.
pub const CATEGORY_MAX_LEN: usize = 50;

/// Message returned when either required create field is absent or blank.
pub const MISSING_FIELDS_MSG: &str = "Title and category are required";

/// Message returned when a create field holds a character PostgreSQL text
/// columns cannot store.
pub const NUL_CHAR_MSG: &str = "Title and category must not contain NUL characters";

/// Message returned when a path id does not parse as an integer.
pub const INVALID_ID_MSG: &str = "Invalid todo id";

/// Validate the create payload's required fields.
///
/// Both fields are trimmed; blank counts as missing. Returns the trimmed
/// `(title, category)` pair ready for insertion.
pub fn validate_new_todo(
    title: Option<&str>,
    category: Option<&str>,
) -> Result<(String, String), CoreError> {
    let title = title.map(str::trim).unwrap_or_default();
    let category = category.map(str::trim).unwrap_or_default();

    if title.is_empty() || category.is_empty() {
        return Err(CoreError::Validation(MISSING_FIELDS_MSG.to_string()));
    }
    if title.contains('\0') || category.contains('\0') {
        return Err(CoreError::Validation(NUL_CHAR_MSG.to_string()));
    }
    if title.chars().count() > TITLE_MAX_LEN {
        return Err(CoreError::Validation(format!(
            "Title must be at most {TITLE_MAX_LEN} characters"
        )));
    }
    if category.chars().count() > CATEGORY_MAX_LEN {
        return Err(CoreError::Validation(format!(
            "Category must be at most {CATEGORY_MAX_LEN} characters"
        )));
    }

    Ok((title.to_string(), category.to_string()))
}

/// Parse a todo id taken from a URL path segment.
///
/// The whole segment must be a base-10 integer; `"12abc"` is rejected.
pub fn parse_todo_id(raw: &str) -> Result<DbId, CoreError> {
    raw.trim()
        .parse::<DbId>()
        .map_err(|_| CoreError::Validation(INVALID_ID_MSG.to_string()))
}

/// The categories the client offers. The server accepts any label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    Work,
    Life,
    Study,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Work, Category::Life, Category::Study];

    /// Wire label stored in the `category` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Life => "life",
            Category::Study => "study",
        }
    }

    /// Short marker shown next to a todo in list views.
    pub fn marker(self) -> &'static str {
        match self {
            Category::Work => "[W]",
            Category::Life => "[L]",
            Category::Study => "[S]",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "work" => Ok(Category::Work),
            "life" => Ok(Category::Life),
            "study" => Ok(Category::Study),
            other => Err(CoreError::Validation(format!(
                "Unknown category '{other}', expected one of: work, life, study"
            ))),
        }
    }
}
