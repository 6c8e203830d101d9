use serde::{Deserialize, Serialize};

use crate::transform::transform_joke_text;

/// Joke record as returned by the provider
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RawJoke {
    pub id: String,
    #[serde(rename = "value")]
    pub text: String,
    #[serde(default)]
    pub categories: Vec<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Mascot-flavoured joke handed to callers
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Joke {
    pub id: String,
    pub text: String,
    pub mascot: String,
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Build the final joke from a provider record.
///
/// Timestamps and categories pass through untouched; only the text is rewritten.
pub fn build_joke(raw: RawJoke, mascot: &str, category: Option<String>) -> Joke {
    Joke {
        text: transform_joke_text(&raw.text, mascot),
        id: raw.id,
        mascot: mascot.to_string(),
        categories: raw.categories,
        category,
        created_at: raw.created_at,
        updated_at: raw.updated_at,
    }
}

/// Normalize a caller-supplied category.
///
/// Trims and lowercases the input. Returns `None` when nothing is left.
pub fn normalize_category(category: &str) -> Option<String> {
    let category = category.trim().to_lowercase();
    if category.is_empty() {
        None
    } else {
        Some(category)
    }
}
