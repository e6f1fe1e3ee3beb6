//! Case-insensitive substring search over question text

use serde::Deserialize;

/// Body of `POST /questions/search`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
}

impl SearchRequest {
    /// The term to match; absent or null means match everything.
    pub fn term(&self) -> &str {
        self.search_term.as_deref().unwrap_or("")
    }
}

/// True when `text` contains `term`, ignoring case.
pub fn matches(text: &str, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    text.to_lowercase().contains(&term.to_lowercase())
}

/// `ILIKE` pattern matching `term` literally anywhere in a column.
///
/// Escapes with `\`, the PostgreSQL default escape character.
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
