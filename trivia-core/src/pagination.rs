//! Page slicing for question listings

use serde::Deserialize;

/// Items per page
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Query parameters for pagination.
///
/// `page` is kept as raw text: a value that does not parse falls back to
/// page 1 instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    /// Requested page number (1-indexed, may be `< 1`).
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(1)
    }
}

/// Return page `page` of `items`.
///
/// - Page 1 starts at index 0
/// - Pages past the end, and pages below 1, are empty
pub fn paginate<T>(items: &[T], page: i64) -> &[T] {
    if page < 1 {
        return &[];
    }

    let start = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
        .unwrap_or(usize::MAX);
    if start >= items.len() {
        return &[];
    }

    let end = start.saturating_add(QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}
