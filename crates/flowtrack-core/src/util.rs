//! Shared utility functions used across multiple modules.

/// Normalize required text by trimming whitespace.
///
/// Returns `None` when the trimmed value is empty, so callers can reject
/// blank input before it reaches storage.
pub fn normalize_required(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Normalize an email address for storage and comparison.
///
/// Emails compare case-insensitively everywhere in the app, so the stored
/// form is trimmed and ASCII-lowercased.
pub fn normalize_email(value: &str) -> String {
    value.trim().to_ascii_lowercase()
}

/// Check whether two emails refer to the same account (case-insensitive).
pub fn emails_match(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

/// Current Unix timestamp in milliseconds.
pub fn unix_millis_now() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
