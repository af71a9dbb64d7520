//! String formatting helpers for file names and identifiers.

/// Convert a region or calendar name into a file-name-safe token.
///
/// Lowercases, transliterates German umlauts and `ß`, and replaces spaces
/// and slashes with hyphens.
///
/// ```
/// use fk_core::utilities::normalize_filename;
///
/// assert_eq!(normalize_filename("Baden-Württemberg"), "baden-wuerttemberg");
/// assert_eq!(normalize_filename("Niederösterreich"), "niederoesterreich");
/// ```
pub fn normalize_filename(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 4);
    for c in text.chars().flat_map(char::to_lowercase) {
        match c {
            'ä' => out.push_str("ae"),
            'ö' => out.push_str("oe"),
            'ü' => out.push_str("ue"),
            'ß' => out.push_str("ss"),
            ' ' | '/' => out.push('-'),
            _ => out.push(c),
        }
    }
    out
}

/// Lowercase `text` and replace spaces with hyphens, as used for the
/// holiday-name part of event UIDs (`"New Year's Day"` → `"new-year's-day"`).
pub fn uid_token(text: &str) -> String {
    text.to_lowercase().replace(' ', "-")
}
