//! Shared string utilities.
//!
//! - `truncate_chars` - cut subject text to a character budget
//! - `capitalize_first` - title-case stage names for log lines

// =============================================================================
// String Utilities
// =============================================================================

/// Truncate to at most `max_chars` characters (Unicode scalar values).
///
/// Returns a borrowed prefix, so text within budget passes through untouched.
#[inline]
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Capitalize the first character of a string.
#[inline]
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
