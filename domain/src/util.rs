//! Text helpers for log output.

use std::borrow::Cow;

/// Cut `s` to at most `max_bytes`, backing off to a char boundary.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let end = (0..=max_bytes)
        .rev()
        .find(|&i| s.is_char_boundary(i))
        .unwrap_or(0);
    &s[..end]
}

/// Single-line preview of a reply for log lines.
///
/// Line breaks are folded into spaces and an ellipsis marks a cut.
pub fn preview(text: &str, max_bytes: usize) -> Cow<'_, str> {
    let text = text.trim();
    let cut = truncate_str(text, max_bytes);
    let needs_folding = cut.contains(['\n', '\r']);

    match (needs_folding, cut.len() < text.len()) {
        (false, false) => Cow::Borrowed(cut),
        (folding, truncated) => {
            let mut out = if folding {
                cut.split_whitespace().collect::<Vec<_>>().join(" ")
            } else {
                cut.to_string()
            };
            if truncated {
                out.push('…');
            }
            Cow::Owned(out)
        }
    }
}
