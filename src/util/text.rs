//! Text helpers for list previews.

use std::borrow::Cow;

/// Preview length used by the post list.
pub const DEFAULT_PREVIEW_CHARS: usize = 100;

const ELLIPSIS: &str = "...";

/// Cut `text` to at most `max_len` characters, appending `...` when anything was dropped.
///
/// Counts `char`s, not bytes, so multi-byte text is never split mid-character.
pub fn truncate(text: &str, max_len: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_len) {
        None => Cow::Borrowed(text),
        Some((cut, _)) => Cow::Owned(format!("{}{ELLIPSIS}", &text[..cut])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(truncate("hello", 10), "hello");
        assert!(matches!(truncate("hello", 10), Cow::Borrowed(_)));
    }

    #[test]
    fn text_at_limit_is_unchanged() {
        assert_eq!(truncate("0123456789", 10), "0123456789");
    }

    #[test]
    fn long_text_gets_ellipsis() {
        assert_eq!(truncate("0123456789X", 10), "0123456789...");
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(truncate("héllo wörld", 5), "héllo...");
    }

    #[test]
    fn default_preview_length() {
        let long = "a".repeat(150);
        let preview = truncate(&long, DEFAULT_PREVIEW_CHARS);
        assert_eq!(preview.chars().count(), DEFAULT_PREVIEW_CHARS + ELLIPSIS.len());
    }
}
