//! Character-budget helpers

/// Return the longest prefix of `text` holding at most `max_chars` characters.
///
/// Counts Unicode scalar values, never bytes, so a multi-byte character is
/// never split.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_shorter_text_is_untouched() {
        assert_eq!(truncate_chars("abc", 5), "abc");
        assert_eq!(truncate_chars("abc", 3), "abc");
    }

    #[test]
    fn test_truncates_to_budget() {
        assert_eq!(truncate_chars("abcdef", 4), "abcd");
        assert_eq!(truncate_chars("abcdef", 0), "");
    }

    #[test]
    fn test_multibyte_boundary() {
        assert_eq!(truncate_chars("ééé", 2), "éé");
    }

    proptest! {
        #[test]
        fn prop_truncation_is_a_bounded_prefix(text in "\\PC{0,200}", budget in 0usize..250) {
            let truncated = truncate_chars(&text, budget);
            prop_assert!(text.starts_with(truncated));
            prop_assert_eq!(truncated.chars().count(), text.chars().count().min(budget));
        }
    }
}
