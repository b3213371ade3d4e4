//! Monospace text layout: char-safe truncation and greedy word wrap.

/// Longest prefix of `text` with at most `max_chars` characters.
pub fn fit_chars(
    text: &str,
    max_chars: usize,
) -> &str {
    let end = text.char_indices().nth(max_chars).map_or(text.len(), |(i, _)| i);
    &text[..end]
}

/// Break `text` into lines of at most `max_chars` characters.
///
/// Lines break at the last space that fits; a word longer than a line is
/// split mid-word.
pub fn wrap_lines(
    text: &str,
    max_chars: usize,
) -> Vec<&str> {
    let mut lines = Vec::new();
    if max_chars == 0 {
        return lines;
    }

    let mut rest = text.trim();
    while !rest.is_empty() {
        let head = fit_chars(rest, max_chars);
        if head.len() == rest.len() {
            lines.push(rest);
            break;
        }
        let cut = if rest[head.len()..].starts_with(' ') {
            head.len()
        } else {
            match head.rfind(' ') {
                Some(space) if space > 0 => space,
                _ => head.len(),
            }
        };
        lines.push(rest[..cut].trim_end());
        rest = rest[cut..].trim_start();
    }
    lines
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_chars_respects_char_boundaries() {
        assert_eq!(fit_chars("Cîrstea", 2), "Cî");
        assert_eq!(fit_chars("ab", 10), "ab");
        assert_eq!(fit_chars("ab", 0), "");
    }

    #[test]
    fn test_wrap_at_spaces() {
        let lines = wrap_lines("Online store with cart and checkout", 12);
        assert_eq!(lines, ["Online store", "with cart", "and checkout"]);
        assert!(lines.iter().all(|l| l.chars().count() <= 12));
    }

    #[test]
    fn test_wrap_splits_long_words() {
        assert_eq!(wrap_lines("abcdefgh ij", 3), ["abc", "def", "gh", "ij"]);
    }

    #[test]
    fn test_wrap_empty_and_zero_width() {
        assert!(wrap_lines("   ", 10).is_empty());
        assert!(wrap_lines("text", 0).is_empty());
    }
}
