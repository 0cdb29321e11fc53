/// Truncates a string to at most `max_chars` characters.
#[must_use]
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => s.get(..end).unwrap_or(s),
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_string_untouched() {
        assert_eq!(truncate_chars("hola", 50), "hola");
    }

    #[test]
    fn test_truncates_on_char_boundary() {
        assert_eq!(truncate_chars("¿cuánto cuesta?", 7), "¿cuánto");
    }

    #[test]
    fn test_zero_length() {
        assert_eq!(truncate_chars("hello", 0), "");
    }
}
