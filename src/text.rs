//! Transcript text cleanup and casing helpers
//!
//! Whisper output carries leading spaces and uneven internal whitespace;
//! everything downstream works on the normalized form.

/// Trim and collapse any run of whitespace to a single space.
///
/// Idempotent: `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Upper-case the first character, leaving the rest untouched
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Upper-case the first character of every whitespace-separated word
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The last `max_chars` characters of `text`, on char boundaries
pub fn tail_chars(text: &str, max_chars: usize) -> &str {
    let total = text.chars().count();
    if total <= max_chars {
        return text;
    }
    let skip = total - max_chars;
    match text.char_indices().nth(skip) {
        Some((byte_offset, _)) => &text[byte_offset..],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(normalize("  hello \t\n world  "), "hello world");
    }

    #[test]
    fn normalize_is_idempotent() {
        let inputs = ["", "   ", "one", " a  b\tc ", "already clean"];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn capitalizes_first_letter_only() {
        assert_eq!(capitalize_first("first, let's talk"), "First, let's talk");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn title_cases_every_word() {
        assert_eq!(title_case("getting started guide"), "Getting Started Guide");
    }

    #[test]
    fn tail_respects_char_boundaries() {
        assert_eq!(tail_chars("hello", 10), "hello");
        assert_eq!(tail_chars("hello", 3), "llo");
        // Multi-byte characters must not be split mid-codepoint
        assert_eq!(tail_chars("héllo", 4), "éllo");
    }
}
