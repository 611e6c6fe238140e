//! Free text to word tokens: split on whitespace, strip edge punctuation.

/// Tokenizes text into words.
///
/// Splits on runs of whitespace, then strips leading and trailing
/// characters that are not ASCII letters or digits; internal punctuation
/// stays ("don't" keeps its apostrophe). Tokens that strip to nothing
/// are dropped, so the result never contains empty strings. No case
/// folding happens here; consumers fold at comparison time.
pub fn get_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_ascii_alphanumeric()))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_whitespace_runs() {
        assert_eq!(get_words("one  two\tthree\nfour"), ["one", "two", "three", "four"]);
    }

    #[test]
    fn test_strips_edge_punctuation() {
        assert_eq!(get_words("(hello), world!"), ["hello", "world"]);
    }

    #[test]
    fn test_internal_punctuation_survives() {
        assert_eq!(get_words("don't stop."), ["don't", "stop"]);
    }

    #[test]
    fn test_pure_punctuation_tokens_dropped() {
        assert_eq!(get_words("--- ... !!!"), Vec::<String>::new());
    }

    #[test]
    fn test_case_is_preserved() {
        assert_eq!(get_words("Hello WORLD"), ["Hello", "WORLD"]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(get_words(""), Vec::<String>::new());
        assert_eq!(get_words("   "), Vec::<String>::new());
    }
}
