//! Small parsing helpers shared by the analyzers.

use crate::error::AnalyzeError;
use std::num::ParseFloatError;

/// Coerces a CSV cell to `f64`, ignoring surrounding whitespace.
pub fn parse_number(raw: &str) -> Result<f64, ParseFloatError> {
    raw.trim().parse::<f64>()
}

/// Converts a spreadsheet column name (`A`, `c`, `AA`) to a zero-based index.
///
/// # Errors
///
/// Returns [`AnalyzeError::InvalidColumn`] for empty input or any character
/// outside `A-Z`.
pub fn column_index(letters: &str) -> Result<u32, AnalyzeError> {
    let letters = letters.trim();
    if letters.is_empty() {
        return Err(AnalyzeError::InvalidColumn(letters.to_string()));
    }

    let mut index: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(AnalyzeError::InvalidColumn(letters.to_string()));
        }
        let digit = (c.to_ascii_uppercase() as u32) - ('A' as u32) + 1;
        index = index
            .checked_mul(26)
            .and_then(|i| i.checked_add(digit))
            .ok_or_else(|| AnalyzeError::InvalidColumn(letters.to_string()))?;
    }

    Ok(index - 1)
}

/// Counts case-insensitive, non-overlapping occurrences of `phrase`.
///
/// Matches are plain substrings, so `"art"` is found inside `"party"`. An
/// empty phrase counts zero.
pub fn count_phrase(haystack: &str, phrase: &str) -> usize {
    if phrase.is_empty() {
        return 0;
    }
    let needle = phrase.to_lowercase();
    haystack.to_lowercase().matches(needle.as_str()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_trims_whitespace() {
        assert_eq!(parse_number(" 42.5 ").unwrap(), 42.5);
        assert_eq!(parse_number("-3").unwrap(), -3.0);
    }

    #[test]
    fn test_parse_number_rejects_text() {
        assert!(parse_number("abc").is_err());
        assert!(parse_number("").is_err());
    }

    #[test]
    fn test_column_index_single_letters() {
        assert_eq!(column_index("A").unwrap(), 0);
        assert_eq!(column_index("c").unwrap(), 2);
        assert_eq!(column_index("Z").unwrap(), 25);
    }

    #[test]
    fn test_column_index_multiple_letters() {
        assert_eq!(column_index("AA").unwrap(), 26);
        assert_eq!(column_index("AZ").unwrap(), 51);
        assert_eq!(column_index("BA").unwrap(), 52);
    }

    #[test]
    fn test_column_index_invalid() {
        assert!(matches!(column_index(""), Err(AnalyzeError::InvalidColumn(_))));
        assert!(matches!(column_index("A1"), Err(AnalyzeError::InvalidColumn(_))));
    }

    #[test]
    fn test_count_phrase_case_insensitive() {
        let text = "Capital letter A, capital letter B";
        assert_eq!(count_phrase(text, "CAPITAL LETTER"), 2);
    }

    #[test]
    fn test_count_phrase_matches_inside_words() {
        assert_eq!(count_phrase("Romeo, romeos and ROMEO", "romeo"), 3);
    }

    #[test]
    fn test_count_phrase_is_non_overlapping() {
        assert_eq!(count_phrase("aaaa", "aa"), 2);
    }

    #[test]
    fn test_count_phrase_empty_phrase() {
        assert_eq!(count_phrase("anything", ""), 0);
    }
}
