//! Common regex patterns and pattern builders for gazette extraction.

use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

use crate::error::ConfigError;

lazy_static! {
    // "en su carácter de (CARGO)" clause following a citizen record
    pub static ref OFFICE_CLAUSE: Regex = Regex::new(
        r"(?i)en\s+su\s+car[áa]cter\s+de\s*\(([^)]+)\)"
    ).unwrap();

    // Lead-in of a citizen record; bounds the office search
    pub static ref CITIZEN_LEAD_IN: Regex = Regex::new(
        r"(?i)en\s+relaci[óo]n\s+a\s+la\s+ciudadan[oa]"
    ).unwrap();

    pub static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Identity marker in rank records, tolerant of OCR noise: C.I, C.1, C.i¡, Cédula.
pub const ID_MARKER: &str = r"(?:C\s*\.?\s*[I1l¡|][.¡]?|c[ée]dula)";

/// Optional numbering symbol before a number: Nº, N°, N*, N?, N9, No.
pub const NUMBERING_SYMBOL: &str = r"(?:N[º°o?*9%.]*\s*)?";

/// Digits with interior grouping separators, e.g. `12.685.318`.
pub const GROUPED_DIGITS: &str = r"\d+(?:[.,]\d+)*";

/// Person name inside a rank record: letters and whitespace, shortest run.
pub const RECORD_NAME: &str = r"\p{L}[\p{L}\s]*?";

/// Order a vocabulary longest-first: more words first, then more characters.
///
/// Regex alternation is leftmost-first, so `Mayor General` must precede
/// `Mayor` or the shorter rank wins and truncates the capture.
pub fn sort_longest_first(words: &[String]) -> Vec<String> {
    let mut sorted: Vec<String> = words
        .iter()
        .map(|w| w.trim().to_string())
        .filter(|w| !w.is_empty())
        .collect();
    sorted.sort_by(|a, b| {
        let by_words = b.split_whitespace().count().cmp(&a.split_whitespace().count());
        by_words.then_with(|| b.chars().count().cmp(&a.chars().count()))
    });
    sorted.dedup();
    sorted
}

/// Escape a vocabulary entry, adding word boundaries where the entry begins
/// or ends with a word character and letting any whitespace run separate
/// its words.
fn vocabulary_term(word: &str) -> String {
    let escaped = regex::escape(word).replace(' ', r"\s+");
    let mut term = String::with_capacity(escaped.len() + 4);
    if word.chars().next().is_some_and(|c| c.is_alphanumeric()) {
        term.push_str(r"\b");
    }
    term.push_str(&escaped);
    if word.chars().last().is_some_and(|c| c.is_alphanumeric()) {
        term.push_str(r"\b");
    }
    term
}

/// Build a longest-first alternation over a vocabulary.
///
/// Returns an error when the vocabulary has no usable entries.
pub fn vocabulary_alternation(field: &'static str, words: &[String]) -> Result<String, ConfigError> {
    let sorted = sort_longest_first(words);
    if sorted.is_empty() {
        return Err(ConfigError::EmptyVocabulary { field });
    }
    let alternatives: Vec<String> = sorted.iter().map(|w| vocabulary_term(w)).collect();
    Ok(format!("(?:{})", alternatives.join("|")))
}

/// Build a character class over the identity letters.
pub fn letter_class(letters: &str) -> Result<String, ConfigError> {
    let mut unique: Vec<char> = letters
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect();
    if unique.is_empty() || !unique.iter().all(|c| c.is_ascii_alphabetic()) {
        return Err(ConfigError::InvalidLetterSet(letters.to_string()));
    }
    unique.sort_unstable();
    unique.dedup();
    Ok(format!("[{}]", unique.into_iter().collect::<String>()))
}

/// Compile a generated pattern.
pub fn compile(name: &'static str, pattern: &str) -> Result<Regex, ConfigError> {
    RegexBuilder::new(pattern)
        .size_limit(1 << 24)
        .build()
        .map_err(|source| ConfigError::InvalidPattern { name, source })
}

/// Keep only ASCII digits.
pub fn digits_only(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Collapse whitespace runs (including OCR line breaks) to single spaces.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::vocabulary::to_owned_list;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sort_longest_first() {
        let sorted = sort_longest_first(&to_owned_list(&[
            "Mayor",
            "Mayor General",
            "General de Brigada",
            "Coronel",
        ]));
        assert_eq!(
            sorted,
            to_owned_list(&["General de Brigada", "Mayor General", "Coronel", "Mayor"])
        );
    }

    #[test]
    fn test_vocabulary_alternation_prefers_longer_terms() {
        let pattern =
            vocabulary_alternation("ranks", &to_owned_list(&["Mayor", "Mayor General"])).unwrap();
        let re = compile("test", &format!("(?i)({})", pattern)).unwrap();
        let caps = re.captures("el Mayor General Pérez").unwrap();
        assert_eq!(&caps[1], "Mayor General");
    }

    #[test]
    fn test_vocabulary_term_boundaries() {
        let pattern = vocabulary_alternation("keywords", &to_owned_list(&["C.I.", "titular"])).unwrap();
        let re = compile("test", &format!("(?i){}", pattern)).unwrap();
        assert!(re.is_match("según C.I. 1234"));
        assert!(re.is_match("TITULAR de"));
        assert!(!re.is_match("titulares"));
    }

    #[test]
    fn test_empty_vocabulary_is_rejected() {
        let err = vocabulary_alternation("ranks", &to_owned_list(&["", "  "])).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyVocabulary { field: "ranks" }));
    }

    #[test]
    fn test_letter_class() {
        assert_eq!(letter_class("vejgp").unwrap(), "[EGJPV]");
        assert!(letter_class("").is_err());
        assert!(letter_class("V1").is_err());
    }

    #[test]
    fn test_office_clause_spans_lines() {
        let caps = OFFICE_CLAUSE
            .captures("en su carácter de\n(DIRECTORA GENERAL)")
            .unwrap();
        assert_eq!(&caps[1], "DIRECTORA GENERAL");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  JUAN \n PÉREZ  "), "JUAN PÉREZ");
        assert_eq!(digits_only("12.685.318"), "12685318");
    }
}
