//! Military rank, unit and institution mentions.

use regex::Regex;

use crate::error::ConfigError;
use crate::models::config::MilitaryConfig;
use crate::models::hit::{MilitaryHit, Span};

use super::context::ContextWindow;
use super::patterns::{compile, vocabulary_alternation};
use super::TextMatcher;

/// Military mention matcher.
#[derive(Debug, Clone)]
pub struct MilitaryMatcher {
    pattern: Regex,
    context_radius: usize,
}

impl MilitaryMatcher {
    pub fn new(config: &MilitaryConfig) -> Result<Self, ConfigError> {
        let alternation = vocabulary_alternation("military.terms", &config.terms)?;
        Ok(Self {
            pattern: compile("military", &format!("(?i){}", alternation))?,
            context_radius: config.context_radius,
        })
    }

    /// Every occurrence of a configured term, case-insensitive and
    /// word-bounded.
    pub fn find_military_mentions(&self, text: &str) -> Vec<MilitaryHit> {
        self.pattern
            .find_iter(text)
            .map(|m| {
                let (context_before, context_after) =
                    ContextWindow::around(text, m.start(), m.end(), self.context_radius).trimmed();
                MilitaryHit {
                    term: m.as_str().to_string(),
                    span: Span::new(m.start(), m.end()),
                    context_before,
                    context_after,
                }
            })
            .collect()
    }
}

impl TextMatcher for MilitaryMatcher {
    type Output = MilitaryHit;

    fn find_all(&self, text: &str) -> Vec<Self::Output> {
        self.find_military_mentions(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::vocabulary::to_owned_list;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_finds_terms_in_order() {
        let matcher = MilitaryMatcher::new(&MilitaryConfig::default()).unwrap();
        let text = "Se asciende al Teniente Coronel ANA RÍOS de la Guardia Nacional Bolivariana.";
        let terms: Vec<String> = matcher
            .find_military_mentions(text)
            .into_iter()
            .map(|h| h.term)
            .collect();
        assert_eq!(terms, vec!["Teniente Coronel", "Guardia Nacional Bolivariana"]);
    }

    #[test]
    fn test_case_insensitive_and_word_bounded() {
        let config = MilitaryConfig {
            terms: to_owned_list(&["militar", "FANB"]),
            context_radius: 5,
        };
        let matcher = MilitaryMatcher::new(&config).unwrap();

        let hits = matcher.find_military_mentions("personal MILITAR y paramilitares de la fanb");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].term, "MILITAR");
        assert_eq!(hits[0].context_before, "onal");
        assert_eq!(hits[0].context_after, "y pa");
        assert_eq!(hits[1].term, "fanb");
    }

    #[test]
    fn test_terms_across_line_breaks() {
        let matcher = MilitaryMatcher::new(&MilitaryConfig::default()).unwrap();
        let hits = matcher.find_military_mentions("el Mayor\nGeneral designado");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].term, "Mayor\nGeneral");
    }

    #[test]
    fn test_empty_vocabulary() {
        let config = MilitaryConfig {
            terms: Vec::new(),
            context_radius: 500,
        };
        assert!(MilitaryMatcher::new(&config).is_err());
    }
}
