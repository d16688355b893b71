//! Venezuelan identity number (cédula / RIF) extraction.
//!
//! A candidate is a marker letter, up to a few separator characters and a
//! digit group. Identity-shaped numbers are everywhere in gazette
//! boilerplate, so a candidate only becomes a hit when it has enough digits
//! and, by default, a person/entity keyword close by.

use regex::Regex;
use tracing::trace;

use crate::error::ConfigError;
use crate::models::config::IdentityConfig;
use crate::models::hit::{IdentityHit, Span, UNKNOWN_NAME};

use super::context::ContextWindow;
use super::names::NameResolver;
use super::patterns::{compile, digits_only, letter_class, vocabulary_alternation, GROUPED_DIGITS};
use super::TextMatcher;

/// Identity number matcher, compiled once from configuration.
#[derive(Debug, Clone)]
pub struct IdentityMatcher {
    pattern: Regex,
    keywords: Option<Regex>,
    resolver: NameResolver,
    min_digits: usize,
    max_digits: usize,
    keyword_radius: usize,
    name_radius: usize,
    context_radius: usize,
}

impl IdentityMatcher {
    /// Build the matcher. Fails on an invalid letter set, inconsistent digit
    /// bounds or an empty keyword list while keyword gating is on.
    pub fn new(config: &IdentityConfig, resolver: NameResolver) -> Result<Self, ConfigError> {
        if config.min_digits == 0 || config.min_digits > config.max_digits {
            return Err(ConfigError::InvalidDigitBounds {
                min: config.min_digits,
                max: config.max_digits,
            });
        }

        let letters = letter_class(&config.letters)?;
        let pattern = compile(
            "identity",
            &format!(
                r"(?i)\b({})([\s.\-:/°º#]{{0,{}}})({}(?:-\d)?)\b",
                letters, config.max_separator_chars, GROUPED_DIGITS
            ),
        )?;

        let keywords = if config.require_keyword {
            let alternation = vocabulary_alternation("identity.keywords", &config.keywords)?;
            Some(compile("identity.keywords", &format!("(?i){}", alternation))?)
        } else {
            None
        };

        Ok(Self {
            pattern,
            keywords,
            resolver,
            min_digits: config.min_digits,
            max_digits: config.max_digits,
            keyword_radius: config.keyword_radius,
            name_radius: config.name_radius,
            context_radius: config.context_radius,
        })
    }

    /// Find every plausible identity number in `text`, left to right.
    pub fn find_identity_matches(&self, text: &str) -> Vec<IdentityHit> {
        let mut results = Vec::new();

        for caps in self.pattern.captures_iter(text) {
            let full_match = caps.get(0).unwrap();
            let (start, end) = (full_match.start(), full_match.end());

            let letter = caps[1]
                .chars()
                .find(|c| c.is_ascii_alphabetic())
                .map(|c| c.to_ascii_uppercase())
                .unwrap_or('V');
            let digits = digits_only(&caps[3]);

            if digits.len() < self.min_digits || digits.len() > self.max_digits {
                trace!(
                    candidate = full_match.as_str(),
                    digits = digits.len(),
                    "discarding identity candidate: digit count out of bounds"
                );
                continue;
            }

            if !self.has_keyword_nearby(text, start, end) {
                trace!(
                    candidate = full_match.as_str(),
                    "discarding identity candidate: no keyword nearby"
                );
                continue;
            }

            let name_window = ContextWindow::around(text, start, end, self.name_radius);
            let resolved_name = self
                .resolver
                .resolve_name(name_window.before, name_window.after)
                .unwrap_or_else(|| UNKNOWN_NAME.to_string());

            let (context_before, context_after) =
                ContextWindow::around(text, start, end, self.context_radius).trimmed();

            results.push(IdentityHit {
                raw_match: full_match.as_str().to_string(),
                normalized_id: format!("{}-{}", letter, digits),
                letter,
                digits,
                resolved_name,
                span: Span::new(start, end),
                context_before,
                context_after,
            });
        }

        results
    }

    fn has_keyword_nearby(&self, text: &str, start: usize, end: usize) -> bool {
        match &self.keywords {
            Some(keywords) => {
                keywords.is_match(ContextWindow::spanning(text, start, end, self.keyword_radius))
            }
            None => true,
        }
    }
}

impl TextMatcher for IdentityMatcher {
    type Output = IdentityHit;

    fn find_all(&self, text: &str) -> Vec<Self::Output> {
        self.find_identity_matches(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::NameConfig;
    use pretty_assertions::assert_eq;

    fn matcher() -> IdentityMatcher {
        let resolver = NameResolver::new(&NameConfig::default()).unwrap();
        IdentityMatcher::new(&IdentityConfig::default(), resolver).unwrap()
    }

    #[test]
    fn test_citizen_with_cedula() {
        let text = "Se designa al ciudadano JUAN CARLOS PÉREZ GÓMEZ, titular de la cédula \
                    V-12345678, en su carácter de Director General.";
        let hits = matcher().find_identity_matches(text);

        assert_eq!(hits.len(), 1);
        let hit = &hits[0];
        assert_eq!(hit.normalized_id, "V-12345678");
        assert_eq!(hit.letter, 'V');
        assert_eq!(hit.digits, "12345678");
        assert_eq!(hit.raw_match, "V-12345678");
        assert_eq!(hit.resolved_name, "JUAN CARLOS PÉREZ GÓMEZ");
        assert_eq!(&text[hit.span.start..hit.span.end], "V-12345678");
        assert!(hit.context_after.starts_with(", en su carácter"));
    }

    #[test]
    fn test_grouped_digits_are_normalized() {
        let text = "la ciudadana María Elena Rojas, cédula de identidad N° v.12.685.318";
        let hits = matcher().find_identity_matches(text);

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].normalized_id, "V-12685318");
        assert_eq!(hits[0].resolved_name, "María Elena Rojas");
    }

    #[test]
    fn test_short_numbers_are_discarded() {
        let text = "El ciudadano titular de la cédula V. 6 y E-123 firma.";
        assert!(matcher().find_identity_matches(text).is_empty());
    }

    #[test]
    fn test_reference_number_never_matches() {
        let text = "ciudadano titular cédula identidad Gaceta N. 6";
        assert!(matcher().find_identity_matches(text).is_empty());
    }

    #[test]
    fn test_requires_keyword_nearby() {
        let text = "Resolución DM G-20000123 de fecha 12 de marzo, publicada en la Gaceta.";
        assert!(matcher().find_identity_matches(text).is_empty());
    }

    #[test]
    fn test_keyword_gate_can_be_disabled() {
        let config = IdentityConfig {
            require_keyword: false,
            ..Default::default()
        };
        let resolver = NameResolver::new(&NameConfig::default()).unwrap();
        let matcher = IdentityMatcher::new(&config, resolver).unwrap();

        let hits = matcher.find_identity_matches("Oficio G-20000123 de fecha");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].normalized_id, "G-20000123");
        assert!(hits[0].is_unknown());
    }

    #[test]
    fn test_normalized_id_shape() {
        let text = "ciudadanos J-30123456-7, V 1.234.567 y E:84123456 representante legal";
        let hits = matcher().find_identity_matches(text);

        assert_eq!(hits.len(), 3);
        for hit in &hits {
            let (letter, digits) = hit.normalized_id.split_once('-').unwrap();
            assert_eq!(letter.len(), 1);
            assert!("VEJGP".contains(letter));
            assert!(digits.chars().all(|c| c.is_ascii_digit()));
        }
        assert_eq!(hits[0].normalized_id, "J-301234567");
        assert_eq!(hits[1].normalized_id, "V-1234567");
    }

    #[test]
    fn test_rif_check_digit_is_kept() {
        let hits =
            matcher().find_identity_matches("la sociedad mercantil J-30123456-7 representante");

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].raw_match, "J-30123456-7");
        assert_eq!(hits[0].digits, "301234567");
        assert_eq!(hits[0].normalized_id, "J-301234567");
    }

    #[test]
    fn test_match_at_text_edges() {
        let hits = matcher().find_identity_matches("V-12345678 titular");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].context_before, "");
        assert_eq!(hits[0].resolved_name, UNKNOWN_NAME);
    }

    #[test]
    fn test_invalid_configuration() {
        let resolver = NameResolver::new(&NameConfig::default()).unwrap();

        let bad_bounds = IdentityConfig {
            min_digits: 9,
            max_digits: 4,
            ..Default::default()
        };
        assert!(matches!(
            IdentityMatcher::new(&bad_bounds, resolver.clone()),
            Err(ConfigError::InvalidDigitBounds { min: 9, max: 4 })
        ));

        let bad_letters = IdentityConfig {
            letters: "V-".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            IdentityMatcher::new(&bad_letters, resolver.clone()),
            Err(ConfigError::InvalidLetterSet(_))
        ));

        let no_keywords = IdentityConfig {
            keywords: Vec::new(),
            ..Default::default()
        };
        assert!(matches!(
            IdentityMatcher::new(&no_keywords, resolver),
            Err(ConfigError::EmptyVocabulary { .. })
        ));
    }
}
