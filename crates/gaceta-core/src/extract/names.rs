//! Heuristic person-name resolution around a match.
//!
//! Boilerplate words are blanked out first, then the closest run of
//! capitalized or all-caps words wins: the last run before the match,
//! otherwise the first run after it.

use std::collections::HashSet;

use regex::Regex;

use crate::error::ConfigError;
use crate::models::config::NameConfig;

use super::patterns::{compile, vocabulary_alternation};

/// Inserted where a blacklisted word was removed; breaks name runs.
const REMOVED_WORD: &str = " | ";

/// Which side of the match a context string lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Before,
    After,
}

/// Name resolver, compiled once from configuration.
#[derive(Debug, Clone)]
pub struct NameResolver {
    blacklist: Regex,
    name_run: Regex,
    connectors: HashSet<String>,
    min_words: usize,
    max_words: usize,
}

impl NameResolver {
    /// Build the resolver.
    pub fn new(config: &NameConfig) -> Result<Self, ConfigError> {
        if config.min_words == 0 || config.min_words > config.max_words {
            return Err(ConfigError::InvalidWordBounds {
                min: config.min_words,
                max: config.max_words,
            });
        }

        let blacklist = compile(
            "names.blacklist",
            &format!("(?i){}", vocabulary_alternation("names.blacklist", &config.blacklist)?),
        )?;

        let connectors: HashSet<String> = config
            .connectors
            .iter()
            .map(|c| c.trim().to_lowercase())
            .filter(|c| !c.is_empty())
            .collect();

        // A word is Capitalized, ALLCAPS (2+ letters) or a connector particle
        let mut word = String::from(r"\p{Lu}\p{Ll}+|\p{Lu}{2,}");
        if !connectors.is_empty() {
            let mut particles: Vec<String> =
                connectors.iter().map(|c| regex::escape(c)).collect();
            particles.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
            word.push_str(&format!("|(?i:{})", particles.join("|")));
        }
        // Words join across spaces and a single line break, never a blank line
        let name_run = compile(
            "names.run",
            &format!(
                r"\b(?:{w})(?:(?:[ \t]+|[ \t]*\r?\n[ \t]*)(?:{w}))*\b",
                w = word
            ),
        )?;

        Ok(Self {
            blacklist,
            name_run,
            connectors,
            min_words: config.min_words,
            max_words: config.max_words,
        })
    }

    /// Resolve the most likely person name around a match.
    ///
    /// Returns `None` when neither side holds a plausible name; callers
    /// substitute [`crate::models::UNKNOWN_NAME`].
    pub fn resolve_name(&self, context_before: &str, context_after: &str) -> Option<String> {
        let before = self.strip_blacklist(context_before);
        let closest_before = self
            .name_run
            .find_iter(&before)
            .filter_map(|m| self.candidate(m.as_str(), Side::Before))
            .last();
        if closest_before.is_some() {
            return closest_before;
        }

        let after = self.strip_blacklist(context_after);
        self.name_run
            .find_iter(&after)
            .find_map(|m| self.candidate(m.as_str(), Side::After))
    }

    fn strip_blacklist(&self, text: &str) -> String {
        self.blacklist.replace_all(text, REMOVED_WORD).into_owned()
    }

    fn is_connector(&self, word: &str) -> bool {
        self.connectors.contains(&word.to_lowercase())
    }

    /// Turn a word run into a name: trim connectors at both ends and keep at
    /// most `max_words` name words, counted from the side nearest the match.
    fn candidate(&self, run: &str, side: Side) -> Option<String> {
        let mut words: Vec<&str> = run.split_whitespace().collect();
        if side == Side::Before {
            words.reverse();
        }

        let mut kept = Vec::new();
        let mut solid = 0;
        for word in words {
            if self.is_connector(word) {
                if solid > 0 {
                    kept.push(word);
                }
                continue;
            }
            if solid == self.max_words {
                break;
            }
            kept.push(word);
            solid += 1;
        }
        while kept.last().is_some_and(|w| self.is_connector(w)) {
            kept.pop();
        }

        if solid < self.min_words {
            return None;
        }
        if side == Side::Before {
            kept.reverse();
        }
        Some(kept.join(" "))
    }
}
