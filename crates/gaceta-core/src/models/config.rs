//! Configuration structures for the scanning pipeline.

use serde::{Deserialize, Serialize};

use crate::extract::vocabulary::{
    to_owned_list, CITIZEN_RANKS, IDENTITY_KEYWORDS, IDENTITY_LETTERS, MILITARY_TERMS,
    NAME_BLACKLIST, NAME_CONNECTORS, RANK_TITLE_RANKS,
};

/// Main configuration for gazette scanning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Identity-number matcher parameters.
    pub identity: IdentityConfig,

    /// Name resolver parameters.
    pub names: NameConfig,

    /// Military mention parameters.
    pub military: MilitaryConfig,

    /// Rank + name + C.I + title parameters.
    pub rank_title: RankTitleConfig,

    /// "En relación a la ciudadana/o" record parameters.
    pub citizen_rank: CitizenRankConfig,

    /// Characters of context on each side of a display snippet.
    pub snippet_chars: usize,

    /// Tabular export parameters.
    pub export: ExportConfig,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            identity: IdentityConfig::default(),
            names: NameConfig::default(),
            military: MilitaryConfig::default(),
            rank_title: RankTitleConfig::default(),
            citizen_rank: CitizenRankConfig::default(),
            snippet_chars: 150,
            export: ExportConfig::default(),
        }
    }
}

/// Identity-number matcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Accepted identity marker letters (case-insensitive).
    pub letters: String,

    /// Minimum digit count after normalization.
    pub min_digits: usize,

    /// Maximum digit count after normalization.
    pub max_digits: usize,

    /// Maximum separator characters between the letter and the digits.
    pub max_separator_chars: usize,

    /// Require a keyword near the match.
    pub require_keyword: bool,

    /// Radius of the keyword window, in characters.
    pub keyword_radius: usize,

    /// Radius of the window handed to the name resolver.
    pub name_radius: usize,

    /// Radius of the stored verification context.
    pub context_radius: usize,

    /// Person/entity words that gate identity matches.
    pub keywords: Vec<String>,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            letters: IDENTITY_LETTERS.to_string(),
            min_digits: 4,
            max_digits: 10,
            max_separator_chars: 3,
            require_keyword: true,
            keyword_radius: 150,
            name_radius: 120,
            context_radius: 400,
            keywords: to_owned_list(IDENTITY_KEYWORDS),
        }
    }
}

/// Name resolver configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NameConfig {
    /// Words removed from the context before looking for names.
    pub blacklist: Vec<String>,

    /// Lowercase particles allowed between name words.
    pub connectors: Vec<String>,

    /// Minimum number of name words in a span.
    pub min_words: usize,

    /// Maximum number of name words in a span.
    pub max_words: usize,
}

impl Default for NameConfig {
    fn default() -> Self {
        Self {
            blacklist: to_owned_list(NAME_BLACKLIST),
            connectors: to_owned_list(NAME_CONNECTORS),
            min_words: 2,
            max_words: 6,
        }
    }
}

/// Military mention configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MilitaryConfig {
    /// Ranks, units and institutions to report.
    pub terms: Vec<String>,

    /// Radius of the stored context.
    pub context_radius: usize,
}

impl Default for MilitaryConfig {
    fn default() -> Self {
        Self {
            terms: to_owned_list(MILITARY_TERMS),
            context_radius: 500,
        }
    }
}

/// Rank + name + C.I + title configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankTitleConfig {
    /// Ranks accepted at the head of the record.
    pub ranks: Vec<String>,

    /// Radius of the stored context.
    pub context_radius: usize,
}

impl Default for RankTitleConfig {
    fn default() -> Self {
        Self {
            ranks: to_owned_list(RANK_TITLE_RANKS),
            context_radius: 300,
        }
    }
}

/// Citizen + rank + name + C.I + office configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CitizenRankConfig {
    /// Ranks accepted after the lead-in phrase.
    pub ranks: Vec<String>,

    /// Radius of the stored context.
    pub context_radius: usize,

    /// How far past the identity number to look for "en su carácter de (...)".
    pub office_search_chars: usize,
}

impl Default for CitizenRankConfig {
    fn default() -> Self {
        Self {
            ranks: to_owned_list(CITIZEN_RANKS),
            context_radius: 400,
            office_search_chars: 300,
        }
    }
}

/// Tabular export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Total characters of context kept in the Context column.
    pub context_chars: usize,

    /// Only export military mentions whose term has exactly two words.
    pub military_two_words_only: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            context_chars: 800,
            military_two_words_only: true,
        }
    }
}

impl ScanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check that every matcher can be built from this configuration.
    pub fn validate(&self) -> crate::Result<()> {
        crate::scan::Scanner::new(self)?;
        Ok(())
    }
}
