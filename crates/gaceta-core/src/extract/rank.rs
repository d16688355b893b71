//! Structured rank records: appointments that name an officer, an identity
//! number and an office.

use regex::Regex;

use crate::error::ConfigError;
use crate::models::config::{CitizenRankConfig, RankTitleConfig};
use crate::models::hit::{CitizenRankHit, RankTitleHit, Span};

use super::context::{self, ContextWindow};
use super::patterns::{
    collapse_whitespace, compile, digits_only, letter_class, vocabulary_alternation,
    CITIZEN_LEAD_IN, GROUPED_DIGITS, ID_MARKER, NUMBERING_SYMBOL, OFFICE_CLAUSE, RECORD_NAME,
};
use super::TextMatcher;

/// Matcher for `Rank NAME, C.I N° number, Title`.
///
/// Example: `Mayor General JHONNY ALBERTO MORALES RODRÍGUEZ, C.I Nº 12.685.318,
/// Presidente Ejecutivo.` All four fields must be present in that order.
#[derive(Debug, Clone)]
pub struct RankTitleMatcher {
    pattern: Regex,
    context_radius: usize,
}

impl RankTitleMatcher {
    pub fn new(config: &RankTitleConfig) -> Result<Self, ConfigError> {
        let ranks = vocabulary_alternation("rank_title.ranks", &config.ranks)?;
        let pattern = compile(
            "rank_title",
            &format!(
                r"(?i)({ranks})\s+({name})\s*,\s*{marker}\s*{numbering}({digits})\s*,\s*([^\n,]+)",
                ranks = ranks,
                name = RECORD_NAME,
                marker = ID_MARKER,
                numbering = NUMBERING_SYMBOL,
                digits = GROUPED_DIGITS,
            ),
        )?;
        Ok(Self {
            pattern,
            context_radius: config.context_radius,
        })
    }

    pub fn find_rank_name_id_title(&self, text: &str) -> Vec<RankTitleHit> {
        let mut results = Vec::new();

        for caps in self.pattern.captures_iter(text) {
            let full_match = caps.get(0).unwrap();
            let title = caps[4].trim().trim_end_matches(['.', ';', ':']).trim();
            if title.is_empty() {
                continue;
            }

            let (context_before, context_after) = ContextWindow::around(
                text,
                full_match.start(),
                full_match.end(),
                self.context_radius,
            )
            .trimmed();

            results.push(RankTitleHit {
                rank: collapse_whitespace(&caps[1]),
                full_name: collapse_whitespace(&caps[2]),
                id_number: digits_only(&caps[3]),
                title: title.to_string(),
                span: Span::new(full_match.start(), full_match.end()),
                context_before,
                context_after,
            });
        }

        results
    }
}

impl TextMatcher for RankTitleMatcher {
    type Output = RankTitleHit;

    fn find_all(&self, text: &str) -> Vec<Self::Output> {
        self.find_rank_name_id_title(text)
    }
}

/// Matcher for `En relación a la ciudadana/o RANK NAME, titular de la cédula
/// de identidad [NO] V-13.532.261 [... en su carácter de (OFFICE)]`.
///
/// The office clause is optional and may follow after line breaks. It must
/// start within `office_search_chars` characters of the identity number.
/// The search stops at the next record's lead-in so one record never takes
/// another's office.
#[derive(Debug, Clone)]
pub struct CitizenRankMatcher {
    pattern: Regex,
    context_radius: usize,
    office_search_chars: usize,
}

impl CitizenRankMatcher {
    /// Build the matcher; `letters` is the identity letter set shared with
    /// [`super::IdentityMatcher`].
    pub fn new(config: &CitizenRankConfig, letters: &str) -> Result<Self, ConfigError> {
        let ranks = vocabulary_alternation("citizen_rank.ranks", &config.ranks)?;
        let letters = letter_class(letters)?;
        let pattern = compile(
            "citizen_rank",
            &format!(
                r"(?i){lead_in}\s+({ranks})\s+({name})\s*,\s*titular\s+de\s+la\s+c[ée]dula\s+de\s+identidad\s*(?:N[oº°]\.?\s*)?({letters})\s*-?\s*({digits})",
                lead_in = CITIZEN_LEAD_IN.as_str().trim_start_matches("(?i)"),
                ranks = ranks,
                name = RECORD_NAME,
                letters = letters,
                digits = GROUPED_DIGITS,
            ),
        )?;
        Ok(Self {
            pattern,
            context_radius: config.context_radius,
            office_search_chars: config.office_search_chars,
        })
    }

    pub fn find_citizen_rank_name_id(&self, text: &str) -> Vec<CitizenRankHit> {
        let mut results = Vec::new();

        for caps in self.pattern.captures_iter(text) {
            let full_match = caps.get(0).unwrap();
            let start = full_match.start();
            let mut end = full_match.end();

            let office = self.find_office(text, end).map(|(office, clause_end)| {
                end = clause_end;
                office
            });

            let (context_before, context_after) =
                ContextWindow::around(text, start, end, self.context_radius).trimmed();

            results.push(CitizenRankHit {
                rank: collapse_whitespace(&caps[1]),
                full_name: collapse_whitespace(&caps[2]),
                id_letter: caps[3]
                    .chars()
                    .next()
                    .map(|c| c.to_ascii_uppercase())
                    .unwrap_or('V'),
                id_number: digits_only(&caps[4]),
                office,
                span: Span::new(start, end),
                context_before,
                context_after,
            });
        }

        results
    }

    /// Look for the office clause after byte offset `from`; returns the office
    /// and the byte offset where the clause ends.
    ///
    /// The clause must start within `office_search_chars` characters of
    /// `from` but may end past that bound.
    fn find_office(&self, text: &str, from: usize) -> Option<(String, usize)> {
        let mut region = &text[from..];
        if let Some(next_record) = CITIZEN_LEAD_IN.find(region) {
            region = &region[..next_record.start()];
        }
        let start_bound = context::after(text, from, self.office_search_chars).len();

        let caps = OFFICE_CLAUSE.captures(region)?;
        if caps.get(0).unwrap().start() > start_bound {
            return None;
        }
        let office = collapse_whitespace(&caps[1]);
        if office.is_empty() {
            return None;
        }
        Some((office, from + caps.get(0).unwrap().end()))
    }
}

impl TextMatcher for CitizenRankMatcher {
    type Output = CitizenRankHit;

    fn find_all(&self, text: &str) -> Vec<Self::Output> {
        self.find_citizen_rank_name_id(text)
    }
}
