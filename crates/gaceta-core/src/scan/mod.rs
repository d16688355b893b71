//! Scan orchestration over documents and pages.

mod summary;

use std::fmt;
use std::str::FromStr;

use tracing::{debug, info};

use crate::error::ConfigError;
use crate::extract::context::{head, tail};
use crate::extract::{
    CitizenRankMatcher, IdentityMatcher, MilitaryMatcher, NameResolver, RankTitleMatcher,
    TextMatcher,
};
use crate::models::config::ScanConfig;
use crate::models::document::Document;
use crate::models::hit::{DocumentRef, Hit, ScanHit};

pub use summary::ScanSummary;

/// Which matcher(s) a scan runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MatchKind {
    Identity,
    Military,
    RankTitle,
    CitizenRank,
    #[default]
    All,
}

impl MatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchKind::Identity => "identity",
            MatchKind::Military => "military",
            MatchKind::RankTitle => "rank-title",
            MatchKind::CitizenRank => "citizen-rank",
            MatchKind::All => "all",
        }
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "identity" => Ok(MatchKind::Identity),
            "military" => Ok(MatchKind::Military),
            "rank-title" => Ok(MatchKind::RankTitle),
            "citizen-rank" => Ok(MatchKind::CitizenRank),
            "all" => Ok(MatchKind::All),
            other => Err(format!("unknown match kind: {}", other)),
        }
    }
}

/// Runs the matchers over documents and attaches document metadata.
///
/// Built once from a [`ScanConfig`]; every pattern is compiled here, so a
/// constructed scanner never fails.
#[derive(Debug, Clone)]
pub struct Scanner {
    identity: IdentityMatcher,
    military: MilitaryMatcher,
    rank_title: RankTitleMatcher,
    citizen_rank: CitizenRankMatcher,
    snippet_chars: usize,
}

impl Scanner {
    /// Build every matcher from the configuration.
    pub fn new(config: &ScanConfig) -> Result<Self, ConfigError> {
        let resolver = NameResolver::new(&config.names)?;
        Ok(Self {
            identity: IdentityMatcher::new(&config.identity, resolver)?,
            military: MilitaryMatcher::new(&config.military)?,
            rank_title: RankTitleMatcher::new(&config.rank_title)?,
            citizen_rank: CitizenRankMatcher::new(&config.citizen_rank, &config.identity.letters)?,
            snippet_chars: config.snippet_chars,
        })
    }

    /// Set snippet length.
    pub fn with_snippet_chars(mut self, chars: usize) -> Self {
        self.snippet_chars = chars;
        self
    }

    /// Run the selected matcher(s) over one text.
    ///
    /// With [`MatchKind::All`] the hits of every matcher are merged and
    /// stably ordered by span start.
    pub fn scan_text(&self, text: &str, kind: MatchKind) -> Vec<Hit> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        match kind {
            MatchKind::Identity => self.identity.find_all(text).into_iter().map(Hit::Identity).collect(),
            MatchKind::Military => self.military.find_all(text).into_iter().map(Hit::Military).collect(),
            MatchKind::RankTitle => self
                .rank_title
                .find_all(text)
                .into_iter()
                .map(Hit::RankTitle)
                .collect(),
            MatchKind::CitizenRank => self
                .citizen_rank
                .find_all(text)
                .into_iter()
                .map(Hit::CitizenRank)
                .collect(),
            MatchKind::All => {
                let mut hits: Vec<Hit> = [
                    MatchKind::Identity,
                    MatchKind::RankTitle,
                    MatchKind::CitizenRank,
                    MatchKind::Military,
                ]
                .into_iter()
                .flat_map(|kind| self.scan_text(text, kind))
                .collect();
                hits.sort_by_key(|hit| hit.span().start);
                hits
            }
        }
    }

    /// Scan one document.
    ///
    /// Pages are scanned when present; otherwise `full_text` is scanned once
    /// with no page number. Never both.
    pub fn scan_document(&self, document: &Document, kind: MatchKind) -> Vec<ScanHit> {
        let doc_ref = DocumentRef {
            filename: document.filename.clone(),
            bulletin_number: document.bulletin_number.clone(),
            date: document.date.clone(),
            year: document.year,
        };

        let mut results = Vec::new();
        if document.pages.is_empty() {
            for hit in self.scan_text(&document.full_text, kind) {
                results.push(self.enrich(&doc_ref, None, hit));
            }
        } else {
            for page in &document.pages {
                let hits = self.scan_text(&page.text, kind);
                debug!(
                    "{} page {:?}: {} hits",
                    document.filename,
                    page.page_number,
                    hits.len()
                );
                for hit in hits {
                    results.push(self.enrich(&doc_ref, page.page_number, hit));
                }
            }
        }

        debug!("{}: {} {} hits", document.filename, results.len(), kind);
        results
    }

    /// Scan every document, in order.
    pub fn scan_all(&self, documents: &[Document], kind: MatchKind) -> Vec<ScanHit> {
        let hits: Vec<ScanHit> = documents
            .iter()
            .flat_map(|document| self.scan_document(document, kind))
            .collect();

        info!("Scanned {} documents: {} {} hits", documents.len(), hits.len(), kind);
        hits
    }

    fn enrich(&self, document: &DocumentRef, page_number: Option<u32>, hit: Hit) -> ScanHit {
        ScanHit {
            document: document.clone(),
            page_number,
            snippet: self.snippet(&hit),
            hit,
        }
    }

    /// Short display text: the end of the before context, the marker and
    /// the start of the after context.
    pub fn snippet(&self, hit: &Hit) -> String {
        format!(
            "{} {} {}",
            tail(hit.context_before(), self.snippet_chars),
            hit.marker(),
            head(hit.context_after(), self.snippet_chars)
        )
        .trim()
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CITIZEN_TEXT: &str = "...el ciudadano JUAN CARLOS PÉREZ GÓMEZ, titular de la cédula \
                                V-12345678, en su carácter de Director...";

    fn scanner() -> Scanner {
        Scanner::new(&ScanConfig::default()).unwrap()
    }

    #[test]
    fn test_full_text_scanned_once_without_page() {
        let document = Document::new("43287-2026-01-02-ORDINARIA.txt").with_full_text(CITIZEN_TEXT);
        let hits = scanner().scan_all(&[document], MatchKind::Identity);

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].page_number, None);
        assert_eq!(hits[0].document.bulletin_number, "43287");
        assert_eq!(hits[0].document.date, "02/01/2026");
        assert_eq!(hits[0].document.year, Some(2026));
        match &hits[0].hit {
            Hit::Identity(hit) => {
                assert_eq!(hit.normalized_id, "V-12345678");
                assert_eq!(hit.resolved_name, "JUAN CARLOS PÉREZ GÓMEZ");
            }
            other => panic!("unexpected hit: {:?}", other),
        }
    }

    #[test]
    fn test_pages_take_precedence_over_full_text() {
        let document = Document::new("gaceta.txt")
            .with_page(Some(3), CITIZEN_TEXT)
            .with_page(Some(4), "")
            .with_full_text(CITIZEN_TEXT);
        let hits = scanner().scan_all(&[document], MatchKind::Identity);

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].page_number, Some(3));
    }

    #[test]
    fn test_empty_document_yields_nothing() {
        let hits = scanner().scan_all(&[Document::new("empty.txt")], MatchKind::All);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_all_kinds_are_ordered_by_position() {
        let text = "El Coronel LUIS SOTO, C.I Nº 9.876.543, Director General, fue designado. \
                    El ciudadano PEDRO PÉREZ, titular de la cédula V-12.345.678.";
        let document = Document::new("a.txt").with_page(Some(1), text);
        let hits = scanner().scan_all(&[document], MatchKind::All);

        let kinds: Vec<&str> = hits.iter().map(|h| h.hit.kind()).collect();
        assert_eq!(kinds, vec!["rank_title", "military", "identity"]);
        assert!(hits.windows(2).all(|w| w[0].hit.span().start <= w[1].hit.span().start));
    }

    #[test]
    fn test_output_follows_document_then_page_order() {
        let first = Document::new("1.txt")
            .with_page(Some(1), "Coronel")
            .with_page(Some(2), "Capitán y Sargento");
        let second = Document::new("2.txt").with_full_text("la FANB");
        let hits = scanner().scan_all(&[first, second], MatchKind::Military);

        let order: Vec<(&str, Option<u32>)> = hits
            .iter()
            .map(|h| (h.document.filename.as_str(), h.page_number))
            .collect();
        assert_eq!(
            order,
            vec![
                ("1.txt", Some(1)),
                ("1.txt", Some(2)),
                ("1.txt", Some(2)),
                ("2.txt", None),
            ]
        );
    }

    #[test]
    fn test_snippet_format() {
        let document = Document::new("a.txt").with_page(Some(1), "Se asciende al Coronel ANA RÍOS.");
        let scanner = scanner().with_snippet_chars(10);
        let hits = scanner.scan_all(&[document], MatchKind::Military);

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].snippet, "sciende al <<Coronel>> ANA RÍOS.");
    }

    #[test]
    fn test_match_kind_parsing() {
        assert_eq!("rank-title".parse::<MatchKind>().unwrap(), MatchKind::RankTitle);
        assert_eq!("CITIZEN_RANK".parse::<MatchKind>().unwrap(), MatchKind::CitizenRank);
        assert_eq!(MatchKind::default(), MatchKind::All);
        assert!("names".parse::<MatchKind>().is_err());
    }

    #[test]
    fn test_invalid_config_fails_at_construction() {
        let mut config = ScanConfig::default();
        config.rank_title.ranks.clear();
        assert!(matches!(
            Scanner::new(&config),
            Err(ConfigError::EmptyVocabulary { field: "rank_title.ranks" })
        ));
    }
}
