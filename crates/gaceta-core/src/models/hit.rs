//! Hit records produced by the matchers and the scan orchestrator.

use serde::{Deserialize, Serialize};

/// Placeholder stored when no plausible name is found near an identity number.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Byte range of a match in the scanned text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// An identity-number-like token that passed the plausibility filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityHit {
    /// Text exactly as matched.
    pub raw_match: String,
    /// Canonical `LETTER-DIGITS` form.
    pub normalized_id: String,
    /// Uppercase identity letter.
    pub letter: char,
    /// Digits only.
    pub digits: String,
    /// Nearest plausible person name, or [`UNKNOWN_NAME`].
    pub resolved_name: String,
    pub span: Span,
    pub context_before: String,
    pub context_after: String,
}

impl IdentityHit {
    /// Whether name resolution failed for this hit.
    pub fn is_unknown(&self) -> bool {
        self.resolved_name == UNKNOWN_NAME
    }
}

/// `Rank NAME, C.I N° number, Title`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankTitleHit {
    pub rank: String,
    pub full_name: String,
    /// Digits only.
    pub id_number: String,
    pub title: String,
    pub span: Span,
    pub context_before: String,
    pub context_after: String,
}

/// `En relación a la ciudadana/o RANK NAME, titular de la cédula de identidad
/// V-number [en su carácter de (OFFICE)]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitizenRankHit {
    pub rank: String,
    pub full_name: String,
    /// Uppercase identity letter.
    pub id_letter: char,
    /// Digits only.
    pub id_number: String,
    /// Office from the "en su carácter de (...)" clause, when present.
    pub office: Option<String>,
    pub span: Span,
    pub context_before: String,
    pub context_after: String,
}

impl CitizenRankHit {
    /// Canonical `LETTER-DIGITS` identity.
    pub fn full_id(&self) -> String {
        format!("{}-{}", self.id_letter, self.id_number)
    }
}

/// A mention of a military rank, unit or institution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilitaryHit {
    /// Term as written in the text.
    pub term: String,
    pub span: Span,
    pub context_before: String,
    pub context_after: String,
}

/// Any hit, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Hit {
    Identity(IdentityHit),
    Military(MilitaryHit),
    RankTitle(RankTitleHit),
    CitizenRank(CitizenRankHit),
}

impl Hit {
    pub fn span(&self) -> Span {
        match self {
            Hit::Identity(h) => h.span,
            Hit::Military(h) => h.span,
            Hit::RankTitle(h) => h.span,
            Hit::CitizenRank(h) => h.span,
        }
    }

    pub fn context_before(&self) -> &str {
        match self {
            Hit::Identity(h) => &h.context_before,
            Hit::Military(h) => &h.context_before,
            Hit::RankTitle(h) => &h.context_before,
            Hit::CitizenRank(h) => &h.context_before,
        }
    }

    pub fn context_after(&self) -> &str {
        match self {
            Hit::Identity(h) => &h.context_after,
            Hit::Military(h) => &h.context_after,
            Hit::RankTitle(h) => &h.context_after,
            Hit::CitizenRank(h) => &h.context_after,
        }
    }

    /// Bracketed text shown between the contexts of a snippet.
    pub fn marker(&self) -> String {
        match self {
            Hit::Identity(h) => format!("[{}]", h.raw_match),
            Hit::Military(h) => format!("<<{}>>", h.term),
            Hit::RankTitle(h) => format!(
                "[{} {}, C.I {}, {}]",
                h.rank, h.full_name, h.id_number, h.title
            ),
            Hit::CitizenRank(h) => match &h.office {
                Some(office) => format!(
                    "[{} {}, C.I {}, ({})]",
                    h.rank,
                    h.full_name,
                    h.full_id(),
                    office
                ),
                None => format!("[{} {}, C.I {}]", h.rank, h.full_name, h.full_id()),
            },
        }
    }

    /// Short kind label.
    pub fn kind(&self) -> &'static str {
        match self {
            Hit::Identity(_) => "identity",
            Hit::Military(_) => "military",
            Hit::RankTitle(_) => "rank_title",
            Hit::CitizenRank(_) => "citizen_rank",
        }
    }
}

/// Document metadata attached to every scan hit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentRef {
    pub filename: String,
    pub bulletin_number: String,
    pub date: String,
    pub year: Option<i32>,
}

/// A hit enriched with document/page metadata and a display snippet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanHit {
    pub document: DocumentRef,
    pub page_number: Option<u32>,
    pub snippet: String,
    pub hit: Hit,
}
