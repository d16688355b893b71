//! Core library for Venezuelan gazette OCR text scanning.
//!
//! This crate provides:
//! - Identity number (cédula / RIF) extraction with keyword gating
//! - Heuristic person-name resolution around matches
//! - Military mention, rank/title and citizen/office record matchers
//! - Scan orchestration over documents and pages
//! - Document loading and fixed-column export rows

pub mod error;
pub mod export;
pub mod extract;
pub mod models;
pub mod scan;
pub mod source;

pub use error::{ConfigError, GacetaError, Result, SourceError};
pub use export::{split_full_name, ExportBuilder, ExportRow, COLUMNS};
pub use extract::{
    CitizenRankMatcher, IdentityMatcher, MilitaryMatcher, NameResolver, RankTitleMatcher,
    TextMatcher,
};
pub use models::{Document, Hit, PageText, ScanConfig, ScanHit, UNKNOWN_NAME};
pub use scan::{MatchKind, ScanSummary, Scanner};
pub use source::{open_source, DocumentSource, JsonSource, TextSource};
