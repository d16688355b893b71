use serde::Serialize;

use crate::models::document::Document;
use crate::models::hit::{Hit, ScanHit};

/// Totals for one scan run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    pub documents: usize,
    /// Pages scanned; a document without pages counts once for its full text.
    pub pages: usize,
    pub identity: usize,
    pub unknown_names: usize,
    pub military: usize,
    pub rank_title: usize,
    pub citizen_rank: usize,
}

impl ScanSummary {
    /// Count documents, scanned pages and hits per kind.
    pub fn tally(documents: &[Document], hits: &[ScanHit]) -> Self {
        let mut summary = Self {
            documents: documents.len(),
            pages: documents
                .iter()
                .map(|d| match d.pages.len() {
                    0 if d.full_text.trim().is_empty() => 0,
                    0 => 1,
                    n => n,
                })
                .sum(),
            ..Default::default()
        };

        for scan_hit in hits {
            match &scan_hit.hit {
                Hit::Identity(hit) => {
                    summary.identity += 1;
                    if hit.is_unknown() {
                        summary.unknown_names += 1;
                    }
                }
                Hit::Military(_) => summary.military += 1,
                Hit::RankTitle(_) => summary.rank_title += 1,
                Hit::CitizenRank(_) => summary.citizen_rank += 1,
            }
        }

        summary
    }

    pub fn total_hits(&self) -> usize {
        self.identity + self.military + self.rank_title + self.citizen_rank
    }
}
