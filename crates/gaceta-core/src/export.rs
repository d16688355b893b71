//! Flattening of scan hits into fixed-column export rows.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::extract::context::{head, tail};
use crate::extract::NameResolver;
use crate::models::config::ScanConfig;
use crate::models::hit::{Hit, ScanHit};

/// Export column headers, in order.
pub const COLUMNS: [&str; 9] = [
    "Names",
    "Surnames",
    "IdentityNumber",
    "Rank",
    "Appointment",
    "BulletinNumber",
    "Date",
    "Page",
    "Context",
];

/// Minimum characters kept on each side of the marker in the Context column.
const MIN_CONTEXT_SIDE: usize = 100;

/// One tabular row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    #[serde(rename = "Names")]
    pub names: String,
    #[serde(rename = "Surnames")]
    pub surnames: String,
    #[serde(rename = "IdentityNumber")]
    pub identity_number: String,
    #[serde(rename = "Rank")]
    pub rank: String,
    #[serde(rename = "Appointment")]
    pub appointment: String,
    #[serde(rename = "BulletinNumber")]
    pub bulletin_number: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Page")]
    pub page: String,
    #[serde(rename = "Context")]
    pub context: String,
}

/// Split a full name into given names and surnames.
///
/// One word is a given name; two are name and surname; three are one name
/// and two surnames; four or more are two names and the rest surnames.
pub fn split_full_name(full_name: &str) -> (String, String) {
    let words: Vec<&str> = full_name.split_whitespace().collect();
    let given = match words.len() {
        0 => return (String::new(), String::new()),
        1..=3 => 1,
        _ => 2,
    };
    (words[..given].join(" "), words[given..].join(" "))
}

/// Builds export rows from scan hits.
#[derive(Debug, Clone)]
pub struct ExportBuilder {
    resolver: NameResolver,
    name_radius: usize,
    context_side: usize,
    military_two_words_only: bool,
}

impl ExportBuilder {
    pub fn new(config: &ScanConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            resolver: NameResolver::new(&config.names)?,
            name_radius: config.identity.name_radius,
            context_side: (config.export.context_chars / 2).max(MIN_CONTEXT_SIDE),
            military_two_words_only: config.export.military_two_words_only,
        })
    }

    /// Set the two-word filter for military mentions.
    pub fn with_military_two_words_only(mut self, enabled: bool) -> Self {
        self.military_two_words_only = enabled;
        self
    }

    /// Rows for every exportable hit, in input order.
    pub fn build_rows(&self, hits: &[ScanHit]) -> Vec<ExportRow> {
        hits.iter().filter_map(|hit| self.build_row(hit)).collect()
    }

    /// Row for one hit; `None` when the hit is filtered out of the export.
    pub fn build_row(&self, scan_hit: &ScanHit) -> Option<ExportRow> {
        let mut row = match &scan_hit.hit {
            Hit::Identity(hit) => {
                let (names, surnames) = if hit.is_unknown() {
                    (String::new(), String::new())
                } else {
                    split_full_name(&hit.resolved_name)
                };
                ExportRow {
                    names,
                    surnames,
                    identity_number: hit.normalized_id.clone(),
                    ..Default::default()
                }
            }
            Hit::Military(hit) => {
                let term = hit.term.split_whitespace().collect::<Vec<_>>().join(" ");
                if self.military_two_words_only && term.split(' ').count() != 2 {
                    return None;
                }
                let name = self
                    .resolver
                    .resolve_name(
                        tail(&hit.context_before, self.name_radius),
                        head(&hit.context_after, self.name_radius),
                    )
                    .unwrap_or_default();
                let (names, surnames) = split_full_name(&name);
                ExportRow {
                    names,
                    surnames,
                    rank: term.clone(),
                    appointment: term,
                    ..Default::default()
                }
            }
            Hit::RankTitle(hit) => {
                let (names, surnames) = split_full_name(&hit.full_name);
                ExportRow {
                    names,
                    surnames,
                    identity_number: hit.id_number.clone(),
                    rank: hit.rank.clone(),
                    appointment: hit.title.clone(),
                    ..Default::default()
                }
            }
            Hit::CitizenRank(hit) => {
                let (names, surnames) = split_full_name(&hit.full_name);
                ExportRow {
                    names,
                    surnames,
                    identity_number: hit.full_id(),
                    rank: hit.rank.clone(),
                    appointment: hit.office.clone().unwrap_or_default(),
                    ..Default::default()
                }
            }
        };

        row.bulletin_number = scan_hit.document.bulletin_number.clone();
        row.date = scan_hit.document.date.clone();
        row.page = scan_hit
            .page_number
            .map(|p| p.to_string())
            .unwrap_or_default();
        row.context = self.context(&scan_hit.hit);
        Some(row)
    }

    fn context(&self, hit: &Hit) -> String {
        format!(
            "{} {} {}",
            tail(hit.context_before(), self.context_side),
            hit.marker(),
            head(hit.context_after(), self.context_side)
        )
        .trim()
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::Document;
    use crate::scan::{MatchKind, Scanner};
    use pretty_assertions::assert_eq;

    fn scan(text: &str, kind: MatchKind) -> Vec<ScanHit> {
        let document = Document::new("43287-2026-01-02-ORDINARIA.txt").with_page(Some(7), text);
        Scanner::new(&ScanConfig::default())
            .unwrap()
            .scan_all(&[document], kind)
    }

    fn builder() -> ExportBuilder {
        ExportBuilder::new(&ScanConfig::default()).unwrap()
    }

    #[test]
    fn test_split_full_name() {
        let split = |s: &str| split_full_name(s);
        assert_eq!(split(""), (String::new(), String::new()));
        assert_eq!(split("ANA"), ("ANA".to_string(), String::new()));
        assert_eq!(split("Ana Ríos"), ("Ana".to_string(), "Ríos".to_string()));
        assert_eq!(
            split("Ana Ríos Soto"),
            ("Ana".to_string(), "Ríos Soto".to_string())
        );
        assert_eq!(
            split("JHONNY ALBERTO MORALES RODRÍGUEZ"),
            ("JHONNY ALBERTO".to_string(), "MORALES RODRÍGUEZ".to_string())
        );
    }

    #[test]
    fn test_rank_title_row() {
        let hits = scan(
            "Mayor General JHONNY ALBERTO MORALES RODRÍGUEZ, C.I Nº 12.685.318, Presidente Ejecutivo.",
            MatchKind::RankTitle,
        );
        let rows = builder().build_rows(&hits);

        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0],
            ExportRow {
                names: "JHONNY ALBERTO".to_string(),
                surnames: "MORALES RODRÍGUEZ".to_string(),
                identity_number: "12685318".to_string(),
                rank: "Mayor General".to_string(),
                appointment: "Presidente Ejecutivo".to_string(),
                bulletin_number: "43287".to_string(),
                date: "02/01/2026".to_string(),
                page: "7".to_string(),
                context: "[Mayor General JHONNY ALBERTO MORALES RODRÍGUEZ, C.I 12685318, \
                          Presidente Ejecutivo]"
                    .to_string(),
            }
        );
    }

    #[test]
    fn test_identity_row_with_unknown_name() {
        let hits = scan("titular de la cédula V-12345678", MatchKind::Identity);
        let rows = builder().build_rows(&hits);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].names, "");
        assert_eq!(rows[0].surnames, "");
        assert_eq!(rows[0].identity_number, "V-12345678");
        assert_eq!(rows[0].rank, "");
        assert_eq!(rows[0].context, "titular de la cédula [V-12345678]");
    }

    #[test]
    fn test_military_rows_two_words_only() {
        let text = "el Teniente Coronel PEDRO LUIS SOTO, adscrito a la FANB";
        let hits = scan(text, MatchKind::Military);
        assert_eq!(hits.len(), 2);

        let rows = builder().build_rows(&hits);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].rank, "Teniente Coronel");
        assert_eq!(rows[0].appointment, "Teniente Coronel");
        assert_eq!(rows[0].names, "PEDRO");
        assert_eq!(rows[0].surnames, "LUIS SOTO");

        let rows = builder().with_military_two_words_only(false).build_rows(&hits);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].rank, "FANB");
    }

    #[test]
    fn test_citizen_rank_row() {
        let text = "En relación a la ciudadana Capitán ROSA ELENA DÍAZ, titular de la cédula de \
                    identidad V-10.000.001 en su carácter de (JEFA DE DIVISIÓN)";
        let hits = scan(text, MatchKind::CitizenRank);
        let rows = builder().build_rows(&hits);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].names, "ROSA");
        assert_eq!(rows[0].surnames, "ELENA DÍAZ");
        assert_eq!(rows[0].identity_number, "V-10000001");
        assert_eq!(rows[0].rank, "Capitán");
        assert_eq!(rows[0].appointment, "JEFA DE DIVISIÓN");
    }

    #[test]
    fn test_context_is_bounded() {
        let config = ScanConfig::default();
        let builder = ExportBuilder::new(&config).unwrap();
        let padding = "palabra ".repeat(200);
        let text = format!("{}titular de la cédula V-12345678 {}", padding, padding);
        let rows = builder.build_rows(&scan(&text, MatchKind::Identity));

        let marker = "[V-12345678]";
        let context = &rows[0].context;
        let (before, after) = context.split_once(marker).unwrap();
        assert!(before.chars().count() <= 401);
        assert!(after.chars().count() <= 401);
    }
}
