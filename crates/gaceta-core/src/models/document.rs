//! Gazette document model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Page separator emitted by OCR engines between pages of plain-text output.
pub const PAGE_SEPARATOR: char = '\u{000c}';

/// One OCR'd page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageText {
    /// 1-based page number, `None` when pagination is unknown.
    pub page_number: Option<u32>,
    /// OCR text of the page.
    pub text: String,
}

impl PageText {
    pub fn new(page_number: Option<u32>, text: impl Into<String>) -> Self {
        Self {
            page_number,
            text: text.into(),
        }
    }
}

/// One scanned gazette issue.
///
/// When `pages` is non-empty, `full_text` is informational only and is not
/// scanned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    /// Source file name.
    pub filename: String,
    /// Gazette issue number.
    #[serde(alias = "numero_gaceta")]
    pub bulletin_number: String,
    /// Issue date, `DD/MM/YYYY` expected but not validated.
    #[serde(alias = "fecha")]
    pub date: String,
    /// Issue year.
    pub year: Option<i32>,
    /// Ordered OCR pages.
    pub pages: Vec<PageText>,
    /// Concatenated document text.
    pub full_text: String,
}

impl Document {
    /// Create an empty document for the given file name, filling bulletin
    /// metadata from the name when it follows the gazette naming scheme.
    pub fn new(filename: impl Into<String>) -> Self {
        let filename = filename.into();
        let mut document = Self {
            filename: filename.clone(),
            ..Default::default()
        };
        if let Some(meta) = BulletinMeta::from_filename(&filename) {
            document.bulletin_number = meta.number;
            document.date = meta.date;
            document.year = Some(meta.year);
        }
        document
    }

    /// Build a document from raw OCR text.
    ///
    /// Form feeds split pages (numbered from 1). Text without a form feed
    /// has unknown pagination and is kept as `full_text` only.
    pub fn from_text(filename: impl Into<String>, text: &str) -> Self {
        let mut document = Self::new(filename);

        if text.contains(PAGE_SEPARATOR) {
            document.pages = text
                .split(PAGE_SEPARATOR)
                .enumerate()
                .map(|(i, page)| PageText::new(Some(i as u32 + 1), page.trim()))
                .collect();
            // Trailing separator leaves an empty last page
            while document.pages.last().is_some_and(|p| p.text.is_empty()) {
                document.pages.pop();
            }
            document.full_text = document
                .pages
                .iter()
                .map(|p| p.text.as_str())
                .collect::<Vec<_>>()
                .join("\n\n");
        } else {
            document.full_text = text.to_string();
        }

        document
    }

    /// Add a page.
    pub fn with_page(mut self, page_number: Option<u32>, text: impl Into<String>) -> Self {
        self.pages.push(PageText::new(page_number, text));
        self
    }

    /// Set the whole-document text.
    pub fn with_full_text(mut self, text: impl Into<String>) -> Self {
        self.full_text = text.into();
        self
    }
}

/// Metadata encoded in a gazette file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulletinMeta {
    /// Gazette issue number.
    pub number: String,
    /// Issue date as `DD/MM/YYYY`.
    pub date: String,
    /// Issue year.
    pub year: i32,
    /// Issue type, e.g. `ORDINARIA` or `EXTRAORDINARIA`.
    pub issue_type: String,
}

impl BulletinMeta {
    /// Parse `<number>-<YYYY>-<MM>-<DD>-<TYPE>[.ext]`,
    /// e.g. `43287-2026-01-02-ORDINARIA.pdf`.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let name = std::path::Path::new(filename).file_stem()?.to_str()?;
        let parts: Vec<&str> = name.split('-').collect();
        if parts.len() < 5 || parts[0].is_empty() {
            return None;
        }

        let year: i32 = parts[1].parse().ok()?;
        let month: u32 = parts[2].parse().ok()?;
        let day: u32 = parts[3].parse().ok()?;
        let date = NaiveDate::from_ymd_opt(year, month, day)?;

        Some(Self {
            number: parts[0].to_string(),
            date: date.format("%d/%m/%Y").to_string(),
            year,
            issue_type: parts[4..].join("-"),
        })
    }
}
