//! Loading documents from disk.
//!
//! Supported formats:
//! - `.json`: an array of documents (or a single document object)
//! - `.jsonl`: one document per line, blank lines skipped
//! - `.txt`: raw OCR text, pages split on form feeds

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, SourceError};
use crate::models::document::{BulletinMeta, Document};

/// Trait for document sources.
pub trait DocumentSource {
    /// Load documents in source order, at most `limit` when given.
    fn documents(&self, limit: Option<usize>) -> Result<Vec<Document>>;

    /// Number of documents the source holds.
    fn count(&self) -> Result<usize> {
        Ok(self.documents(None)?.len())
    }
}

/// Documents serialized as JSON or JSON Lines.
#[derive(Debug, Clone)]
pub struct JsonSource {
    path: PathBuf,
}

impl JsonSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn is_lines(&self) -> bool {
        extension(&self.path).as_deref() == Some("jsonl")
    }

    fn malformed(&self, reason: impl ToString) -> SourceError {
        SourceError::Malformed {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }

    fn parse_lines(&self, content: &str, limit: Option<usize>) -> Result<Vec<Document>> {
        let mut documents = Vec::new();
        for (index, line) in content.lines().enumerate() {
            if limit.is_some_and(|n| documents.len() >= n) {
                break;
            }
            if line.trim().is_empty() {
                continue;
            }
            let document: Document = serde_json::from_str(line)
                .map_err(|e| self.malformed(format!("line {}: {}", index + 1, e)))?;
            documents.push(document);
        }
        Ok(documents)
    }

    fn parse_json(&self, content: &str) -> Result<Vec<Document>> {
        let value: serde_json::Value =
            serde_json::from_str(content).map_err(|e| self.malformed(e))?;
        let documents: std::result::Result<Vec<Document>, serde_json::Error> = match value {
            serde_json::Value::Array(_) => serde_json::from_value(value),
            serde_json::Value::Object(_) => {
                serde_json::from_value::<Document>(value).map(|d| vec![d])
            }
            _ => return Err(self.malformed("expected an array of documents").into()),
        };
        documents.map_err(|e| self.malformed(e).into())
    }
}

impl DocumentSource for JsonSource {
    fn documents(&self, limit: Option<usize>) -> Result<Vec<Document>> {
        let content = fs::read_to_string(&self.path)?;
        let mut documents = if self.is_lines() {
            self.parse_lines(&content, limit)?
        } else {
            self.parse_json(&content)?
        };
        if let Some(limit) = limit {
            documents.truncate(limit);
        }
        for document in &mut documents {
            fill_metadata(document, &self.path);
        }

        debug!("Loaded {} documents from {}", documents.len(), self.path.display());
        Ok(documents)
    }

    fn count(&self) -> Result<usize> {
        let content = fs::read_to_string(&self.path)?;
        if self.is_lines() {
            Ok(content.lines().filter(|line| !line.trim().is_empty()).count())
        } else {
            Ok(self.parse_json(&content)?.len())
        }
    }
}

/// Plain-text OCR output, one document per file.
#[derive(Debug, Clone, Default)]
pub struct TextSource {
    paths: Vec<PathBuf>,
}

impl TextSource {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    /// Add a file.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.paths.push(path.into());
        self
    }
}

impl DocumentSource for TextSource {
    fn documents(&self, limit: Option<usize>) -> Result<Vec<Document>> {
        let take = limit.unwrap_or(self.paths.len());
        self.paths
            .iter()
            .take(take)
            .map(|path| -> Result<Document> {
                let text = fs::read_to_string(path)?;
                Ok(Document::from_text(file_name(path), &text))
            })
            .collect()
    }

    fn count(&self) -> Result<usize> {
        Ok(self.paths.len())
    }
}

/// Open the source matching a file's extension.
pub fn open_source(path: &Path) -> Result<Box<dyn DocumentSource>> {
    match extension(path).as_deref() {
        Some("json") | Some("jsonl") => Ok(Box::new(JsonSource::new(path))),
        Some("txt") => Ok(Box::new(TextSource::default().with_path(path))),
        _ => Err(SourceError::UnsupportedFormat(path.to_path_buf()).into()),
    }
}

/// Whether `path` has an extension [`open_source`] understands.
pub fn is_supported(path: &Path) -> bool {
    matches!(extension(path).as_deref(), Some("json" | "jsonl" | "txt"))
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string()
}

/// Default a missing filename to the source file, and missing bulletin
/// metadata to what the filename encodes.
fn fill_metadata(document: &mut Document, source: &Path) {
    if document.filename.is_empty() {
        document.filename = file_name(source);
    }
    if document.bulletin_number.is_empty() || document.date.is_empty() {
        if let Some(meta) = BulletinMeta::from_filename(&document.filename) {
            if document.bulletin_number.is_empty() {
                document.bulletin_number = meta.number;
            }
            if document.date.is_empty() {
                document.date = meta.date;
            }
            document.year.get_or_insert(meta.year);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GacetaError;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_json_array() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "docs.json",
            r#"[
                {"filename": "43287-2026-01-02-ORDINARIA.pdf", "pages": [{"page_number": 1, "text": "uno"}]},
                {"filename": "b.pdf", "numero_gaceta": "6.100", "fecha": "05/03/2025", "year": 2025}
            ]"#,
        );
        let source = JsonSource::new(&path);
        let documents = source.documents(None).unwrap();

        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].bulletin_number, "43287");
        assert_eq!(documents[0].date, "02/01/2026");
        assert_eq!(documents[0].year, Some(2026));
        assert_eq!(documents[0].pages[0].text, "uno");
        assert_eq!(documents[1].bulletin_number, "6.100");
        assert_eq!(documents[1].date, "05/03/2025");
        assert_eq!(source.count().unwrap(), 2);
    }

    #[test]
    fn test_json_lines_with_limit() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "docs.jsonl",
            "{\"filename\": \"a.pdf\", \"full_text\": \"uno\"}\n\n\
             {\"filename\": \"b.pdf\"}\n\
             {\"filename\": \"c.pdf\"}\n",
        );
        let source = JsonSource::new(&path);

        let all = source.documents(None).unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].full_text, "uno");

        let limited = source.documents(Some(2)).unwrap();
        let names: Vec<&str> = limited.iter().map(|d| d.filename.as_str()).collect();
        assert_eq!(names, vec!["a.pdf", "b.pdf"]);
        assert_eq!(source.count().unwrap(), 3);
    }

    #[test]
    fn test_malformed_json_line() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "bad.jsonl", "{\"filename\": \"a.pdf\"}\nnot json\n");
        let err = JsonSource::new(&path).documents(None).unwrap_err();

        match err {
            GacetaError::Source(SourceError::Malformed { reason, .. }) => {
                assert!(reason.starts_with("line 2"))
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_text_source_splits_pages() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "43287-2026-01-02-ORDINARIA.txt",
            "primera página\u{000c}segunda página\u{000c}",
        );
        let documents = open_source(&path).unwrap().documents(None).unwrap();

        assert_eq!(documents.len(), 1);
        let document = &documents[0];
        assert_eq!(document.filename, "43287-2026-01-02-ORDINARIA.txt");
        assert_eq!(document.bulletin_number, "43287");
        assert_eq!(document.pages.len(), 2);
        assert_eq!(document.pages[1].page_number, Some(2));
        assert_eq!(document.pages[1].text, "segunda página");
    }

    #[test]
    fn test_unsupported_format() {
        let err = open_source(Path::new("gaceta.pdf")).err().unwrap();
        assert!(matches!(
            err,
            GacetaError::Source(SourceError::UnsupportedFormat(_))
        ));
        assert!(!is_supported(Path::new("gaceta.pdf")));
        assert!(is_supported(Path::new("GACETA.JSONL")));
    }
}
