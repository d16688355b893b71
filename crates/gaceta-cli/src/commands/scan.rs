//! Scan command - run the matchers over gazette documents.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Args, ValueEnum};
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, Level};

use gaceta_core::source::is_supported;
use gaceta_core::{
    open_source, Document, ExportBuilder, MatchKind, ScanConfig, ScanHit, ScanSummary, Scanner,
    COLUMNS,
};

use super::{default_config_path, load_config};

/// UTF-8 byte order mark; spreadsheet tools need it to read accented text.
const UTF8_BOM: &str = "\u{feff}";

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// Input file or glob pattern (.json, .jsonl, .txt)
    #[arg(required = true)]
    input: String,

    /// Kind of hits to look for: identity, military, rank-title, citizen-rank or all
    #[arg(short, long, default_value = "all")]
    kind: MatchKind,

    /// Maximum number of documents to scan
    #[arg(short, long)]
    limit: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Export every military mention to CSV, not only two-word terms
    #[arg(long)]
    all_military_terms: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON hit records
    Json,
    /// Fixed-column CSV export
    Csv,
    /// One line per hit
    Text,
}

pub async fn run(args: ScanArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = match config_path {
        Some(path) => ScanConfig::from_file(Path::new(path))?,
        None => load_config(&default_config_path())?,
    };
    let scanner = Scanner::new(&config)?;
    let kind = args.kind;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file() && is_supported(p))
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }
    debug!("Found {} input files", files.len());

    let documents = load_documents(&files, args.limit)?;

    let pb = ProgressBar::new(documents.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} documents")?
            .progress_chars("=>-"),
    );

    let mut hits = Vec::new();
    for document in &documents {
        hits.extend(scanner.scan_document(document, kind));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let content = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&hits)?,
        OutputFormat::Csv => {
            let builder = ExportBuilder::new(&config)?;
            let builder = if args.all_military_terms {
                builder.with_military_two_words_only(false)
            } else {
                builder
            };
            format_csv(&builder, &hits)?
        }
        OutputFormat::Text => format_text(&hits),
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &content)?;
            info!("Wrote {} hits to {}", hits.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                writeln!(stdout)?;
            }
        }
    }

    print_summary(&ScanSummary::tally(&documents, &hits), kind, start);

    Ok(())
}

/// Load documents from every file, in order, stopping at `limit`.
fn load_documents(files: &[PathBuf], limit: Option<usize>) -> anyhow::Result<Vec<Document>> {
    let mut documents = Vec::new();
    let mut skipped = 0;
    let report_skipped = tracing::enabled!(Level::INFO);

    for path in files {
        let source = open_source(path)?;
        let remaining = limit.map(|limit| limit.saturating_sub(documents.len()));
        if remaining == Some(0) {
            if !report_skipped {
                break;
            }
            skipped += source.count()?;
            continue;
        }

        let loaded = source.documents(remaining)?;
        if report_skipped && remaining == Some(loaded.len()) {
            skipped += source.count()?.saturating_sub(loaded.len());
        }
        documents.extend(loaded);
    }

    if skipped > 0 {
        info!("Document limit reached, skipped {} documents", skipped);
    }
    Ok(documents)
}

fn format_csv(builder: &ExportBuilder, hits: &[ScanHit]) -> anyhow::Result<String> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(vec![]);

    wtr.write_record(COLUMNS)?;
    for row in builder.build_rows(hits) {
        wtr.serialize(row)?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(format!("{}{}", UTF8_BOM, data))
}

fn format_text(hits: &[ScanHit]) -> String {
    let mut output = String::new();

    for scan_hit in hits {
        let page = scan_hit
            .page_number
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());
        output.push_str(&format!(
            "{}\tp.{}\t{}\t{}\n",
            scan_hit.document.filename,
            page,
            scan_hit.hit.kind(),
            scan_hit.snippet.replace(['\n', '\r'], " ")
        ));
    }

    output
}

fn print_summary(summary: &ScanSummary, kind: MatchKind, start: Instant) {
    eprintln!(
        "{} Scanned {} documents ({} pages) for {} hits in {:?}",
        style("✓").green(),
        summary.documents,
        summary.pages,
        kind,
        start.elapsed()
    );
    eprintln!(
        "   {} identity ({} unknown names), {} military, {} rank-title, {} citizen-rank",
        style(summary.identity).green(),
        style(summary.unknown_names).yellow(),
        style(summary.military).green(),
        style(summary.rank_title).green(),
        style(summary.citizen_rank).green()
    );
}
