//! Statement data shared by the PDF and CSV renderers

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{FixedOffset, NaiveDateTime};
use serde_json::json;

use crate::analytics::{entries_in_period, sort_by_date, EntrySummary};
use crate::audit::EntityType;
use crate::error::{SaverError, SaverResult};
use crate::models::{Entry, Period};
use crate::storage::Storage;

/// Default statement heading
pub const DEFAULT_TITLE: &str = "EXPENSE SAVER STATEMENT";

/// Everything a statement renderer needs, computed up front
#[derive(Debug, Clone, PartialEq)]
pub struct StatementData {
    /// Heading line
    pub title: String,
    /// "January 2025", "Year 2025"
    pub period_label: String,
    /// Entries oldest first
    pub entries: Vec<Entry>,
    pub summary: EntrySummary,
    /// Local wall-clock time printed as the generation time
    pub generated_at: NaiveDateTime,
    /// Offset used to print entry dates
    pub offset: FixedOffset,
}

impl StatementData {
    /// Build from an already-selected set of entries
    pub fn new(
        period_label: impl Into<String>,
        mut entries: Vec<Entry>,
        generated_at: NaiveDateTime,
        offset: FixedOffset,
    ) -> Self {
        sort_by_date(&mut entries);
        let summary = EntrySummary::from_entries(&entries);

        Self {
            title: DEFAULT_TITLE.to_string(),
            period_label: period_label.into(),
            entries,
            summary,
            generated_at,
            offset,
        }
    }

    /// Select the entries of a period and build its statement
    pub fn for_period(
        entries: &[Entry],
        period: &Period,
        generated_at: NaiveDateTime,
        offset: FixedOffset,
    ) -> Self {
        Self::new(
            period.label(),
            entries_in_period(entries, period, &offset),
            generated_at,
            offset,
        )
    }

    /// Replace the heading line
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// `dd/MM/yyyy` date of an entry in the statement's offset
    pub fn entry_date(&self, entry: &Entry) -> String {
        entry
            .date
            .local_date(&self.offset)
            .format("%d/%m/%Y")
            .to_string()
    }

    /// `dd/MM/yyyy HH:mm` generation time
    pub fn generated_label(&self) -> String {
        self.generated_at.format("%d/%m/%Y %H:%M").to_string()
    }

    /// Suggested file name: `statement-<label with dashes>.<ext>`
    pub fn file_name(&self, format: StatementFormat) -> String {
        statement_file_name(&self.period_label, format)
    }

    /// Render in the requested format
    pub fn render(&self, format: StatementFormat) -> Vec<u8> {
        match format {
            StatementFormat::Pdf => super::pdf::statement_pdf(self),
            StatementFormat::Csv => super::csv::statement_csv(self).into_bytes(),
        }
    }
}

/// Render a statement into `output_dir` under its suggested file name and
/// record the export in the audit log
pub fn write_statement(
    storage: &Storage,
    data: &StatementData,
    format: StatementFormat,
    output_dir: &Path,
) -> SaverResult<PathBuf> {
    fs::create_dir_all(output_dir).map_err(|e| {
        SaverError::Export(format!(
            "Failed to create directory {}: {}",
            output_dir.display(),
            e
        ))
    })?;

    let file_name = data.file_name(format);
    let path = output_dir.join(&file_name);
    fs::write(&path, data.render(format)).map_err(|e| {
        SaverError::Export(format!("Failed to write {}: {}", path.display(), e))
    })?;

    storage.log_export(
        EntityType::Statement,
        file_name,
        Some(data.period_label.clone()),
        &json!({
            "format": format.extension(),
            "entries": data.entries.len(),
            "total_expenses": data.summary.total_expenses,
            "total_savings": data.summary.total_savings,
            "net_balance": data.summary.net_balance,
        }),
    )?;

    Ok(path)
}

/// Output format of a statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum StatementFormat {
    Pdf,
    Csv,
}

impl StatementFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            StatementFormat::Pdf => "pdf",
            StatementFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for StatementFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for StatementFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(StatementFormat::Pdf),
            "csv" => Ok(StatementFormat::Csv),
            other => Err(format!("Unknown statement format '{}'. Use pdf or csv", other)),
        }
    }
}

/// `statement-<label>.<ext>` with each whitespace run in the label
/// replaced by a single dash
pub fn statement_file_name(period_label: &str, format: StatementFormat) -> String {
    format!(
        "statement-{}.{}",
        period_label.split_whitespace().collect::<Vec<_>>().join("-"),
        format.extension()
    )
}
