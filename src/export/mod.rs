mod chart;
mod csv_export;
mod pdf;
mod xlsx;

use chrono::Local;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::ExpenseRecord;

/// Output formats for the expense report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReportFormat {
    Pdf,
    Xlsx,
    Csv,
    Chart,
}

impl ReportFormat {
    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "xlsx" | "excel" => Some(Self::Xlsx),
            "csv" => Some(Self::Csv),
            "chart" | "pie" | "png" => Some(Self::Chart),
            _ => None,
        }
    }

    pub(crate) fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Xlsx => "xlsx",
            Self::Csv => "csv",
            Self::Chart => "png",
        }
    }

    pub(crate) fn all() -> &'static [ReportFormat] {
        &[Self::Pdf, Self::Xlsx, Self::Csv, Self::Chart]
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pdf => write!(f, "PDF"),
            Self::Xlsx => write!(f, "Excel"),
            Self::Csv => write!(f, "CSV"),
            Self::Chart => write!(f, "pie chart"),
        }
    }
}

/// Failures from the report writers. Callers report these to the user;
/// they never abort the application.
#[derive(Debug, Error)]
pub(crate) enum ExportError {
    #[error("failed to write report file: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF rendering failed: {0}")]
    Pdf(String),
    #[error("spreadsheet rendering failed: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("chart rendering failed: {0}")]
    Chart(String),
    #[error("there are no expense records to chart")]
    NoRecords,
}

/// Timestamped output name, e.g. `expenses_report_20240101093000.pdf`.
pub(crate) fn report_filename(format: ReportFormat) -> String {
    format!(
        "expenses_report_{}.{}",
        Local::now().format("%Y%m%d%H%M%S"),
        format.extension()
    )
}

/// Renders all `records` into `out_dir` in the chosen format and
/// returns the path written.
pub(crate) fn write_report(
    format: ReportFormat,
    records: &[ExpenseRecord],
    out_dir: &Path,
) -> Result<PathBuf, ExportError> {
    let path = out_dir.join(report_filename(format));
    match format {
        ReportFormat::Pdf => pdf::write(records, &path)?,
        ReportFormat::Xlsx => xlsx::write(records, &path)?,
        ReportFormat::Csv => csv_export::write(records, &path)?,
        ReportFormat::Chart => chart::write(records, &path)?,
    }
    Ok(path)
}

/// Column titles shared by the spreadsheet-shaped formats.
pub(crate) const REPORT_COLUMNS: [&str; 4] =
    ["Serial no", "Item Name", "Item Price", "Purchase Date"];
