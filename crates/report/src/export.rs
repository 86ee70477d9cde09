//! Writing reports to disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::document::MatchReport;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl ReportFormat {
    /// Parse a format name (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
        }
    }
}

impl MatchReport {
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn render(&self, format: ReportFormat) -> Result<String, ReportError> {
        match format {
            ReportFormat::Text => Ok(self.render_text()),
            ReportFormat::Json => self.to_json(),
        }
    }

    /// File name derived from the generation time, e.g.
    /// `molkky-report-20261019-140300.txt`.
    pub fn file_name(&self, format: ReportFormat) -> String {
        format!(
            "molkky-report-{}.{}",
            self.generated_at.format("%Y%m%d-%H%M%S"),
            format.extension()
        )
    }

    /// Write the report into `dir` (created if missing) and return the path.
    pub fn write_to(&self, dir: &Path, format: ReportFormat) -> Result<PathBuf, ReportError> {
        fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name(format));
        fs::write(&path, self.render(format)?)?;
        info!(path = %path.display(), rows = self.rows.len(), "report exported");
        Ok(path)
    }
}
