// src/export/mod.rs

mod csv;
mod json;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

pub use csv::write_csv;
pub use json::write_json;

/// Completion message shared by all export formats.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}
