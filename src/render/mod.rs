pub mod output;

use std::io::Write;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pipeline::config::IndexConfig;
use crate::types::kwic_bundle::{IndexReport, OrderedIndex};
pub use output::write_atomic;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// One rotation per line.
    #[default]
    Text,
    /// `IndexReport` as pretty-printed JSON.
    Json,
}

/// Writes an index out. Holds no state besides its settings.
pub struct ReportRenderer {
    format: ReportFormat,
}

impl ReportRenderer {
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    pub fn render<W: Write>(&self, report: &IndexReport, out: &mut W) -> Result<(), RenderError> {
        match self.format {
            ReportFormat::Text => render_text(&report.rotations, &report.index.config, out),
            ReportFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, report)?;
                writeln!(out)?;
                Ok(())
            }
        }
    }

    pub fn render_to_string(&self, report: &IndexReport) -> Result<String, RenderError> {
        let mut buf = Vec::new();
        self.render(report, &mut buf)?;
        // Rotations are built from UTF-8 input and serde_json emits UTF-8.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Plain-text rendering: each rotation on its own line, optionally preceded by a blank line.
pub fn render_text<W: Write>(index: &OrderedIndex, config: &IndexConfig, out: &mut W) -> Result<(), RenderError> {
    for rotation in index {
        if config.blank_line_separator {
            writeln!(out)?;
        }
        if config.trailing_separator {
            writeln!(out, "{} ", rotation.as_str())?;
        } else {
            writeln!(out, "{}", rotation.as_str())?;
        }
    }
    Ok(())
}
