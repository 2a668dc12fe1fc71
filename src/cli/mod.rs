// Thin entry layer: parse arguments, run the pipeline, hand the index to the renderer.
// No indexing logic lives here.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use kwic_core::pipeline::{IndexConfig, KwicIndexer, Sources};
use kwic_core::render::{write_atomic, ReportFormat, ReportRenderer};

#[derive(Parser, Debug)]
#[command(
    name = "kwic",
    version,
    about = "Build a Key-Word-In-Context index of a text file.",
    override_usage = "kwic [OPTIONS] <INPUT_FILENAME> <NOISE_WORDS_FILENAME>"
)]
pub struct Cli {
    /// Text document to index
    pub input_filename: PathBuf,

    /// Whitespace-separated noise words that may not lead a rotation
    pub noise_words_filename: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,

    /// Write the report to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Omit the blank line printed before each rotation
    #[arg(long)]
    pub compact: bool,

    /// End every rotation with a space, as the reference rendering does
    #[arg(long)]
    pub trailing_separator: bool,

    /// Do not print the elapsed time line
    #[arg(long)]
    pub no_timing: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

/// The renderer never sees clap types.
impl From<FormatArg> for ReportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let start = Instant::now();

        let mut config = if self.compact {
            IndexConfig::compact()
        } else {
            IndexConfig::v0()
        };
        if self.trailing_separator {
            config = config.with_trailing_separator();
        }

        // Fatal before any output is produced.
        let sources = Sources::load(&self.input_filename, &self.noise_words_filename)?;

        let indexer = KwicIndexer::with_config(config);
        let report = indexer.index(&sources);

        let renderer = ReportRenderer::new(self.format.into());
        match &self.output {
            Some(path) => {
                let rendered = renderer.render_to_string(&report)?;
                write_atomic(path, rendered.as_bytes())
                    .with_context(|| format!("Error writing output file {}", path.display()))?;
                tracing::info!(path = %path.display(), "report written");
            }
            None => {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                renderer.render(&report, &mut out)?;
                out.flush()?;
            }
        }

        let elapsed = start.elapsed();
        if !self.no_timing && self.format == FormatArg::Text {
            println!("\n\n{} microseconds to complete.", elapsed.as_micros());
        } else {
            tracing::info!(micros = elapsed.as_micros() as u64, "completed");
        }

        Ok(())
    }
}
