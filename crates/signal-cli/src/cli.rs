//! Command-line arguments

use crate::settings::{OutputFormat, PipelineConfig};
use clap::Parser;
use feature_engine::ProcessorKind;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Delimited input file; reads stdin when omitted
    pub input: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Samples per window
    #[arg(short, long)]
    pub window_size: Option<usize>,

    /// Processor to register (repeatable): avg, mav, wl, wamp:<threshold>, rms_window, rms
    #[arg(short, long = "processor")]
    pub processors: Vec<ProcessorKind>,

    /// Field delimiter (single character, or "tab")
    #[arg(short, long)]
    pub delimiter: Option<String>,

    /// Skip the first line of input
    #[arg(long, conflicts_with = "no_header")]
    pub header: bool,

    /// Read the first line as data
    #[arg(long)]
    pub no_header: bool,

    /// Column holding the signal id
    #[arg(long, conflicts_with = "no_id")]
    pub id_column: Option<usize>,

    /// Treat every record as the same signal
    #[arg(long)]
    pub no_id: bool,

    /// Column echoed next to the id
    #[arg(long)]
    pub label_column: Option<usize>,

    /// Column holding the sample value
    #[arg(long)]
    pub value_column: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Decimal places in TSV output
    #[arg(long)]
    pub precision: Option<usize>,

    /// Log level
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    /// Push the built-in alternating ramp instead of reading input
    #[arg(long)]
    pub demo: bool,
}

impl Args {
    /// Command-line flags take precedence over file and environment
    pub fn apply(&self, config: &mut PipelineConfig) {
        if let Some(window_size) = self.window_size {
            config.window_size = window_size;
        }
        if !self.processors.is_empty() {
            config.processors = self.processors.clone();
        }
        if let Some(delimiter) = &self.delimiter {
            config.delimiter = delimiter.clone();
        }
        if self.header {
            config.has_header = true;
        } else if self.no_header {
            config.has_header = false;
        }
        if self.demo {
            config.label_column = None;
        }
        if self.no_id {
            config.id_column = None;
        } else if let Some(col) = self.id_column {
            config.id_column = Some(col);
        }
        if let Some(col) = self.label_column {
            config.label_column = Some(col);
        }
        if let Some(col) = self.value_column {
            config.value_column = col;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(precision) = self.precision {
            config.precision = precision;
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        if self.log_json {
            config.log_json = true;
        }
    }
}
