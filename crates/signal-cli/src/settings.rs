//! Pipeline settings

use config::{Config, Environment, File};
use feature_engine::ProcessorKind;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Environment variable prefix, e.g. `SIGNAL_PIPELINE_WINDOW_SIZE=20`
pub const ENV_PREFIX: &str = "SIGNAL_PIPELINE";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Output encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated columns with a header line
    Tsv,
    /// One JSON object per line
    Json,
}

/// Pipeline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Samples per window
    pub window_size: usize,

    /// Processors registered on every signal, in output order
    pub processors: Vec<ProcessorKind>,

    /// Field delimiter; a single ASCII character
    pub delimiter: String,

    /// Skip the first input line
    pub has_header: bool,

    /// Column holding the signal id; all records share `default_id` when unset
    pub id_column: Option<usize>,

    /// Column echoed to the output next to the id
    pub label_column: Option<usize>,

    /// Column holding the sample value
    pub value_column: usize,

    /// Signal id used when there is no id column
    pub default_id: String,

    pub format: OutputFormat,

    /// Decimal places in TSV output
    pub precision: usize,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Emit logs as JSON lines
    pub log_json: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            window_size: 10,
            processors: vec![ProcessorKind::RunningRms, ProcessorKind::WaveformLength],
            delimiter: ",".to_string(),
            has_header: false,
            id_column: Some(0),
            label_column: Some(1),
            value_column: 2,
            default_id: "signal".to_string(),
            format: OutputFormat::Tsv,
            precision: 2,
            log_level: "info".to_string(),
            log_json: false,
        }
    }
}

impl PipelineConfig {
    /// Load defaults, then an optional file, then `SIGNAL_PIPELINE_*` variables
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        let config: Self = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_size == 0 {
            return Err(ConfigError::Invalid("window_size must be at least 1".into()));
        }
        self.delimiter_byte()?;
        if self.id_column == Some(self.value_column) {
            return Err(ConfigError::Invalid(format!(
                "id_column and value_column are both {}",
                self.value_column
            )));
        }
        if self.log_level.parse::<tracing::Level>().is_err() {
            return Err(ConfigError::Invalid(format!(
                "unknown log_level '{}'",
                self.log_level
            )));
        }
        Ok(())
    }

    /// Delimiter as the byte the CSV reader expects
    pub fn delimiter_byte(&self) -> Result<u8, ConfigError> {
        match self.delimiter.as_str() {
            "\\t" | "tab" => Ok(b'\t'),
            d if d.len() == 1 && d.is_ascii() => Ok(d.as_bytes()[0]),
            d => Err(ConfigError::Invalid(format!(
                "delimiter must be a single ASCII character, got '{d}'"
            ))),
        }
    }
}
