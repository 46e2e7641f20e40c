//! Delimited sample reader

use crate::settings::PipelineConfig;
use anyhow::{Context, Result};
use std::io::Read;
use tracing::warn;

/// One parsed input record
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Signal the sample belongs to
    pub id: String,
    /// Free-form column echoed to the output
    pub label: Option<String>,
    pub value: f64,
}

/// Column layout shared by every record
#[derive(Debug, Clone)]
struct Columns {
    id: Option<usize>,
    label: Option<usize>,
    value: usize,
    default_id: String,
}

/// Reads samples from delimited text.
///
/// Records with a missing column or a value that does not parse as a number
/// are skipped with a warning and counted in [`SampleReader::skipped`].
pub struct SampleReader<R: Read> {
    records: csv::StringRecordsIntoIter<R>,
    columns: Columns,
    skipped: u64,
    last_skipped_line: Option<u64>,
}

impl<R: Read> SampleReader<R> {
    pub fn new(input: R, config: &PipelineConfig) -> Result<Self> {
        let reader = csv::ReaderBuilder::new()
            .delimiter(config.delimiter_byte()?)
            .has_headers(config.has_header)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(input);

        Ok(Self {
            records: reader.into_records(),
            columns: Columns {
                id: config.id_column,
                label: config.label_column,
                value: config.value_column,
                default_id: config.default_id.clone(),
            },
            skipped: 0,
            last_skipped_line: None,
        })
    }

    /// Records skipped so far
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    /// Input line of the most recently skipped record
    pub fn last_skipped_line(&self) -> Option<u64> {
        self.last_skipped_line
    }

    fn parse(&self, record: &csv::StringRecord) -> Option<Sample> {
        let id = match self.columns.id {
            Some(col) => record.get(col)?.to_string(),
            None => self.columns.default_id.clone(),
        };
        let label = match self.columns.label {
            Some(col) => Some(record.get(col)?.to_string()),
            None => None,
        };
        let value = record.get(self.columns.value)?.parse::<f64>().ok()?;
        Some(Sample { id, label, value })
    }
}

impl<R: Read> Iterator for SampleReader<R> {
    type Item = Result<Sample>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record = match self.records.next()?.context("Failed to read input record") {
                Ok(record) => record,
                Err(e) => return Some(Err(e)),
            };

            match self.parse(&record) {
                Some(sample) => return Some(Ok(sample)),
                None => {
                    // csv skips blank lines, so count lines from the record itself
                    let line = record.position().map(|p| p.line());
                    self.skipped += 1;
                    self.last_skipped_line = line;
                    warn!(
                        "Skipping line {}: {:?}",
                        line.unwrap_or_default(),
                        record.iter().collect::<Vec<_>>()
                    );
                }
            }
        }
    }
}
