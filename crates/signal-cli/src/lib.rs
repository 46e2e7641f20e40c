//! Signal Pipeline Driver
//!
//! Reads delimited samples, feeds each into the signal named by its id
//! column and prints one row of feature values per sample.

pub mod cli;
pub mod input;
pub mod output;
pub mod router;
pub mod settings;

pub use cli::Args;
pub use input::{Sample, SampleReader};
pub use output::ResultWriter;
pub use router::SignalRouter;
pub use settings::{OutputFormat, PipelineConfig};

use anyhow::{Context, Result};
use std::io::{Read, Write};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Counters reported at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Samples pushed into signals
    pub samples: u64,
    /// Input records that could not be parsed
    pub skipped: u64,
    /// Distinct signal ids
    pub signals: usize,
}

/// Initialize logging to stderr; stdout carries results only
pub fn init_logging(level: Level, json: bool) -> Result<()> {
    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    let installed = if json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    installed.context("Failed to set tracing subscriber")?;
    Ok(())
}

/// Run delimited `input` through per-id signals and write results to `output`
pub fn run_pipeline<R: Read, W: Write>(
    config: &PipelineConfig,
    input: R,
    output: W,
) -> Result<RunStats> {
    let mut reader = SampleReader::new(input, config)?;
    let stats = process_samples(config, reader.by_ref(), output)?;
    Ok(RunStats {
        skipped: reader.skipped(),
        ..stats
    })
}

/// Alternating-sign ramp 0, -1, 2, -3, ... 100 into a single signal
pub fn demo_samples() -> impl Iterator<Item = Result<Sample>> {
    (0..=100i32).map(|i| {
        let v = if i % 2 == 1 { -i } else { i };
        Ok(Sample {
            id: "zero-to-hundred".to_string(),
            label: None,
            value: v as f64,
        })
    })
}

/// Push every sample and write one output line per push
pub fn process_samples<I, W>(config: &PipelineConfig, samples: I, output: W) -> Result<RunStats>
where
    I: Iterator<Item = Result<Sample>>,
    W: Write,
{
    let mut router = SignalRouter::new(config.window_size, config.processors.clone())?;
    let mut writer = ResultWriter::new(
        output,
        config.format,
        config.precision,
        config.label_column.is_some(),
    );

    info!(
        "Window size {}, processors: {}",
        config.window_size,
        config
            .processors
            .iter()
            .map(|k| k.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );

    writer.write_header(&router.processor_names())?;

    let mut stats = RunStats::default();
    for sample in samples {
        let sample = sample?;
        let result = router.push(&sample.id, sample.value)?;
        writer.write(&result, sample.label.as_deref())?;
        stats.samples += 1;
    }
    writer.flush()?;

    stats.signals = router.len();
    info!(
        "Processed {} samples across {} signals",
        stats.samples, stats.signals
    );
    Ok(stats)
}
