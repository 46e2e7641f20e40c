//! Signal Pipeline - Main Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use signal_cli::{demo_samples, init_logging, process_samples, run_pipeline, Args, PipelineConfig};
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use tracing::{info, Level};

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = PipelineConfig::load(args.config.as_deref())?;
    args.apply(&mut config);
    config.validate()?;

    let level: Level = config
        .log_level
        .parse()
        .with_context(|| format!("Invalid log level '{}'", config.log_level))?;
    init_logging(level, config.log_json)?;

    info!("=== Signal Pipeline v{} ===", env!("CARGO_PKG_VERSION"));

    let stdout = io::stdout();
    let output = BufWriter::new(stdout.lock());

    let stats = if args.demo {
        process_samples(&config, demo_samples(), output)?
    } else if let Some(path) = &args.input {
        let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
        run_pipeline(&config, BufReader::new(file), output)?
    } else {
        run_pipeline(&config, io::stdin().lock(), output)?
    };

    info!(
        "Done: {} samples, {} skipped, {} signals",
        stats.samples, stats.skipped, stats.signals
    );
    Ok(())
}
