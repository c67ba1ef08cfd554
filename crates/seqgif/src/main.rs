mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use seqgif_core::pipeline;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = cli::Cli::parse().into_config();

    let report = pipeline::run_pipeline(&config).with_context(|| {
        format!(
            "failed to assemble {} into {}",
            config.input_dir.display(),
            config.output_path.display()
        )
    })?;

    info!(
        frame_count = report.frame_count,
        size = report.size,
        frame_duration_ms = report.frame_duration_ms,
        bytes = report.bytes_written,
        "assembly complete"
    );

    println!("GIF saved as {}", report.output_path.display());
    Ok(())
}
