//! Demo driver: feeds a JSON-lines file of raw sensor input through a fully
//! assembled platform.

use anyhow::Context;
use clap::Parser;
use courier::Platform;
use courier::domain::input::RawInput;
use courier::features::sensor::SensorError;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

#[derive(Debug, Parser)]
#[command(name = "courier-demo", about = "Drive the courier senders from a raw-input file")]
pub struct Args {
    /// Configuration file, without or with extension.
    #[arg(short, long, default_value = "courier")]
    pub config: PathBuf,

    /// JSON-lines file; one flat object with a `kind` field per line.
    #[arg(short, long, default_value = "apps/demo/data/readings.jsonl")]
    pub input: PathBuf,
}

/// Tally of one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub delivered: usize,
    /// Lines that were not JSON objects or named no known kind.
    pub rejected: usize,
    /// Signals built but not delivered to every recipient.
    pub failed: usize,
    pub alarms: usize,
}

/// Parses one line into raw input. Blank lines yield `None`.
///
/// # Errors
/// Fails when the line is not a flat JSON object.
pub fn parse_line(line: &str) -> anyhow::Result<Option<RawInput>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(line).map(Some).context("Line is not a flat JSON object")
}

/// Streams `input` through the platform's sensor.
///
/// # Errors
/// Fails only when the file cannot be opened or read; bad lines are counted.
pub async fn run(platform: &Platform, input: &Path) -> anyhow::Result<Summary> {
    let file = tokio::fs::File::open(input)
        .await
        .with_context(|| format!("Cannot open input {}", input.display()))?;
    let mut lines = BufReader::new(file).lines();
    let mut summary = Summary::default();
    let mut number = 0_usize;

    while let Some(line) = lines.next_line().await? {
        number += 1;
        let raw = match parse_line(&line) {
            Ok(Some(raw)) => raw,
            Ok(None) => continue,
            Err(err) => {
                warn!(line = number, error = %err, "Skipping line");
                summary.rejected += 1;
                continue;
            },
        };

        match platform.sensor().ingest(&raw).await {
            Ok(report) => {
                debug!(line = number, delivered = report.delivered, "Signal delivered");
                summary.delivered += 1;
            },
            Err(err @ SensorError::Input { .. }) => {
                warn!(line = number, kind = raw.discriminator(), error = %err, "Rejected input");
                summary.rejected += 1;
            },
            Err(err) => {
                warn!(line = number, error = %err, "Delivery failed");
                summary.failed += 1;
            },
        }
    }

    summary.alarms = platform.alarm().journal().lines().len();
    info!(?summary, "Input processed");
    Ok(summary)
}
