use anyhow::Context;
use clap::Parser;
use courier::domain::config::CourierConfig;
use courier::kernel::config::load_config;
use courier_demo::Args;
use courier_logger::Logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config: CourierConfig =
        load_config(Some(&args.config)).context("Critical: Configuration is malformed")?;
    let _log = Logger::from_config(&config.logging)?;

    let platform = courier::init(&config)?;
    tracing::debug!(graph = ?platform.graph(), "Assembly graph");

    let summary = courier_demo::run(&platform, &args.input).await?;
    tracing::info!(
        delivered = summary.delivered,
        rejected = summary.rejected,
        failed = summary.failed,
        alarms = summary.alarms,
        "Done"
    );
    Ok(())
}
