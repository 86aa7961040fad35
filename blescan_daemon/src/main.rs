use std::sync::Arc;

use blescan::{
    build_scan_configuration, build_service_filter, spawn_dispatch, Bluetooth, Config, Context,
    ScanConfiguration, ScanDispatcher, ScanMode,
};
use clap::Parser;
use tokio::signal;
use tracing::info;
#[cfg(not(feature = "console-subscriber"))]
use {
    tracing::Level,
    tracing_subscriber::{filter::Targets, prelude::*},
};

use blescan_daemon::Args;

#[cfg(not(feature = "console-subscriber"))]
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let targets = Targets::new()
        .with_target("blescan", level)
        .with_target("blescan_daemon", level);
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(targets))
        .init();
}
#[cfg(feature = "console-subscriber")]
fn init_logging(_verbose: bool) {
    console_subscriber::init();
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(args.verbose);
    let mut config = Config::default().with_event_capacity(args.capacity);
    if let Some(adapter) = args.adapter {
        config = config.with_adapter(adapter);
    }
    let scan_config = match ScanMode::from(args.mode) {
        ScanMode::LowLatency => build_scan_configuration(),
        mode => ScanConfiguration::new(mode, build_service_filter()),
    };
    let context = Context::from(config);
    let feed = spawn_dispatch(&context, Arc::new(ScanDispatcher::new(scan_config)));
    let mut bluetooth = Bluetooth::new(&context).await?;
    bluetooth.scan(&scan_config, feed).await?;
    info!("Scanning for {}", scan_config.filter().service());
    signal::ctrl_c().await?;
    context.shutdown().await;
    Ok(())
}
