use chrono::Local;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

use jadwal_sholat::app::{
    cli::{self, Args},
    client::PrayerClient,
    config::Config,
    console::Console,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // stdout is reserved for the schedule; diagnostics only when RUST_LOG asks
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::OFF.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;
    debug!("Using config: {:?}", config);

    let client = PrayerClient::new(&config)?;
    let mut console = Console::stdio();
    cli::run(&args, &config, &client, &mut console, Local::now().date_naive()).await?;

    Ok(())
}
