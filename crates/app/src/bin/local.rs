// AdMock Studio - local demo driver

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use admock_common::{Config, LogFormat};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        e
    })?;

    let filter = EnvFilter::try_new(&config.rust_log).unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).pretty().init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .without_time()
            .init(),
    }

    info!(export_dir = %config.export_dir.display(), "Running AdMock Studio demo campaign");

    let exported = admock_app::run_demo(&config).map_err(|e| {
        error!("Demo campaign failed: {}", e);
        e
    })?;

    for path in exported {
        println!("Exported {}", path.display());
    }
    Ok(())
}
