use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use checkin_bootstrap::{run_console, AppContext};
use checkin_infrastructure::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "checkin-console")]
#[command(about = "Event check-in console", long_about = None)]
struct Args {
    /// Path to config file
    #[arg(short, long)]
    config: Option<String>,
}

fn init_tracing(log_dir: Option<&str>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "checkin-console.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(config) = args.config {
        std::env::set_var("CHECKIN_CONFIG", config);
    }

    // Logging needs log_dir, so the config is read before the subscriber exists.
    let path = AppConfig::config_path();
    let config = AppConfig::load_from(&path).await?;
    let _guard = init_tracing(config.log_dir.as_deref());
    if path.exists() {
        info!("loaded config from {}", path.display());
    } else {
        warn!("{} not found, using defaults", path.display());
    }
    for warning in config.warnings() {
        warn!("{}", warning);
    }

    let context = AppContext::from_config(&config)?;
    run_console(context).await
}
