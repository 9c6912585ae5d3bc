use clap::Parser;
use std::path::Path;

use pwd_analyzer::api;
use pwd_analyzer::cli::Args;
use pwd_analyzer::core::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let mut config = Config::load();
    if let Some(address) = args.address {
        config.web_address = address;
    }
    if let Some(port) = args.port {
        config.web_port = port;
    }

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .init();

    log::info!("🔐 Starting Password Strength Analyzer");
    log::info!(
        "Meter page at http://{}:{}/ (API docs at /swagger-ui/)",
        config.web_address,
        config.web_port
    );

    api::start_server(config).await?;

    log::info!("✅ Analyzer shutdown complete.");
    Ok(())
}
