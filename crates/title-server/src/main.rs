use clap::Parser;

use title_server::logging::init_logging;
use title_server::{run_server, Cli, ServerConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.debug);

    let config = match ServerConfig::try_from(cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("LLM Configuration:");
    tracing::info!("  Base URL: {}", config.llm_base_url);
    tracing::info!("  Model: {}", config.model);
    tracing::info!("  Timeout: {:?}", config.request_timeout);
    tracing::info!(
        "  Shared secret: {}",
        if config.shared_secret.is_some() { "enabled" } else { "disabled" }
    );
    tracing::debug!("Server configuration: {:?}", config);

    run_server(config).await?;
    Ok(())
}
