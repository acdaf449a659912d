use clap::Parser;
use skill_portal_api::cli::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    // Installed before configuration is read so startup warnings are visible
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    if let Err(e) = skill_portal_api::cli::run(cli).await {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
