use clap::Args;

use crate::config::AppConfig;
use crate::server::{self, StoreKind};

#[derive(Debug, Default, Args)]
pub struct ServeArgs {
    #[arg(long, help = "Use the in-memory store instead of Postgres")]
    pub memory: bool,
}

pub async fn handle(args: ServeArgs, config: AppConfig) -> anyhow::Result<()> {
    let store = if args.memory { StoreKind::Memory } else { StoreKind::Postgres };
    server::run(config, store).await
}
