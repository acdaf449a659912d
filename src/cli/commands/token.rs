use anyhow::Context;
use clap::Args;
use serde_json::json;

use crate::auth::{TokenCodec, TokenPayload};
use crate::cli::OutputFormat;
use crate::config::{parse_expiry, AppConfig};

#[derive(Debug, Args)]
pub struct TokenArgs {
    #[arg(long, help = "User id to embed")]
    pub user_id: i64,

    #[arg(long, help = "Email to embed")]
    pub email: String,

    #[arg(long, default_value = "user", help = "Role to embed (e.g. admin)")]
    pub role: String,

    #[arg(long, help = "Lifetime override, e.g. 15m or 2h (defaults to JWT_EXPIRY)")]
    pub ttl: Option<String>,
}

pub fn handle(args: TokenArgs, config: AppConfig, output_format: OutputFormat) -> anyhow::Result<()> {
    if config.security.uses_fallback_secret() {
        tracing::warn!("Signing with the fallback secret; this token is forgeable");
    }

    let codec = TokenCodec::from_config(&config.security);
    let ttl = match args.ttl.as_deref() {
        Some(raw) => parse_expiry(raw).with_context(|| format!("invalid --ttl value '{}'", raw))?,
        None => codec.ttl(),
    };

    let payload = TokenPayload::new(args.user_id, args.email, args.role);
    let token = codec.sign_with_ttl(&payload, ttl)?;

    match output_format {
        OutputFormat::Text => println!("{}", token),
        OutputFormat::Json => println!(
            "{}",
            json!({ "token": token, "expires_in": ttl.num_seconds(), "user": payload })
        ),
    }
    Ok(())
}
