pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "skill-portal-api")]
#[command(about = "Skill Portal API server and operator tooling")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the HTTP server (default)")]
    Serve(commands::serve::ServeArgs),

    #[command(about = "Sign a credential with the configured secret")]
    Token(commands::token::TokenArgs),
}

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let config = crate::config::AppConfig::from_env()?;

    match cli.command {
        Some(Commands::Serve(args)) => commands::serve::handle(args, config).await,
        None => commands::serve::handle(commands::serve::ServeArgs::default(), config).await,
        Some(Commands::Token(args)) => commands::token::handle(args, config, output_format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["skill-portal-api"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_token_command() {
        let cli = Cli::try_parse_from([
            "skill-portal-api",
            "--json",
            "token",
            "--user-id",
            "9",
            "--email",
            "ops@example.com",
            "--role",
            "admin",
            "--ttl",
            "1h",
        ])
        .unwrap();
        assert!(matches!(OutputFormat::from_cli(&cli), OutputFormat::Json));
        match cli.command {
            Some(Commands::Token(args)) => {
                assert_eq!(args.user_id, 9);
                assert_eq!(args.role, "admin");
                assert_eq!(args.ttl.as_deref(), Some("1h"));
            }
            _ => panic!("expected token command"),
        }
    }

    #[test]
    fn parses_serve_memory_flag() {
        let cli = Cli::try_parse_from(["skill-portal-api", "serve", "--memory"]).unwrap();
        match cli.command {
            Some(Commands::Serve(args)) => assert!(args.memory),
            _ => panic!("expected serve command"),
        }
    }
}
