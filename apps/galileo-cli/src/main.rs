//! galileo-connector - Run the Galileo-FT connector from the command line
//!
//! This CLI enables operators to:
//! - Check Galileo-FT credentials
//! - List users and groups as the host would sync them
//! - Inspect group entitlements and membership grants
//! - Grant and revoke group membership

use clap::{Parser, Subcommand};
use connector_galileo::GalileoConnector;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod error;

use commands::Context;
use config::ConfigArgs;
use error::CliResult;

/// Galileo-FT connector
#[derive(Parser, Debug)]
#[command(name = "galileo-connector")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check the configured credentials
    Validate(commands::validate::ValidateArgs),

    /// List every resource of a type
    List(commands::list::ListArgs),

    /// List the entitlements of a group
    Entitlements(commands::entitlements::EntitlementsArgs),

    /// List the membership grants of a group
    Grants(commands::grants::GrantsArgs),

    /// Add an account to a group
    Grant(commands::membership::MembershipArgs),

    /// Remove an account from a group
    Revoke(commands::membership::MembershipArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            e.print();
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> CliResult<()> {
    let config = cli.config.to_config();
    tracing::debug!(config = ?config, "Loaded configuration");

    let connector = GalileoConnector::new(config)?;

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupted, cancelling");
            on_interrupt.cancel();
        }
    });

    let ctx = Context { connector, cancel };
    match cli.command {
        Commands::Validate(args) => commands::validate::execute(&ctx, args).await,
        Commands::List(args) => commands::list::execute(&ctx, args).await,
        Commands::Entitlements(args) => commands::entitlements::execute(&ctx, args).await,
        Commands::Grants(args) => commands::grants::execute(&ctx, args).await,
        Commands::Grant(args) => commands::membership::grant(&ctx, args).await,
        Commands::Revoke(args) => commands::membership::revoke(&ctx, args).await,
    }
}
