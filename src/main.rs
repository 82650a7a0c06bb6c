//! Gavel CLI - track auction-won items through buyer verification and deadline expiry

use clap::Parser;
use gavel::cli::{Cli, Commands};
use gavel::errors::to_exit_code;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing; --verbose and --quiet set the default level,
    // RUST_LOG still wins when present.
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

async fn run(cli: Cli) -> gavel::Result<()> {
    match cli.command {
        Some(Commands::Init { force }) => {
            gavel::cli::commands::init::run(cli.cwd.as_deref(), force, cli.dry_run).await
        }
        Some(Commands::Win {
            name,
            price,
            seller,
            phone,
            email,
            id,
        }) => {
            gavel::cli::commands::win::run(
                cli.cwd.as_deref(),
                &name,
                price,
                &seller,
                phone.as_deref(),
                email.as_deref(),
                id.as_deref(),
                cli.dry_run,
            )
            .await
        }
        Some(Commands::List { json, status }) => {
            gavel::cli::commands::list::run(cli.cwd.as_deref(), json, status.as_deref()).await
        }
        Some(Commands::Show { id, json }) => {
            gavel::cli::commands::show::run(cli.cwd.as_deref(), &id, json).await
        }
        Some(Commands::Status { json }) => {
            gavel::cli::commands::status::run(cli.cwd.as_deref(), json).await
        }
        Some(Commands::Verify { id }) => {
            gavel::cli::commands::verify::run(cli.cwd.as_deref(), &id, cli.dry_run).await
        }
        Some(Commands::Receive { id }) => {
            gavel::cli::commands::receive::run(cli.cwd.as_deref(), &id, cli.dry_run).await
        }
        Some(Commands::Report { id, reason }) => {
            gavel::cli::commands::report::run(cli.cwd.as_deref(), &id, &reason, cli.dry_run).await
        }
        Some(Commands::Sweep) => {
            gavel::cli::commands::sweep::run(cli.cwd.as_deref(), cli.dry_run).await
        }
        Some(Commands::Watch { id, once }) => {
            gavel::cli::commands::watch::run(cli.cwd.as_deref(), id.as_deref(), once, cli.dry_run)
                .await
        }
        None => {
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
