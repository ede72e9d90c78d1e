//! docfolio CLI and HTTP server entry point.
//!
//! Binary name: `docfolio`
//!
//! Parses CLI arguments, loads configuration, seeds the in-memory store,
//! then starts the server or runs the requested command.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;
use docfolio_core::catalog::CategoryFilter;
use docfolio_observe::TracingOptions;

use cli::browse::BrowseOptions;
use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Shell completions don't need logging or app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "docfolio", &mut std::io::stdout());
        return Ok(());
    }

    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn,docfolio=info",
        1 => "info,docfolio=debug",
        _ => "trace",
    };
    docfolio_observe::init_tracing(
        &TracingOptions::new(filter)
            .with_json(cli.json)
            .with_otel(cli.otel),
    )
    .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = run(cli).await;
    docfolio_observe::shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let (data_dir, mut config) = state::load_server_config().await;

    match cli.command {
        Commands::Serve { port, host } => {
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(host) = host {
                config.host = host;
            }

            let addr = config.bind_addr();
            let state = AppState::seeded(config).await?;
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            tracing::info!(%addr, data_dir = %data_dir.display(), "server listening");
            if !cli.quiet {
                println!(
                    "  {} docfolio listening on {}",
                    console::style("⚡").bold(),
                    console::style(format!("http://{addr}")).cyan()
                );
                println!("  {}", console::style("Press Ctrl+C to stop").dim());
            }

            let router = http::router::build_router(state);
            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            if !cli.quiet {
                println!("\n  Server stopped.");
            }
        }

        Commands::Export { out } => {
            let state = AppState::seeded(config).await?;
            cli::export::export(&state, &out, cli.json).await?;
        }

        Commands::Browse {
            source,
            api,
            category,
            pages,
        } => {
            let filter = category
                .parse::<CategoryFilter>()
                .map_err(anyhow::Error::msg)?;
            let options = BrowseOptions {
                filter,
                pages,
                page_size: config.page_size,
            };
            cli::browse::browse(&source, api, options, cli.json).await?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
