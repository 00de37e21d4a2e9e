//! RizzSite CLI and web server entry point.
//!
//! Binary name: `rizz`
//!
//! Parses CLI arguments, loads the config, opens the conversation with the
//! configured backend, then dispatches to the command handler or starts the
//! web server.

mod cli;
mod http;
mod state;

use anyhow::Context;
use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    rizz_observe::tracing_setup::init_tracing(cli.verbose, cli.quiet, cli.json)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    match cli.command {
        // Commands that don't need a backend
        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(shell, &mut cmd, "rizz", &mut std::io::stdout());
        }
        Commands::Styles => {
            cli::styles::list_styles(cli.json)?;
        }

        Commands::Reply { message, options } => {
            let state = AppState::init(cli.config.as_deref()).await?;
            cli::reply::reply(&state, message, options, cli.json, cli.quiet).await?;
        }

        Commands::Chat { options } => {
            let state = AppState::init(cli.config.as_deref()).await?;
            cli::chat::chat(&state, options, cli.json).await?;
        }

        Commands::Serve { port, host } => {
            let state = AppState::init(cli.config.as_deref()).await?;
            let host = host.unwrap_or_else(|| state.config.server.host.clone());
            let port = port.unwrap_or(state.config.server.port);
            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("Failed to bind {addr}"))?;

            println!(
                "  {} RizzSite listening on {}",
                console::style("♥").magenta().bold(),
                console::style(format!("http://{addr}")).cyan()
            );
            println!("  {}", console::style("Press Ctrl+C to stop").dim());
            tracing::info!(%addr, "Server started");

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            println!("\n  Server stopped.");
        }
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
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
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
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
}
