use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use outliner::{api, cli, store::Store};

#[derive(Parser)]
#[command(name = "outliner")]
#[command(about = "Editor for arbitrarily nested lists of named items")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the outline HTTP server
    Serve {
        /// Port for HTTP API
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
    /// Edit an outline interactively in the terminal
    Edit,
}

/// Initialize tracing with output to stderr (for edit mode) or stdout
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "outliner=debug,tower_http=debug".into()),
    );

    if use_stderr {
        // Edit mode: log to stderr so stdout is clean for the editor
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn serve(port: u16) -> anyhow::Result<()> {
    tracing::info!("Starting Outliner server on port {}", port);

    let store = Store::new();
    let app = api::create_router(store);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    tracing::info!("Outliner server listening on http://127.0.0.1:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Edit mode needs stderr for logging since stdout is the editor
    let use_stderr = matches!(cli.command, Some(Commands::Edit));
    init_tracing(use_stderr);

    match cli.command {
        Some(Commands::Serve { port }) => serve(port).await?,
        Some(Commands::Edit) => {
            let store = Store::new();
            cli::run(&store)?;
        }
        None => {
            // Default: start the server
            serve(3000).await?;
        }
    }

    Ok(())
}
