use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use price_series::{
    PriceField, SeriesRepository, Window, WindowSelector,
    catalog::{SymbolCatalog, load_catalog_path},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Stock price dashboard")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Serve the dashboard over HTTP.
    Serve {
        #[command(flatten)]
        data: DataArgs,
        #[arg(long, env = "STOCK_DASHBOARD_BIND", default_value = "127.0.0.1")]
        bind: String,
        #[arg(long, env = "STOCK_DASHBOARD_PORT", default_value_t = 8050)]
        port: u16,
    },
    /// Print the summary of one selection and exit.
    Inspect {
        #[command(flatten)]
        data: DataArgs,
        #[arg(long)]
        symbol: String,
        /// Ordinal 0-6 or one of 1d, 7d, 30d, 90d, 1y, 5y, all.
        #[arg(long, default_value = "30d")]
        window: Window,
        #[arg(long, default_value = "close")]
        field: PriceField,
    },
}

#[derive(Args)]
struct DataArgs {
    /// Symbol catalog (TOML). Without it the built-in four-stock catalog is used.
    #[arg(long, value_name = "FILE", env = "STOCK_DASHBOARD_CONFIG")]
    config: Option<PathBuf>,
    /// Overrides the catalog's data directory.
    #[arg(long, value_name = "DIR", env = "STOCK_DASHBOARD_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

impl DataArgs {
    fn load_repository(&self) -> Result<SeriesRepository> {
        let mut catalog = match &self.config {
            Some(path) => load_catalog_path(path)
                .with_context(|| format!("load catalog {}", path.display()))?,
            None => SymbolCatalog::default(),
        };
        if let Some(dir) = &self.data_dir {
            catalog.data_dir = dir.clone();
        }
        SeriesRepository::load(&catalog).context("failed to load price series")
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Cmd::Serve { data, bind, port } => {
            let repo = data.load_repository()?;
            let app = stock_dashboard::app(repo);

            let listener = tokio::net::TcpListener::bind((bind.as_str(), port))
                .await
                .with_context(|| format!("bind {bind}:{port}"))?;
            tracing::info!("Stock dashboard listening on http://{}", listener.local_addr()?);

            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal())
                .await?;
        }
        Cmd::Inspect {
            data,
            symbol,
            window,
            field,
        } => {
            let repo = data.load_repository()?;
            let sel = WindowSelector::new(&repo).select(&symbol, window, field)?;
            println!("{} ({})", sel.name, sel.symbol);
            println!("window:      {} [{}]", sel.window.label(), sel.granularity.as_str());
            println!("rows:        {}", sel.bars.len());
            if let (Some(first), Some(last)) = (sel.bars.first(), sel.bars.last()) {
                println!("from:        {}", first.timestamp);
                println!("to:          {}", last.timestamp);
            }
            println!("highest {field}: {}", sel.summary.highest());
            println!("lowest {field}:  {}", sel.summary.lowest());
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install Ctrl+C handler: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, gracefully stopping");
}
