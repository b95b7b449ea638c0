//! # Biblia Main Entry Point
//!
//! Dispatches between the proxy server (`serve`) and the terminal Bible
//! viewer (`view`).

use anyhow::{bail, Result};
use biblia::client::{router, views, BibleService, BibleViewModel};
use biblia::cmd_args::{Command, CommandLineArgs};
use biblia::config::Config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = CommandLineArgs::parse();
    let mut config = Config::from_env();

    match args.command() {
        Command::Serve { port } => {
            if let Some(port) = port {
                config.port = *port;
            }
            biblia::server::serve(config).await
        }
        Command::View { path, version } => run_view(config, path, version).await,
    }
}

/// Resolve the route, run the fetch, and print the page
async fn run_view(config: Config, path: &str, version: &str) -> Result<()> {
    if router::resolve(path).is_none() {
        bail!("no route matches '{path}'");
    }

    let service = BibleService::new(config)?;
    let mut view_model = BibleViewModel::new();

    // First frame shows the loading state, the second the settled one.
    println!("{}\n", views::render_page(&view_model));
    view_model.load(&service, version).await;
    println!("{}", views::render_page(&view_model));

    Ok(())
}
