use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pagefeed::app::AppContext;
use pagefeed::cli::{commands, Cli, Commands};
use pagefeed::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only the feed
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pagefeed=warn")))
        .init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply_overrides(&mut config);

    let ctx = AppContext::new(config)?;

    match cli.command {
        Commands::Feed {
            url,
            item,
            title,
            output,
        } => {
            commands::feed(&ctx, &url, &item, &title, output.as_deref()).await?;
        }
        Commands::Items { url, item, title } => {
            commands::items(&ctx, &url, &item, &title).await?;
        }
        Commands::Preview { url, output } => {
            commands::preview(&ctx, &url, output.as_deref()).await?;
        }
    }

    Ok(())
}
