use std::io::Write;
use std::path::Path;

use url::Url;

use crate::app::{AppContext, Result};
use crate::preview;

pub async fn feed(
    ctx: &AppContext,
    url: &Url,
    item_selector: &str,
    title_selector: &str,
    output: Option<&Path>,
) -> Result<()> {
    let bytes = ctx
        .pipeline
        .generate_feed(url, item_selector, title_selector)
        .await?;
    write_output(&bytes, output)
}

pub async fn items(ctx: &AppContext, url: &Url, item_selector: &str, title_selector: &str) -> Result<()> {
    let items = ctx
        .pipeline
        .extract_items(url, item_selector, title_selector)
        .await?;

    if items.is_empty() {
        eprintln!("No items matched `{}` with titles `{}`", item_selector, title_selector);
    }

    let json = serde_json::to_string_pretty(&items)?;
    println!("{}", json);
    Ok(())
}

pub async fn preview(ctx: &AppContext, url: &Url, output: Option<&Path>) -> Result<()> {
    let markup = preview::fetch_preview(ctx.fetcher.as_ref(), url).await?;
    write_output(markup.as_bytes(), output)
}

fn write_output(bytes: &[u8], output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, bytes)?;
            println!("Wrote {} bytes to {}", bytes.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
