use std::sync::Arc;

use anyhow::{Context, Result};
use catalog_core::{
    config::load_settings, present::LOADING_MESSAGE, CatalogStore, HttpCatalogGateway,
    LoadOutcome, Selection, FEATURED_DISPLAY_LIMIT,
};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use url::Url;

mod render;

#[derive(Parser, Debug)]
struct Args {
    /// Address the storefront is served from; the API defaults to `<origin>/api`.
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    origin: String,
    /// Overrides `BACKEND_URL` and `storefront.toml`.
    #[arg(long)]
    backend_url: Option<String>,
    /// Category to list, or `all`.
    #[arg(long, default_value = "all")]
    category: String,
    #[arg(long, default_value_t = FEATURED_DISPLAY_LIMIT)]
    featured_limit: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(backend_url) = args.backend_url {
        settings.backend_url = Some(backend_url);
    }
    let origin =
        Url::parse(&args.origin).with_context(|| format!("invalid origin '{}'", args.origin))?;
    let gateway = HttpCatalogGateway::from_settings(&settings, &origin)?;
    info!(api = %gateway.api_base(), "storefront: loading catalog");

    let store = CatalogStore::new(Arc::new(gateway));
    println!("{LOADING_MESSAGE}");
    if let LoadOutcome::Failed(err) = store.load().await {
        info!("storefront: rendering partial catalog after failure: {err}");
    }

    let state = store.snapshot().await;
    let selection = Selection::parse(&args.category);
    print!(
        "{}",
        render::render_page(&state, &selection, args.featured_limit)
    );

    Ok(())
}
