//! roadmap-dump: fetch one chapter view and print it as JSON
//!
//! Development tool for inspecting what the roadmap screen would receive.
//! Reads backend settings from `CODEPATH_API_URL` / `CODEPATH_API_KEY`
//! (and optionally `CODEPATH_DEFAULT_ROADMAP`).
//!
//! Usage:
//!
//! ```text
//! roadmap-dump [roadmap-id] [chapter]
//! ```
//!
//! Without a roadmap id, the default roadmap is used. Chapter defaults to 1.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use codepath_core::db::{RestStore, StoreConfig};
use codepath_core::services::RoadmapService;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let roadmap_id = args.next();
    let chapter: i64 = match args.next() {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("invalid chapter ordinal: {raw}"))?,
        None => 1,
    };

    let config = StoreConfig::from_env().context("backend configuration incomplete")?;
    let default_roadmap_id = config.default_roadmap_id.clone();

    let store = Arc::new(RestStore::new(config)?);
    let mut service = RoadmapService::new(store);
    if let Some(id) = default_roadmap_id {
        service = service.with_default_roadmap(id);
    }

    let view = match roadmap_id {
        Some(id) => service.load_chapter_view(&id, chapter).await?,
        None => service.load_default_view(chapter).await?,
    };

    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
