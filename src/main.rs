//! Portfolio search index - build entry point
//!
//! Loads the content collections, builds the search index and writes it,
//! together with the site metadata, into the build output directory.

use anyhow::Result;
use portfolio_search_index::{
    AsyncContentStore, AsyncContentStoreImpl, Config, ContentRepository, FileContentStore,
    IndexWriter, SearchIndexBuilder, StoreContentRepository,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can seed the log filter
    let config = Config::from_env();

    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        content_dir = %config.content_dir.display(),
        output_dir = %config.output_dir.display(),
        policy = %config.failure_policy,
        site_version = %config.site.version,
        "Building search index"
    );

    // Wire the content pipeline
    let store = Arc::new(AsyncContentStoreImpl::new(FileContentStore::new(
        &config.content_dir,
    ))) as Arc<dyn AsyncContentStore>;
    let repository = Arc::new(StoreContentRepository::new(store)) as Arc<dyn ContentRepository>;

    let builder = SearchIndexBuilder::new(repository).with_policy(config.failure_policy);

    let index = builder.build_index().await;

    let writer = IndexWriter::new(&config.output_dir, config.pretty_output);
    writer.write_index(&index)?;
    writer.write_site_metadata(&config.site)?;

    info!("{}", builder.metrics().summary());
    Ok(())
}
