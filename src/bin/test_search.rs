use creator_search_service::{build_search, config::Config, SearchCache};
use tracing::{error, info, Level};

/// Runs one creator search against the configured live services.
///
/// Usage: `test_search [term]`. Running it twice in a row with the same
/// term shows the cache hit path.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup tracing
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .init();

    let term = std::env::args().nth(1).unwrap_or_default();
    let config = Config::from_env();
    let search = build_search(&config)?;

    info!("Searching creators for '{}' with {:?}", term, search.settings());

    let first = match search.search_creators(&term, &SearchCache::default()).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Search failed: {}", e);
            return Err(e.into());
        }
    };
    for creator in &first.creators {
        info!(
            "{} {} ({} collections)",
            creator.address(),
            creator.name,
            creator.account.collections
        );
    }
    info!("✅ {} creators found", first.creators.len());

    let second = search.search_creators(&term, &first.cache).await?;
    info!("✅ Repeated search returned {} creators", second.creators.len());

    Ok(())
}
