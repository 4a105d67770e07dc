use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::clients::{AccountSource, ClientError, NftSource, ProfileSource};
use crate::models::{
    Account, AccountFilters, CreatorAccount, NftResult, Profile, SearchCache, SearchOutcome,
};
use crate::search::creators::{enhance_creator_name, from_profiles_to_creators};
use crate::search::pagination::collect_ens_results;
use crate::search::{SearchError, SearchSettings};

/// Resolves creator listings from the accounts, name search and profile services.
#[derive(Clone)]
pub struct CreatorSearch {
    accounts: Arc<dyn AccountSource>,
    nfts: Arc<dyn NftSource>,
    profiles: Arc<dyn ProfileSource>,
    settings: SearchSettings,
}

impl CreatorSearch {
    pub fn new(
        accounts: Arc<dyn AccountSource>,
        nfts: Arc<dyn NftSource>,
        profiles: Arc<dyn ProfileSource>,
        settings: SearchSettings,
    ) -> Self {
        Self {
            accounts,
            nfts,
            profiles,
            settings,
        }
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    pub fn accounts(&self) -> &dyn AccountSource {
        self.accounts.as_ref()
    }

    /// Creators matching `term`, or the top creators when `term` is empty.
    ///
    /// A non-empty term equal to the cached one skips the name search and only
    /// refreshes profiles of the cached creators. `cache` is never modified;
    /// the cache to keep for the next call is part of the outcome. The first
    /// failing request fails the whole search.
    pub async fn search_creators(
        &self,
        term: &str,
        cache: &SearchCache,
    ) -> Result<SearchOutcome, SearchError> {
        let (creators, ens_matches) = if cache.is_hit(term) {
            debug!("Cache hit for search term: '{}'", term);
            let creators = self.refresh_cached(cache).await?;
            (creators, cache.last_ens_matches.clone())
        } else if term.is_empty() {
            debug!("Empty search term, fetching top creators");
            (self.top_creators().await?, Vec::new())
        } else {
            debug!("Cache miss for search term: '{}'", term);
            self.creators_by_name(term).await?
        };

        info!("Resolved {} creators for search term '{}'", creators.len(), term);

        let cache = SearchCache {
            last_search_term: Some(term.to_string()),
            last_results: creators.clone(),
            last_ens_matches: ens_matches,
            fetched_at: Some(Utc::now()),
        };

        Ok(SearchOutcome {
            search: term.to_string(),
            creators,
            cache,
        })
    }

    async fn refresh_cached(&self, cache: &SearchCache) -> Result<Vec<CreatorAccount>, ClientError> {
        let accounts: Vec<Account> = cache
            .last_results
            .iter()
            .map(|creator| creator.account.clone())
            .collect();
        let addresses: Vec<String> = accounts.iter().map(|account| account.address.clone()).collect();

        let profiles = self.fetch_profiles(&addresses).await?;
        let mut creators = from_profiles_to_creators(&profiles, &accounts);
        for creator in creators.iter_mut() {
            enhance_creator_name(creator, &cache.last_ens_matches);
        }
        Ok(creators)
    }

    async fn top_creators(&self) -> Result<Vec<CreatorAccount>, ClientError> {
        let accounts = self
            .accounts
            .fetch_accounts(&AccountFilters::top_creators())
            .await
            .inspect_err(|e| warn!("Failed to fetch top creators: {}", e))?;
        let addresses: Vec<String> = accounts.iter().map(|account| account.address.clone()).collect();

        let profiles = self.fetch_profiles(&addresses).await?;
        Ok(from_profiles_to_creators(&profiles, &accounts))
    }

    async fn creators_by_name(
        &self,
        term: &str,
    ) -> Result<(Vec<CreatorAccount>, Vec<NftResult>), ClientError> {
        let ens = collect_ens_results(self.nfts.as_ref(), term, &self.settings)
            .await
            .inspect_err(|e| warn!("Name search for '{}' failed: {}", term, e))?;

        let owners = ens.owners();
        if owners.is_empty() {
            debug!("No names match '{}'", term);
            return Ok((Vec::new(), ens.results));
        }

        let filters = AccountFilters::for_addresses(owners.clone());
        let (accounts, profiles) = tokio::try_join!(
            self.accounts.fetch_accounts(&filters),
            self.fetch_profiles(&owners),
        )?;

        let mut creators = from_profiles_to_creators(&profiles, &accounts);
        for creator in creators.iter_mut() {
            enhance_creator_name(creator, &ens.results);
        }
        Ok((creators, ens.results))
    }

    async fn fetch_profiles(&self, addresses: &[String]) -> Result<Vec<Profile>, ClientError> {
        if addresses.is_empty() {
            return Ok(Vec::new());
        }
        self.profiles
            .fetch_profiles(addresses)
            .await
            .inspect_err(|e| warn!("Failed to fetch profiles: {}", e))
    }
}
