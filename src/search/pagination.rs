use std::collections::HashSet;

use tracing::{debug, info};

use crate::clients::{ClientError, NftSource};
use crate::models::{NftResult, NftSearchFilters};
use crate::search::SearchSettings;

/// Where the name search pagination stopped.
///
/// A failed request is not a state here: it aborts the search through the
/// returned error and nothing gathered so far is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    Fetching,
    /// Every match was retrieved, or the server returned an empty page.
    Done,
    /// The request cap was hit first; what was gathered is the final result.
    Capped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnsSearch {
    pub results: Vec<NftResult>,
    pub requests: u32,
    pub state: PageState,
}

impl EnsSearch {
    /// Owner addresses in order of first appearance, without repeats.
    pub fn owners(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.results
            .iter()
            .filter(|result| seen.insert(result.nft.owner.as_str()))
            .map(|result| result.nft.owner.clone())
            .collect()
    }
}

/// Pages through the name search for `term`, one request at a time.
///
/// Each round asks for `page_size` results at the next offset. It continues
/// while fewer results than the reported total were gathered and fewer than
/// `max_requests` requests were issued. An empty page ends it early.
pub async fn collect_ens_results(
    nfts: &dyn NftSource,
    term: &str,
    settings: &SearchSettings,
) -> Result<EnsSearch, ClientError> {
    let mut results = Vec::new();
    let mut requests = 0;
    let mut skip = settings.initial_skip;
    let mut state = PageState::Fetching;

    while state == PageState::Fetching {
        let filters = NftSearchFilters::ens(term, settings.page_size, skip);
        let page = nfts.fetch_nfts(&filters).await?;
        requests += 1;

        let received = page.data.len();
        results.extend(page.data);
        debug!(
            "Name search round {} for '{}': {} results, {} of {} gathered",
            requests,
            term,
            received,
            results.len(),
            page.total
        );

        state = if received == 0 || results.len() as u64 >= page.total {
            PageState::Done
        } else if requests >= settings.max_requests {
            PageState::Capped
        } else {
            PageState::Fetching
        };
        skip = skip.saturating_add(settings.page_size);
    }

    if state == PageState::Capped {
        info!(
            "Name search for '{}' capped after {} requests with {} results",
            term,
            requests,
            results.len()
        );
    }

    Ok(EnsSearch {
        results,
        requests,
        state,
    })
}
