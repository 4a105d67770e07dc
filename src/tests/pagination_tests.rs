#[cfg(test)]
mod tests {
    use crate::models::{NftCategory, NftSearchPage};
    use crate::search::{collect_ens_results, PageState, SearchSettings, DEFAULT_FIRST_VALUE, MAX_ENS_SEARCH_REQUESTS};
    use crate::tests::fakes::{ens_result, FakeMarketplace};

    const TERM: &str = "a search term";

    #[tokio::test]
    async fn test_pagination_stops_at_request_cap() {
        let total = (MAX_ENS_SEARCH_REQUESTS * DEFAULT_FIRST_VALUE + 1) as u64;
        let fake = FakeMarketplace::new()
            .with_repeated_page(vec![ens_result("addr1", "one"), ens_result("addr2", "two")], total);

        let search = collect_ens_results(&fake, TERM, &SearchSettings::default()).await.unwrap();

        assert_eq!(search.state, PageState::Capped);
        assert_eq!(search.requests, MAX_ENS_SEARCH_REQUESTS);
        assert_eq!(search.results.len(), 2 * MAX_ENS_SEARCH_REQUESTS as usize);

        let calls = fake.nft_calls();
        assert_eq!(calls.len(), MAX_ENS_SEARCH_REQUESTS as usize);
        for (i, call) in calls.iter().enumerate() {
            assert_eq!(call.category, NftCategory::Ens);
            assert_eq!(call.search, TERM);
            assert_eq!(call.first, DEFAULT_FIRST_VALUE);
            assert_eq!(call.skip, i as u32 * DEFAULT_FIRST_VALUE);
        }
    }

    #[tokio::test]
    async fn test_pagination_stops_when_total_is_reached() {
        // Two results per page, total reached on the third round
        let fake = FakeMarketplace::new()
            .with_repeated_page(vec![ens_result("addr1", "one"), ens_result("addr2", "two")], 6);

        let search = collect_ens_results(&fake, TERM, &SearchSettings::default()).await.unwrap();

        assert_eq!(search.state, PageState::Done);
        assert_eq!(search.requests, 3);
        assert_eq!(fake.nft_calls().len(), 3);
        assert_eq!(search.owners(), vec!["addr1".to_string(), "addr2".to_string()]);
    }

    #[tokio::test]
    async fn test_pagination_full_pages_until_total() {
        let page = |offset: usize| NftSearchPage {
            data: (0..DEFAULT_FIRST_VALUE as usize)
                .map(|i| ens_result(&format!("owner{}", offset + i), &format!("name{}", offset + i)))
                .collect(),
            total: 3 * DEFAULT_FIRST_VALUE as u64,
        };
        let fake = FakeMarketplace::new().with_pages(vec![page(0), page(20), page(40), page(60)]);

        let search = collect_ens_results(&fake, TERM, &SearchSettings::default()).await.unwrap();

        assert_eq!(search.state, PageState::Done);
        assert_eq!(search.requests, 3);
        assert_eq!(search.owners().len(), 60);
    }

    #[tokio::test]
    async fn test_pagination_stops_on_empty_page() {
        // The server claims more matches than it returns
        let fake = FakeMarketplace::new().with_pages(vec![NftSearchPage {
            data: vec![ens_result("addr1", "one")],
            total: 50,
        }]);

        let search = collect_ens_results(&fake, TERM, &SearchSettings::default()).await.unwrap();

        assert_eq!(search.state, PageState::Done);
        assert_eq!(search.requests, 2);
        assert_eq!(search.results.len(), 1);
    }

    #[tokio::test]
    async fn test_pagination_uses_configured_limits() {
        let fake = FakeMarketplace::new().with_repeated_page(vec![ens_result("addr1", "one")], 1000);
        let settings = SearchSettings::new(10, 5, 2);

        let search = collect_ens_results(&fake, TERM, &settings).await.unwrap();

        assert_eq!(search.state, PageState::Capped);
        let skips: Vec<u32> = fake.nft_calls().iter().map(|call| call.skip).collect();
        assert_eq!(skips, vec![5, 15]);
        assert!(fake.nft_calls().iter().all(|call| call.first == 10));
    }

    #[tokio::test]
    async fn test_zero_limits_are_clamped_to_one_request() {
        let fake = FakeMarketplace::new().with_repeated_page(vec![ens_result("addr1", "one")], 1000);

        let search = collect_ens_results(&fake, TERM, &SearchSettings::new(0, 0, 0)).await.unwrap();

        assert_eq!(search.requests, 1);
        assert_eq!(fake.nft_calls()[0].first, 1);
    }

    #[tokio::test]
    async fn test_pagination_failure_is_returned() {
        let fake = FakeMarketplace::new().failing_nfts("request failed with error");

        let err = collect_ens_results(&fake, TERM, &SearchSettings::default()).await.unwrap_err();

        assert_eq!(err.to_string(), "request failed with error");
        assert_eq!(fake.nft_calls().len(), 1);
    }
}
