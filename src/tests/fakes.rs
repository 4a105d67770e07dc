//! In-memory stand-ins for the upstream services, recording every call.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::clients::{AccountSource, ClientError, NftSource, ProfileSource};
use crate::models::{
    Account, AccountFilters, Avatar, Network, Nft, NftResult, NftSearchFilters, NftSearchPage,
    Profile,
};
use crate::search::{CreatorSearch, SearchSettings};

pub fn account(address: &str, collections: u64) -> Account {
    Account {
        id: address.to_string(),
        address: address.to_string(),
        earned: "0".to_string(),
        royalties: "0".to_string(),
        spent: "0".to_string(),
        collections,
        ..Default::default()
    }
}

pub fn profile(address: &str, name: Option<&str>) -> Profile {
    Profile {
        avatars: vec![Avatar {
            eth_address: address.to_string(),
            name: name.map(str::to_string),
        }],
    }
}

pub fn ens_result(owner: &str, name: &str) -> NftResult {
    NftResult {
        nft: Nft {
            owner: owner.to_string(),
            name: name.to_string(),
            id: None,
            contract_address: None,
            token_id: None,
        },
    }
}

enum NftPages {
    Repeat(NftSearchPage),
    Sequence(Vec<NftSearchPage>),
}

pub struct FakeMarketplace {
    accounts: Vec<Account>,
    accounts_by_network: HashMap<Network, Vec<Account>>,
    accounts_error: Option<String>,
    network_errors: HashMap<Network, String>,
    nft_pages: NftPages,
    nft_error: Option<String>,
    nft_delays: HashMap<String, Duration>,
    profiles: Vec<Profile>,
    profiles_error: Option<String>,
    pub account_calls: Mutex<Vec<AccountFilters>>,
    pub nft_calls: Mutex<Vec<NftSearchFilters>>,
    pub profile_calls: Mutex<Vec<Vec<String>>>,
}

impl Default for FakeMarketplace {
    fn default() -> Self {
        Self {
            accounts: Vec::new(),
            accounts_by_network: HashMap::new(),
            accounts_error: None,
            network_errors: HashMap::new(),
            nft_pages: NftPages::Sequence(Vec::new()),
            nft_error: None,
            nft_delays: HashMap::new(),
            profiles: Vec::new(),
            profiles_error: None,
            account_calls: Mutex::new(Vec::new()),
            nft_calls: Mutex::new(Vec::new()),
            profile_calls: Mutex::new(Vec::new()),
        }
    }
}

impl FakeMarketplace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accounts(mut self, accounts: Vec<Account>) -> Self {
        self.accounts = accounts;
        self
    }

    pub fn with_network_accounts(mut self, network: Network, accounts: Vec<Account>) -> Self {
        self.accounts_by_network.insert(network, accounts);
        self
    }

    pub fn failing_accounts(mut self, message: &str) -> Self {
        self.accounts_error = Some(message.to_string());
        self
    }

    pub fn failing_network(mut self, network: Network, message: &str) -> Self {
        self.network_errors.insert(network, message.to_string());
        self
    }

    /// Every name search request answers with the same page.
    pub fn with_repeated_page(mut self, data: Vec<NftResult>, total: u64) -> Self {
        self.nft_pages = NftPages::Repeat(NftSearchPage { data, total });
        self
    }

    /// Request `i` answers with `pages[i]`; later requests get an empty page.
    pub fn with_pages(mut self, pages: Vec<NftSearchPage>) -> Self {
        self.nft_pages = NftPages::Sequence(pages);
        self
    }

    pub fn failing_nfts(mut self, message: &str) -> Self {
        self.nft_error = Some(message.to_string());
        self
    }

    pub fn with_nft_delay(mut self, term: &str, delay: Duration) -> Self {
        self.nft_delays.insert(term.to_string(), delay);
        self
    }

    pub fn with_profiles(mut self, profiles: Vec<Profile>) -> Self {
        self.profiles = profiles;
        self
    }

    pub fn failing_profiles(mut self, message: &str) -> Self {
        self.profiles_error = Some(message.to_string());
        self
    }

    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn account_calls(&self) -> Vec<AccountFilters> {
        self.account_calls.lock().unwrap().clone()
    }

    pub fn nft_calls(&self) -> Vec<NftSearchFilters> {
        self.nft_calls.lock().unwrap().clone()
    }

    pub fn profile_calls(&self) -> Vec<Vec<String>> {
        self.profile_calls.lock().unwrap().clone()
    }
}

pub fn creator_search(fake: &Arc<FakeMarketplace>, settings: SearchSettings) -> CreatorSearch {
    CreatorSearch::new(fake.clone(), fake.clone(), fake.clone(), settings)
}

#[async_trait]
impl AccountSource for FakeMarketplace {
    async fn fetch_accounts(&self, filters: &AccountFilters) -> Result<Vec<Account>, ClientError> {
        self.account_calls.lock().unwrap().push(filters.clone());

        if let Some(message) = &self.accounts_error {
            return Err(ClientError::Api(message.clone()));
        }
        if let Some(network) = filters.network {
            if let Some(message) = self.network_errors.get(&network) {
                return Err(ClientError::Api(message.clone()));
            }
            if let Some(accounts) = self.accounts_by_network.get(&network) {
                return Ok(accounts.clone());
            }
        }
        Ok(self.accounts.clone())
    }
}

#[async_trait]
impl NftSource for FakeMarketplace {
    async fn fetch_nfts(&self, filters: &NftSearchFilters) -> Result<NftSearchPage, ClientError> {
        let index = {
            let mut calls = self.nft_calls.lock().unwrap();
            calls.push(filters.clone());
            calls.len() - 1
        };

        if let Some(delay) = self.nft_delays.get(&filters.search) {
            tokio::time::sleep(*delay).await;
        }
        if let Some(message) = &self.nft_error {
            return Err(ClientError::Api(message.clone()));
        }

        Ok(match &self.nft_pages {
            NftPages::Repeat(page) => page.clone(),
            NftPages::Sequence(pages) => pages.get(index).cloned().unwrap_or_default(),
        })
    }
}

#[async_trait]
impl ProfileSource for FakeMarketplace {
    async fn fetch_profiles(&self, addresses: &[String]) -> Result<Vec<Profile>, ClientError> {
        self.profile_calls.lock().unwrap().push(addresses.to_vec());

        if let Some(message) = &self.profiles_error {
            return Err(ClientError::Api(message.clone()));
        }
        Ok(self
            .profiles
            .iter()
            .filter(|profile| {
                profile
                    .avatars
                    .iter()
                    .any(|avatar| addresses.contains(&avatar.eth_address))
            })
            .cloned()
            .collect())
    }
}
