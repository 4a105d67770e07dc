// Marketplace records shared by the upstream clients, the search aggregator
// and the HTTP layer. Field names follow the upstream JSON (camelCase).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Network {
    Ethereum,
    Matic,
}

impl Network {
    pub const ALL: [Network; 2] = [Network::Ethereum, Network::Matic];

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Ethereum => "ETHEREUM",
            Network::Matic => "MATIC",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountSortBy {
    MostEarned,
    MostSales,
    MostPurchases,
    MostRoyalties,
    MostSpent,
    MostCollections,
}

impl AccountSortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountSortBy::MostEarned => "most_earned",
            AccountSortBy::MostSales => "most_sales",
            AccountSortBy::MostPurchases => "most_purchases",
            AccountSortBy::MostRoyalties => "most_royalties",
            AccountSortBy::MostSpent => "most_spent",
            AccountSortBy::MostCollections => "most_collections",
        }
    }
}

/// Filters accepted by the accounts (metrics) API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountFilters {
    pub address: Option<Vec<String>>,
    pub network: Option<Network>,
    pub sort_by: Option<AccountSortBy>,
    pub first: Option<u32>,
    pub skip: Option<u32>,
}

impl AccountFilters {
    /// Top accounts by number of published collections, no address filter.
    pub fn top_creators() -> Self {
        Self {
            sort_by: Some(AccountSortBy::MostCollections),
            ..Default::default()
        }
    }

    /// Metrics for exactly `addresses`, sorted by number of collections.
    pub fn for_addresses(addresses: Vec<String>) -> Self {
        Self {
            address: Some(addresses),
            sort_by: Some(AccountSortBy::MostCollections),
            ..Default::default()
        }
    }

    pub fn with_network(&self, network: Network) -> Self {
        Self {
            network: Some(network),
            ..self.clone()
        }
    }

    /// Query pairs for the accounts endpoint. Addresses repeat the `address` key.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(addresses) = &self.address {
            for address in addresses {
                query.push(("address", address.clone()));
            }
        }
        if let Some(network) = self.network {
            query.push(("network", network.as_str().to_string()));
        }
        if let Some(sort_by) = self.sort_by {
            query.push(("sortBy", sort_by.as_str().to_string()));
        }
        if let Some(first) = self.first {
            query.push(("first", first.to_string()));
        }
        if let Some(skip) = self.skip {
            query.push(("skip", skip.to_string()));
        }
        query
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NftCategory {
    Ens,
}

/// One page request against the name (ENS) search API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NftSearchFilters {
    pub category: NftCategory,
    pub search: String,
    pub first: u32,
    pub skip: u32,
}

impl NftSearchFilters {
    pub fn ens(search: &str, first: u32, skip: u32) -> Self {
        Self {
            category: NftCategory::Ens,
            search: search.to_string(),
            first,
            skip,
        }
    }

    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let category = match self.category {
            NftCategory::Ens => "ens",
        };
        vec![
            ("category", category.to_string()),
            ("search", self.search.clone()),
            ("first", self.first.to_string()),
            ("skip", self.skip.to_string()),
        ]
    }
}

/// Account metrics snapshot. Amounts in wei are kept as decimal strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    #[serde(default)]
    pub id: String,
    pub address: String,
    #[serde(default)]
    pub earned: String,
    #[serde(default)]
    pub purchases: u64,
    #[serde(default)]
    pub royalties: String,
    #[serde(default)]
    pub sales: u64,
    #[serde(default)]
    pub spent: String,
    #[serde(default)]
    pub collections: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nft {
    pub owner: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, rename = "contractAddress", skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,
    #[serde(default, rename = "tokenId", skip_serializing_if = "Option::is_none")]
    pub token_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftResult {
    pub nft: Nft,
}

/// A page of name search results and the server-reported number of matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftSearchPage {
    #[serde(default)]
    pub data: Vec<NftResult>,
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Avatar {
    pub eth_address: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub avatars: Vec<Avatar>,
}

/// An account joined with the name shown for it in creator listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatorAccount {
    #[serde(flatten)]
    pub account: Account,
    pub name: String,
}

impl CreatorAccount {
    pub fn address(&self) -> &str {
        &self.account.address
    }
}

/// The last resolved search of one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCache {
    pub last_search_term: Option<String>,
    pub last_results: Vec<CreatorAccount>,
    pub last_ens_matches: Vec<NftResult>,
    pub fetched_at: Option<DateTime<Utc>>,
}

impl SearchCache {
    /// True when `term` can be answered from this cache.
    pub fn is_hit(&self, term: &str) -> bool {
        !term.is_empty() && self.last_search_term.as_deref() == Some(term)
    }
}

/// Result of a successful creator search, plus the cache value to keep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub search: String,
    pub creators: Vec<CreatorAccount>,
    pub cache: SearchCache,
}

pub type AccountMetrics = BTreeMap<Network, Vec<Account>>;

// API response models
#[derive(Debug, Serialize)]
pub struct CreatorsResponse {
    pub search: String,
    pub creators: Vec<CreatorAccount>,
}
