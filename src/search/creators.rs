use std::collections::HashSet;

use crate::models::{Account, CreatorAccount, NftResult, Profile};

/// `0x1234...abcd` form of an address. Short inputs are returned as they are.
pub fn shorten_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Joins accounts with their profiles, keeping the order of `accounts`.
///
/// The display name is the name of the avatar whose `ethAddress` equals the
/// account address (exact match), or the shortened address when there is no
/// such avatar or its name is empty. Repeated addresses keep their first row.
pub fn from_profiles_to_creators(profiles: &[Profile], accounts: &[Account]) -> Vec<CreatorAccount> {
    let mut seen = HashSet::new();

    accounts
        .iter()
        .filter(|account| seen.insert(account.address.as_str()))
        .map(|account| {
            let name = profiles
                .iter()
                .flat_map(|profile| profile.avatars.iter())
                .find(|avatar| avatar.eth_address == account.address)
                .and_then(|avatar| avatar.name.as_deref())
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| shorten_address(&account.address));

            CreatorAccount {
                account: account.clone(),
                name,
            }
        })
        .collect()
}

/// Replaces the creator name with the first name-search match it owns.
pub fn enhance_creator_name(creator: &mut CreatorAccount, results: &[NftResult]) {
    if let Some(result) = results
        .iter()
        .find(|result| result.nft.owner == creator.account.address)
    {
        creator.name = result.nft.name.clone();
    }
}
