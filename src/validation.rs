use thiserror::Error;

/// Longest search term forwarded to the name search.
pub const MAX_SEARCH_TERM_LENGTH: usize = 100;

/// Most addresses accepted by one metrics lookup.
pub const MAX_METRICS_ADDRESSES: usize = 100;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid Ethereum address format: {0}")]
    InvalidEthereumAddress(String),
}

/// Trims the term; an absent or blank term means "top creators".
pub fn validate_search_term(search: Option<&str>) -> Result<String, ValidationError> {
    let term = search.unwrap_or_default().trim();
    if term.chars().count() > MAX_SEARCH_TERM_LENGTH {
        return Err(ValidationError::InvalidParameter(format!(
            "search must be at most {} characters",
            MAX_SEARCH_TERM_LENGTH
        )));
    }
    Ok(term.to_string())
}

pub fn validate_ethereum_address(address: &str) -> Result<(), ValidationError> {
    if address.trim().is_empty() {
        return Err(ValidationError::MissingParameter("address".to_string()));
    }

    // 0x followed by 20 bytes of hex
    let valid = address.len() == 42
        && address.starts_with("0x")
        && address[2..].chars().all(|c| c.is_ascii_hexdigit());

    if !valid {
        return Err(ValidationError::InvalidEthereumAddress(address.to_string()));
    }

    Ok(())
}

/// Splits a comma separated address list, validating every entry.
pub fn validate_address_list(addresses: &str) -> Result<Vec<String>, ValidationError> {
    let list: Vec<String> = addresses
        .split(',')
        .map(str::trim)
        .filter(|address| !address.is_empty())
        .map(str::to_string)
        .collect();

    if list.is_empty() {
        return Err(ValidationError::MissingParameter("address".to_string()));
    }
    if list.len() > MAX_METRICS_ADDRESSES {
        return Err(ValidationError::InvalidParameter(format!(
            "at most {} addresses are allowed",
            MAX_METRICS_ADDRESSES
        )));
    }

    for address in &list {
        validate_ethereum_address(address)?;
    }

    Ok(list)
}
