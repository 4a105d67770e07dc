use futures::future::try_join_all;
use tracing::{debug, warn};

use crate::clients::{AccountSource, ClientError};
use crate::models::{AccountFilters, AccountMetrics, Network};

/// Account metrics for `filters` on every network, requested concurrently.
///
/// Fails with the first network request that fails.
pub async fn fetch_account_metrics(
    accounts: &dyn AccountSource,
    filters: &AccountFilters,
) -> Result<AccountMetrics, ClientError> {
    let requests = Network::ALL.into_iter().map(|network| {
        let filters = filters.with_network(network);
        async move {
            let data = accounts.fetch_accounts(&filters).await?;
            Ok::<_, ClientError>((network, data))
        }
    });

    let metrics: AccountMetrics = try_join_all(requests)
        .await
        .inspect_err(|e| warn!("Failed to fetch account metrics: {}", e))?
        .into_iter()
        .collect();

    debug!("Fetched account metrics for {} networks", metrics.len());
    Ok(metrics)
}
