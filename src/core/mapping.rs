use crate::domain::model::{FetchFailure, MappingReport};
use crate::domain::ports::AccountSource;
use crate::utils::error::Result;

/// Lists every account and resolves its name, one account at a time.
///
/// A failed discovery aborts the build. A failed detail lookup only drops
/// that account: it is logged and recorded in [`MappingReport::failures`].
pub async fn build_account_mapping<A>(source: &A) -> Result<MappingReport>
where
    A: AccountSource + ?Sized,
{
    let account_ids = source.fetch_account_ids().await?;
    tracing::info!("Discovered {} accounts", account_ids.len());

    let mut report = MappingReport::default();
    for account_id in account_ids {
        match source.fetch_account_name(&account_id).await {
            Ok(name) => {
                tracing::debug!("Resolved account {} -> {}", account_id, name);
                report.mapping.insert(account_id, name);
            }
            Err(e) => {
                tracing::warn!(account = %account_id, "Skipping account: {}", e);
                report.failures.push(FetchFailure {
                    account_id,
                    message: e.to_string(),
                });
            }
        }
    }

    Ok(report)
}
