use crate::core::mapping::build_account_mapping;
use crate::core::script::{render_script, ScriptOptions};
use crate::domain::model::{MappingReport, RunSummary};
use crate::domain::ports::{AccountSource, ConfigProvider, ScriptStorage};
use crate::utils::error::Result;

pub struct MapperEngine<A: AccountSource, S: ScriptStorage, C: ConfigProvider> {
    source: A,
    storage: S,
    config: C,
}

impl<A: AccountSource, S: ScriptStorage, C: ConfigProvider> MapperEngine<A, S, C> {
    pub fn new(source: A, storage: S, config: C) -> Self {
        Self {
            source,
            storage,
            config,
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub async fn build(&self) -> Result<MappingReport> {
        build_account_mapping(&self.source).await
    }

    /// Builds the mapping and atomically replaces the output script.
    ///
    /// Nothing is written when discovery fails.
    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("Querying accounts from {}", self.config.broker_url());
        let report = self.build().await?;

        if report.skipped() > 0 {
            tracing::warn!(
                "{} of {} accounts could not be resolved",
                report.skipped(),
                report.resolved() + report.skipped()
            );
        }

        let options = ScriptOptions {
            source_tag: self.config.source_tag().to_string(),
            target_tag: self.config.target_tag().to_string(),
        };
        let script = render_script(&report.mapping, &options);

        let output_path = self.config.output_path();
        self.storage
            .write_atomic(output_path, script.as_bytes())
            .await?;

        tracing::info!(
            "Wrote {} account mappings to {}",
            report.resolved(),
            output_path
        );

        Ok(RunSummary {
            output_path: output_path.to_string(),
            mappings_written: report.resolved(),
            accounts_skipped: report.skipped(),
        })
    }
}
