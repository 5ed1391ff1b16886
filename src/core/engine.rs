use crate::core::{Pipeline, RunSummary};
use crate::utils::error::Result;

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("Starting zoo report");

        tracing::info!("Reading animals...");
        let lines = self.pipeline.extract().await?;
        tracing::info!("Read {} lines", lines.len());

        tracing::info!("Classifying records...");
        let result = self.pipeline.transform(lines).await?;
        tracing::info!(
            "Accepted {} records, skipped {}",
            result.tally.total(),
            result.rejected.len()
        );

        tracing::info!("Writing report...");
        let summary = self.pipeline.load(result).await?;
        tracing::info!("Report saved to: {}", summary.output);

        Ok(summary)
    }
}
