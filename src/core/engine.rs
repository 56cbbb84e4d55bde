use crate::core::{EnrichReport, Pipeline};
use crate::utils::error::Result;

pub struct EnrichEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EnrichEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<EnrichReport> {
        tracing::info!("Starting catalog enrichment...");

        // Extract
        let catalog = self.pipeline.extract().await?;
        tracing::info!("Extracted {} products", catalog.products.len());

        // Transform
        let result = self.pipeline.transform(catalog).await?;
        tracing::info!(
            "Linked {} of {} products, colored {} spec scores",
            result.stats.linked,
            result.stats.total,
            result.stats.colored
        );

        // Load
        let report = self.pipeline.load(result).await?;
        for path in &report.outputs {
            tracing::info!("Output saved to: {}", path);
        }

        Ok(report)
    }
}
