//! Application state for the HTTP API

use std::sync::Arc;

use seolens_pipeline::{AnalysisPipeline, InsertionPipeline};
use seolens_providers::{ProviderSet, ProvidersConfig, Result};

/// The two pipelines, shared read-only by every request
#[derive(Clone)]
pub struct AppState {
    pub analysis: AnalysisPipeline,
    pub insertion: InsertionPipeline,
}

impl AppState {
    pub fn new(analysis: AnalysisPipeline, insertion: InsertionPipeline) -> Self {
        Self {
            analysis,
            insertion,
        }
    }

    /// Wire both pipelines to the live providers
    pub fn from_config(config: &ProvidersConfig) -> Result<Self> {
        let providers = ProviderSet::from_config(config)?;

        let analysis = AnalysisPipeline::new(
            Arc::new(providers.readability),
            Arc::new(providers.topics),
            Arc::new(providers.sentiment),
            Arc::new(providers.keywords),
        );
        let insertion =
            InsertionPipeline::new(Arc::new(providers.similarity), Arc::new(providers.paraphraser));

        Ok(Self::new(analysis, insertion))
    }
}
