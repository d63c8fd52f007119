//! Core JsonExtractor implementation

use crate::error::ExtractorError;
use crate::parser::extract_json_object;
use crate::prompt::PromptBuilder;
use crate::types::{ExtractionMetadata, ExtractionRequest, ExtractionResult};
use metaform_domain::LlmProvider;
use metaform_schema::{analyze_cached, ComplexityCache, ComplexityReport};
use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tracing::{debug, info};

/// Structures document text into JSON following a schema
pub struct JsonExtractor<L>
where
    L: LlmProvider,
{
    llm_provider: L,
    cache: Option<Arc<ComplexityCache>>,
}

impl<L> JsonExtractor<L>
where
    L: LlmProvider,
    L::Error: std::fmt::Display,
{
    /// Create a new extractor using the process-wide complexity cache
    pub fn new(llm_provider: L) -> Self {
        Self {
            llm_provider,
            cache: None,
        }
    }

    /// Use a private complexity cache instead of the process-wide one
    pub fn with_cache(mut self, cache: Arc<ComplexityCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// The wrapped model provider
    pub fn provider(&self) -> &L {
        &self.llm_provider
    }

    /// Complexity report for a schema, served from the cache when possible
    pub fn analyze(&self, schema: &serde_json::Value) -> ComplexityReport {
        let metrics = match &self.cache {
            Some(cache) => cache.analyze(schema),
            None => analyze_cached(schema),
        };
        metrics.report()
    }

    /// Build the prompt that [`extract`](Self::extract) would send
    pub fn prompt_for(&self, request: &ExtractionRequest) -> String {
        let report = self.analyze(&request.schema);
        PromptBuilder::new(&request.schema, &request.text, report.strategy).build()
    }

    /// Run analysis, prompt construction, the model call and JSON carving
    ///
    /// # Errors
    ///
    /// Model failures are returned as [`ExtractorError::Llm`]. Carving and
    /// parse failures carry the raw model output.
    pub fn extract(&self, request: ExtractionRequest) -> Result<ExtractionResult, ExtractorError> {
        let started = Instant::now();

        let report = self.analyze(&request.schema);
        info!(
            "Schema score {} ({} fields, depth {}, {} enums): {}",
            report.metrics.score,
            report.metrics.field_count,
            report.metrics.max_depth,
            report.metrics.enum_count,
            report.strategy
        );

        let prompt = PromptBuilder::new(&request.schema, &request.text, report.strategy).build();
        debug!("Prompt length: {} chars", prompt.len());

        let raw_output = self
            .llm_provider
            .generate(&prompt)
            .map_err(|e| ExtractorError::Llm(e.to_string()))?;
        debug!("LLM response length: {} chars", raw_output.len());

        let json = extract_json_object(&raw_output)?;

        let metadata = ExtractionMetadata {
            model_name: self.llm_provider.model_name().to_string(),
            timestamp: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
            text_chars: request.text.chars().count(),
            processing_time_ms: started.elapsed().as_millis() as u64,
        };

        info!(
            "Extraction complete with {} in {} ms",
            metadata.model_name, metadata.processing_time_ms
        );

        Ok(ExtractionResult {
            report,
            prompt,
            raw_output,
            json,
            metadata,
        })
    }
}
