//! Integration tests for the JsonExtractor

#[cfg(test)]
mod tests {
    use crate::{BASE_INSTRUCTION, ExtractionRequest, ExtractorError, JsonExtractor};
    use metaform_llm::MockProvider;
    use metaform_schema::{ComplexityCache, Strategy};
    use serde_json::{json, Map, Value};
    use std::sync::Arc;

    fn request(schema: Value) -> ExtractionRequest {
        ExtractionRequest {
            schema,
            text: "Invoice 42 from Acme Corp, total 99.50 EUR".to_string(),
        }
    }

    /// Flat schema with `n` string properties
    fn wide_schema(n: usize) -> Value {
        let properties: Map<String, Value> = (0..n)
            .map(|i| (format!("field_{i}"), json!({"type": "string"})))
            .collect();
        json!({"type": "object", "properties": properties})
    }

    #[test]
    fn test_full_extraction_flow() {
        let llm = MockProvider::new(
            "Here you go:\n{\"invoice\": 42, \"vendor\": \"Acme Corp\"}\nAnything else?",
        );
        let extractor = JsonExtractor::new(llm.clone()).with_cache(Arc::new(ComplexityCache::new()));

        let result = extractor
            .extract(request(json!({
                "properties": {
                    "invoice": {"type": "integer"},
                    "vendor": {"type": "string"}
                }
            })))
            .unwrap();

        assert_eq!(result.json, json!({"invoice": 42, "vendor": "Acme Corp"}));
        assert_eq!(result.report.metrics.field_count, 2);
        assert_eq!(result.report.strategy, Strategy::Direct);
        assert!(result.raw_output.starts_with("Here you go:"));
        assert_eq!(result.metadata.model_name, "mock");
        assert_eq!(llm.call_count(), 1);
        assert_eq!(llm.prompts()[0], result.prompt);
    }

    #[test]
    fn test_prompt_follows_strategy() {
        let llm = MockProvider::new("{}");
        let extractor = JsonExtractor::new(llm.clone()).with_cache(Arc::new(ComplexityCache::new()));

        // 95 fields + 5 × depth 2 = 105 → chunked
        let result = extractor.extract(request(wide_schema(95))).unwrap();
        assert_eq!(result.report.strategy, Strategy::Chunked);
        assert!(result.prompt.contains("Schema (partial or full):"));

        // 195 fields + 10 = 205 → iterative stitching, still one call
        let result = extractor.extract(request(wide_schema(195))).unwrap();
        assert_eq!(result.report.strategy, Strategy::IterativeStitching);
        assert!(result.prompt.contains("Input Text (chunk):"));
        assert_eq!(llm.call_count(), 2);
    }

    #[test]
    fn test_prompt_for_matches_sent_prompt() {
        let llm = MockProvider::new("{}");
        let extractor = JsonExtractor::new(llm.clone());

        let req = request(json!({"enum": ["a"]}));
        let preview = extractor.prompt_for(&req);
        let result = extractor.extract(req).unwrap();

        assert_eq!(preview, result.prompt);
        assert!(preview.starts_with(BASE_INSTRUCTION));
    }

    #[test]
    fn test_extraction_with_no_json() {
        let llm = MockProvider::new("Sorry, I cannot help with that.");
        let extractor = JsonExtractor::new(llm);

        let err = extractor.extract(request(json!({}))).unwrap_err();
        assert!(matches!(err, ExtractorError::NoJsonObject { .. }));
        assert_eq!(err.raw_output(), Some("Sorry, I cannot help with that."));
    }

    #[test]
    fn test_extraction_with_invalid_json() {
        let llm = MockProvider::new("{\"a\": 1,}");
        let extractor = JsonExtractor::new(llm);

        let err = extractor.extract(request(json!({}))).unwrap_err();
        assert!(matches!(err, ExtractorError::JsonParse { .. }));
        assert_eq!(err.raw_output(), Some("{\"a\": 1,}"));
    }

    #[test]
    fn test_llm_failure_has_no_raw_output() {
        let mut llm = MockProvider::default();
        let schema = json!({});
        let text = "boom";
        let prompt = crate::PromptBuilder::new(&schema, text, Strategy::Direct).build();
        llm.add_error(prompt);

        let extractor = JsonExtractor::new(llm);
        let err = extractor
            .extract(ExtractionRequest {
                schema,
                text: text.to_string(),
            })
            .unwrap_err();

        assert!(matches!(err, ExtractorError::Llm(_)));
        assert_eq!(err.raw_output(), None);
    }

    #[test]
    fn test_cache_is_reused_across_calls() {
        let cache = Arc::new(ComplexityCache::new());
        let extractor = JsonExtractor::new(MockProvider::new("{}")).with_cache(Arc::clone(&cache));

        extractor.extract(request(wide_schema(3))).unwrap();
        extractor.extract(request(wide_schema(3))).unwrap();
        extractor.extract(request(wide_schema(4))).unwrap();

        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_result_serializes() {
        let extractor = JsonExtractor::new(MockProvider::new("{\"ok\": true}"));
        let result = extractor.extract(request(json!({}))).unwrap();

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["json"], json!({"ok": true}));
        assert_eq!(value["report"]["strategy"], "Direct prompt, no schema splitting");
        assert_eq!(value["metadata"]["text_chars"], 42);
    }
}
