/*!
 * End-to-end pipeline runs over mock generators
 */

use std::fs;
use std::sync::Arc;

use regex::Regex;

use crate::common::mock_providers::{full_run_generator, FULL_RUN_SCRIPT};
use crate::common::{create_temp_dir, create_test_file, test_config, SAMPLE_REPORT, SAMPLE_REPORT_LONG};
use plainmed::pipeline::TranslationPipeline;

#[tokio::test]
async fn test_endToEnd_sampleReport_shouldProduceFourNonEmptyFields() {
    // Default temperatures, credential set, short clinical
    // sentence in. The score must loosely look like a percentage; exact
    // text equality is deliberately not asserted.
    let generator = full_run_generator();
    let pipeline = TranslationPipeline::new(test_config(), Arc::new(generator));

    let result = pipeline.run(SAMPLE_REPORT).await.unwrap();

    assert!(!result.literal_translation.is_empty());
    assert!(!result.technical_translation.is_empty());
    assert!(!result.simplified_translation.is_empty());
    assert!(!result.quality_score.is_empty());

    let score_pattern = Regex::new(r"\d+\s*%").unwrap();
    assert!(score_pattern.is_match(&result.quality_score));
}

#[tokio::test]
async fn test_endToEnd_fileInput_shouldTranslateDecodedText() {
    // The pipeline only ever sees decoded text; reading the file is the
    // caller's job, mirrored here.
    let dir = create_temp_dir().unwrap();
    let path = create_test_file(&dir.path().to_path_buf(), "informe.txt", SAMPLE_REPORT_LONG).unwrap();
    let source_text = fs::read_to_string(path).unwrap();

    let generator = full_run_generator();
    let pipeline = TranslationPipeline::new(test_config(), Arc::new(generator.clone()));

    pipeline.run(&source_text).await.unwrap();

    // Every stage prompt carries the source document verbatim.
    for call in generator.calls() {
        assert!(call.user.contains("LDL 160 mg/dL"));
    }
}

#[tokio::test]
async fn test_endToEnd_stageOutputs_shouldPassThroughVerbatim() {
    let generator = full_run_generator();
    let pipeline = TranslationPipeline::new(test_config(), Arc::new(generator));

    let result = pipeline.run(SAMPLE_REPORT).await.unwrap();

    assert_eq!(result.literal_translation, FULL_RUN_SCRIPT[0]);
    assert_eq!(result.technical_translation, FULL_RUN_SCRIPT[1]);
    assert_eq!(result.simplified_translation, FULL_RUN_SCRIPT[2]);
    assert_eq!(result.quality_score, FULL_RUN_SCRIPT[3]);
}

#[tokio::test]
async fn test_endToEnd_twoRuns_shouldEachMakeFreshCalls() {
    // No idempotence is expected: each run performs its own four calls.
    let generator = plainmed::providers::mock::MockGenerator::scripted(
        FULL_RUN_SCRIPT.iter().chain(FULL_RUN_SCRIPT.iter()).copied(),
    );
    let pipeline = TranslationPipeline::new(test_config(), Arc::new(generator.clone()));

    pipeline.run(SAMPLE_REPORT).await.unwrap();
    pipeline.run(SAMPLE_REPORT).await.unwrap();

    assert_eq!(generator.call_count(), 8);
}
