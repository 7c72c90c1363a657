/*!
 * Error taxonomy and fail-fast behavior of the pipeline
 */

use std::sync::Arc;

use crate::common::mock_providers::{failing_after, MockGenerator};
use crate::common::{test_config, SAMPLE_REPORT};
use plainmed::app_config::Config;
use plainmed::errors::{PipelineError, ProviderError};
use plainmed::pipeline::{Stage, TranslationPipeline};

#[tokio::test]
async fn test_midPipelineFailure_shouldAbortAtPlainLanguageStage() {
    // First two stages succeed, the third fails: the error names the
    // plain-language stage and no result is assembled.
    let generator = failing_after(2);
    let pipeline = TranslationPipeline::new(test_config(), Arc::new(generator.clone()));

    let result = pipeline.run(SAMPLE_REPORT).await;

    match result {
        Err(PipelineError::Stage { stage, .. }) => assert_eq!(stage, Stage::PlainLanguage),
        other => panic!("Expected stage error, got {:?}", other),
    }
    assert_eq!(generator.call_count(), 3);
}

#[tokio::test]
async fn test_authFailure_shouldSurfaceAsFirstStageError() {
    let generator = MockGenerator::auth_failing();
    let pipeline = TranslationPipeline::new(test_config(), Arc::new(generator));

    let result = pipeline.run(SAMPLE_REPORT).await;

    match result {
        Err(PipelineError::Stage { stage, source }) => {
            assert_eq!(stage, Stage::Literal);
            assert!(matches!(source, ProviderError::AuthenticationError(_)));
        }
        other => panic!("Expected stage error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_stageError_display_shouldNameTheFailingStage() {
    let generator = MockGenerator::failing();
    let pipeline = TranslationPipeline::new(test_config(), Arc::new(generator));

    let error = pipeline.run(SAMPLE_REPORT).await.unwrap_err();

    assert!(error.to_string().contains("literal translation"));
    assert_eq!(error.stage(), Some(Stage::Literal));
}

#[tokio::test]
async fn test_validationErrors_shouldHaveNoStage() {
    let generator = MockGenerator::working();
    let pipeline = TranslationPipeline::new(Config::default(), Arc::new(generator));

    let error = pipeline.run(SAMPLE_REPORT).await.unwrap_err();

    assert!(matches!(error, PipelineError::MissingCredential));
    assert_eq!(error.stage(), None);
}

#[tokio::test]
async fn test_invalidFirstStageTemperature_shouldFailBeforeAnyCall() {
    let generator = MockGenerator::working();
    let mut config = test_config();
    config.temperatures.literal = -1.0;
    let pipeline = TranslationPipeline::new(config, Arc::new(generator.clone()));

    let result = pipeline.run(SAMPLE_REPORT).await;

    assert!(matches!(result, Err(PipelineError::InvalidConfig(_))));
    assert_eq!(generator.call_count(), 0);
}

#[tokio::test]
async fn test_rateLimitFailure_shouldAbortWithoutRetry() {
    // The pipeline never retries on its own; a single rate-limit error is
    // terminal and produces exactly one call for the failing stage.
    #[derive(Debug)]
    struct RateLimited(MockGenerator);

    #[async_trait::async_trait]
    impl plainmed::pipeline::Generator for RateLimited {
        async fn generate(
            &self,
            system: &str,
            user: &str,
            temperature: f32,
        ) -> Result<String, ProviderError> {
            // Record the call, then simulate a 429.
            let _ = self.0.generate(system, user, temperature).await;
            Err(ProviderError::RateLimitExceeded("429".to_string()))
        }
    }

    let inner = MockGenerator::working();
    let pipeline = TranslationPipeline::new(
        test_config(),
        Arc::new(RateLimited(inner.clone())),
    );

    let result = pipeline.run(SAMPLE_REPORT).await;

    match result {
        Err(PipelineError::Stage { stage, source }) => {
            assert_eq!(stage, Stage::Literal);
            assert!(matches!(source, ProviderError::RateLimitExceeded(_)));
        }
        other => panic!("Expected stage error, got {:?}", other),
    }
    assert_eq!(inner.call_count(), 1);
}
