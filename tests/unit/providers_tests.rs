/*!
 * Unit tests for provider request building and mock generator behaviors
 */

use plainmed::errors::ProviderError;
use plainmed::pipeline::generator::Generator;
use plainmed::providers::mock::MockGenerator;
use plainmed::providers::openai::{OpenAI, OpenAIRequest, OpenAIResponse};
use plainmed::providers::Provider;

#[test]
fn test_openAIRequest_shouldCarrySystemThenUserMessage() {
    let request = OpenAIRequest::new("gpt-4o-mini")
        .add_message("system", "Eres un agente de traducción automática.")
        .add_message("user", "Traduce el siguiente texto al inglés: hola.")
        .temperature(0.7);

    let json = serde_json::to_value(&request).unwrap();
    let messages = json["messages"].as_array().unwrap();

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], "system");
    assert_eq!(messages[1]["role"], "user");
    assert!(messages[1]["content"]
        .as_str()
        .unwrap()
        .contains("hola"));
}

#[test]
fn test_openAIResponse_withoutUsage_shouldStillParse() {
    let response: OpenAIResponse = serde_json::from_str(
        r#"{"choices": [{"message": {"role": "assistant", "content": "82%"}}]}"#,
    )
    .unwrap();

    assert_eq!(OpenAI::extract_text(&response), "82%");
    assert!(response.usage.is_none());
}

#[tokio::test]
async fn test_authFailingGenerator_shouldReturnAuthenticationError() {
    let generator = MockGenerator::auth_failing();

    let result = generator.generate("system", "user", 0.7).await;
    assert!(matches!(result, Err(ProviderError::AuthenticationError(_))));
}

#[tokio::test]
async fn test_slowGenerator_shouldEventuallySucceed() {
    let generator = MockGenerator::slow(10);

    let text = generator.generate("system", "user", 0.7).await.unwrap();
    assert!(text.contains("[GENERATED]"));
}

#[tokio::test]
async fn test_scriptedGenerator_freshCallsPerInvocation_shouldNotDeduplicate() {
    // Identical inputs still consume one scripted response each: there is
    // no caching at the generation seam.
    let generator = MockGenerator::scripted(["first", "second"]);

    let a = generator.generate("same", "same", 0.7).await.unwrap();
    let b = generator.generate("same", "same", 0.7).await.unwrap();

    assert_ne!(a, b);
    assert_eq!(generator.call_count(), 2);
}
