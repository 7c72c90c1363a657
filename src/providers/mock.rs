/*!
 * Mock generator implementations for testing.
 *
 * This module provides mock generators that simulate different behaviors:
 * - `MockGenerator::working()` - Always succeeds with a canned response
 * - `MockGenerator::scripted(...)` - Returns queued responses in order
 * - `MockGenerator::failing()` - Always fails with an API error
 * - `MockGenerator::auth_failing()` - Always fails with an authentication error
 */

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::errors::ProviderError;
use crate::pipeline::generator::Generator;

/// Behavior mode for the mock generator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with a canned response derived from the prompt
    Working,
    /// Returns scripted responses in order, fails when the script runs out
    Scripted,
    /// Always fails with an API error
    Failing,
    /// Always fails with an authentication error
    AuthFailing,
    /// Succeeds after a delay (for timeout testing)
    Slow { delay_ms: u64 },
}

/// One recorded generation call, for prompt-content assertions.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    /// System instruction the generator received
    pub system: String,
    /// User instruction the generator received
    pub user: String,
    /// Sampling temperature the generator received
    pub temperature: f32,
}

/// Mock generator for testing pipeline behavior without network calls
#[derive(Debug)]
pub struct MockGenerator {
    /// Behavior mode
    behavior: MockBehavior,
    /// Queued responses for scripted mode
    responses: Arc<Mutex<VecDeque<String>>>,
    /// Number of generation calls received
    call_count: Arc<AtomicUsize>,
    /// Every call received, in order
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockGenerator {
    fn with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            responses: Arc::new(Mutex::new(VecDeque::new())),
            call_count: Arc::new(AtomicUsize::new(0)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a working mock generator that always succeeds
    pub fn working() -> Self {
        Self::with_behavior(MockBehavior::Working)
    }

    /// Create a mock generator that returns the given responses in order
    pub fn scripted<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let generator = Self::with_behavior(MockBehavior::Scripted);
        {
            let mut queue = generator.responses.lock().unwrap();
            queue.extend(responses.into_iter().map(Into::into));
        }
        generator
    }

    /// Create a failing mock generator that always errors
    pub fn failing() -> Self {
        Self::with_behavior(MockBehavior::Failing)
    }

    /// Create a mock generator that simulates an authentication failure
    pub fn auth_failing() -> Self {
        Self::with_behavior(MockBehavior::AuthFailing)
    }

    /// Create a mock generator that responds after a delay
    pub fn slow(delay_ms: u64) -> Self {
        Self::with_behavior(MockBehavior::Slow { delay_ms })
    }

    /// Number of generation calls received so far
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// All calls received so far, in order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Clone for MockGenerator {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior,
            responses: Arc::clone(&self.responses),
            call_count: Arc::clone(&self.call_count),
            calls: Arc::clone(&self.calls),
        }
    }
}

#[async_trait]
impl Generator for MockGenerator {
    async fn generate(
        &self,
        system: &str,
        user: &str,
        temperature: f32,
    ) -> Result<String, ProviderError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.calls.lock().unwrap().push(RecordedCall {
            system: system.to_string(),
            user: user.to_string(),
            temperature,
        });

        match self.behavior {
            MockBehavior::Working => Ok(format!("[GENERATED] {}", user.chars().take(64).collect::<String>())),

            MockBehavior::Scripted => self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| {
                    ProviderError::RequestFailed("Mock response script exhausted".to_string())
                }),

            MockBehavior::Failing => Err(ProviderError::ApiError {
                status_code: 500,
                message: "Simulated provider failure".to_string(),
            }),

            MockBehavior::AuthFailing => Err(ProviderError::AuthenticationError(
                "Simulated invalid API key".to_string(),
            )),

            MockBehavior::Slow { delay_ms } => {
                tokio::time::sleep(tokio::time::Duration::from_millis(delay_ms)).await;
                Ok(format!("[GENERATED] {}", user.chars().take(64).collect::<String>()))
            }
        }
    }
}
