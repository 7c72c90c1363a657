/*!
 * Error types for the plainmed application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

use crate::pipeline::stage::Stage;

/// Errors that can occur when talking to a generation provider API
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error related to rate limiting
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Errors that can occur while running the translation pipeline
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The source document is missing or empty; no stage has run
    #[error("Source text is empty, nothing to translate")]
    EmptyInput,

    /// No API credential was supplied; no stage has run
    #[error("API key is missing, set it in the config file or via OPENAI_API_KEY")]
    MissingCredential,

    /// A configuration value is outside its accepted domain
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A required prompt template variable was not supplied.
    /// This indicates a defect in prompt construction, not a user-facing condition.
    #[error("Missing prompt variable '{name}' for the {stage} stage")]
    MissingVariable {
        /// The stage whose prompt was being rendered
        stage: Stage,
        /// Name of the absent placeholder
        name: String,
    },

    /// A stage's generation call failed; the run is aborted at this stage
    #[error("The {stage} stage failed: {source}")]
    Stage {
        /// The first stage that failed
        stage: Stage,
        /// The underlying provider failure
        #[source]
        source: ProviderError,
    },
}

impl PipelineError {
    /// The stage this error occurred in, if it is stage-scoped.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::MissingVariable { stage, .. } | Self::Stage { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}
