/*!
 * # plainmed - AI-assisted medical translation & plain-language pipeline
 *
 * A Rust library for translating Spanish medical documents into English
 * and adapting them for lay readers, using an LLM generation service.
 *
 * ## Features
 *
 * - Four-stage pipeline: literal translation, technical translation,
 *   plain-language simplification, and quality estimation
 * - Per-stage sampling temperatures
 * - Model-judged fidelity score of the simplified output
 * - Mockable generation seam for testing without network calls
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `pipeline`: The four-stage translation pipeline:
 *   - `pipeline::stage`: Stage definitions and per-stage metadata
 *   - `pipeline::prompts`: Prompt templates and the prompt builder
 *   - `pipeline::generator`: Generation client adapter
 *   - `pipeline::orchestrator`: Stage sequencing and result assembly
 * - `providers`: Client implementations for generation services:
 *   - `providers::openai`: OpenAI chat-completions client
 *   - `providers::mock`: Mock generators for testing
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod errors;
pub mod pipeline;
pub mod providers;

// Re-export main types for easier usage
pub use app_config::{Config, StageTemperatures};
pub use errors::{PipelineError, ProviderError};
pub use pipeline::{PipelineResult, Stage, TranslationPipeline};
