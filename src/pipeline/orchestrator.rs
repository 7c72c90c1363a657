/*!
 * Pipeline orchestrator for the four-stage medical translation pipeline.
 *
 * The orchestrator validates the input, then runs the stages in order:
 * 1. Literal translation (baseline, not consumed downstream)
 * 2. Technical translation (feeds the remaining stages)
 * 3. Plain-language editing (simplifies the technical translation)
 * 4. Quality estimation (scores the simplified output)
 *
 * A failure in any stage is terminal for the run; no partial result is
 * ever assembled.
 */

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::debug;

use crate::app_config::{Config, TEMPERATURE_RANGE};
use crate::errors::PipelineError;
use crate::pipeline::generator::{GenerationClient, Generator};
use crate::pipeline::prompts::PromptBuilder;
use crate::pipeline::stage::{
    Stage, VAR_SIMPLIFIED_TRANSLATION, VAR_SOURCE_TEXT, VAR_TECHNICAL_TRANSLATION,
};

/// States of a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    /// No run in progress
    Idle,
    /// Checking source text and credential before any stage runs
    ValidatingInput,
    /// Running the literal translator
    RunningLiteral,
    /// Running the technical translator
    RunningTechnical,
    /// Running the plain-language editor
    RunningSimplification,
    /// Running the quality estimator
    RunningQuality,
    /// Terminal success: all four outputs assembled
    Assembled,
    /// Terminal failure, entered from validation or any running state
    Failed,
}

impl PipelineState {
    /// The running state for a given stage.
    pub fn running(stage: Stage) -> Self {
        match stage {
            Stage::Literal => Self::RunningLiteral,
            Stage::Technical => Self::RunningTechnical,
            Stage::PlainLanguage => Self::RunningSimplification,
            Stage::QualityEstimate => Self::RunningQuality,
        }
    }

    /// Whether this state is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Assembled | Self::Failed)
    }
}

/// Progress information reported to the caller during a run.
#[derive(Debug, Clone)]
pub struct PipelineProgress {
    /// Current pipeline state
    pub state: PipelineState,

    /// The stage currently running, if any
    pub stage: Option<Stage>,

    /// Stages completed so far
    pub stages_completed: usize,

    /// Total number of stages
    pub total_stages: usize,

    /// Current status message
    pub status: String,
}

/// Callback invoked on every state transition.
pub type ProgressCallback = Box<dyn Fn(PipelineProgress) + Send + Sync>;

/// The assembled result of a successful pipeline run.
///
/// All four fields are populated; the struct is never constructed for a
/// partially completed run.
#[derive(Debug, Clone)]
pub struct PipelineResult {
    /// Baseline direct translation
    pub literal_translation: String,

    /// Register-preserving technical translation
    pub technical_translation: String,

    /// Plain-language simplification of the technical translation
    pub simplified_translation: String,

    /// Model-judged fidelity score, expected (but not validated) to look
    /// like "NN%"
    pub quality_score: String,

    /// Total duration of the run
    pub duration: Duration,
}

impl PipelineResult {
    /// One-line summary of the run.
    pub fn summary(&self) -> String {
        format!(
            "Completed 4 stages in {:.2}s | quality score: {}",
            self.duration.as_secs_f32(),
            self.quality_score.trim()
        )
    }
}

/// The pipeline orchestrator.
pub struct TranslationPipeline {
    config: Config,
    generator: Arc<dyn Generator>,
    progress_callback: Option<ProgressCallback>,
}

impl TranslationPipeline {
    /// Create a pipeline with an explicit generator (used by tests to
    /// substitute a mock for the remote service).
    pub fn new(config: Config, generator: Arc<dyn Generator>) -> Self {
        Self {
            config,
            generator,
            progress_callback: None,
        }
    }

    /// Create a pipeline backed by the OpenAI generation client.
    pub fn from_config(config: Config) -> Self {
        let generator = Arc::new(GenerationClient::new(&config));
        Self::new(config, generator)
    }

    /// Set a progress callback invoked on every state transition.
    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    /// Get the pipeline configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the full pipeline over a source document.
    ///
    /// Returns a fully populated [`PipelineResult`], or the first typed
    /// error encountered. Outputs of stages completed before a failure are
    /// discarded.
    pub async fn run(&self, source_text: &str) -> Result<PipelineResult, PipelineError> {
        let start_time = Instant::now();
        let mut completed = 0usize;

        self.report(PipelineState::ValidatingInput, None, completed, "Validating input");

        if source_text.trim().is_empty() {
            self.report(PipelineState::Failed, None, completed, "Source text is empty");
            return Err(PipelineError::EmptyInput);
        }
        if self.config.api_key.is_empty() {
            self.report(PipelineState::Failed, None, completed, "API key is missing");
            return Err(PipelineError::MissingCredential);
        }

        // Stage 1: literal baseline. Its output is kept for display only and
        // never flows into a later stage.
        let literal_translation = self
            .run_stage(
                Stage::Literal,
                variables([(VAR_SOURCE_TEXT, source_text)]),
                &mut completed,
            )
            .await?;

        // Stage 2: technical translation, the one that feeds the rest.
        let technical_translation = self
            .run_stage(
                Stage::Technical,
                variables([(VAR_SOURCE_TEXT, source_text)]),
                &mut completed,
            )
            .await?;

        // Stage 3: simplification of the technical translation, with the
        // original text as reference.
        let simplified_translation = self
            .run_stage(
                Stage::PlainLanguage,
                variables([
                    (VAR_SOURCE_TEXT, source_text),
                    (VAR_TECHNICAL_TRANSLATION, technical_translation.as_str()),
                ]),
                &mut completed,
            )
            .await?;

        // Stage 4: fidelity score of the simplification against the original
        // and the technical translation. The returned string is surfaced
        // verbatim, never parsed.
        let quality_score = self
            .run_stage(
                Stage::QualityEstimate,
                variables([
                    (VAR_SOURCE_TEXT, source_text),
                    (VAR_TECHNICAL_TRANSLATION, technical_translation.as_str()),
                    (VAR_SIMPLIFIED_TRANSLATION, simplified_translation.as_str()),
                ]),
                &mut completed,
            )
            .await?;

        let duration = start_time.elapsed();
        self.report(PipelineState::Assembled, None, completed, "Pipeline complete");

        Ok(PipelineResult {
            literal_translation,
            technical_translation,
            simplified_translation,
            quality_score,
            duration,
        })
    }

    /// Run one stage: validate its temperature, render its prompt, call the
    /// generator and pass the output through verbatim.
    async fn run_stage(
        &self,
        stage: Stage,
        variables: HashMap<String, String>,
        completed: &mut usize,
    ) -> Result<String, PipelineError> {
        self.report(
            PipelineState::running(stage),
            Some(stage),
            *completed,
            &format!("Running {}", stage),
        );

        // Temperatures are validated lazily, per stage, immediately before
        // that stage's generation call.
        let temperature = stage.temperature(&self.config.temperatures);
        if !TEMPERATURE_RANGE.contains(&temperature) {
            self.report(
                PipelineState::Failed,
                Some(stage),
                *completed,
                &format!("Invalid temperature for {}", stage),
            );
            return Err(PipelineError::InvalidConfig(format!(
                "Temperature for the {} stage must be in [0.0, 2.0], got {}",
                stage, temperature
            )));
        }

        let prompt = match PromptBuilder::build(stage, &variables) {
            Ok(prompt) => prompt,
            Err(e) => {
                self.report(
                    PipelineState::Failed,
                    Some(stage),
                    *completed,
                    &format!("Prompt construction failed for {}", stage),
                );
                return Err(e);
            }
        };

        match self
            .generator
            .generate(&prompt.system, &prompt.user, temperature)
            .await
        {
            Ok(text) => {
                *completed += 1;
                debug!(
                    "Stage '{}' completed ({} chars, {}/{} stages done)",
                    stage,
                    text.chars().count(),
                    completed,
                    Stage::ALL.len()
                );
                Ok(text)
            }
            Err(e) => {
                self.report(
                    PipelineState::Failed,
                    Some(stage),
                    *completed,
                    &format!("{} failed", stage),
                );
                Err(PipelineError::Stage { stage, source: e })
            }
        }
    }

    fn report(&self, state: PipelineState, stage: Option<Stage>, completed: usize, status: &str) {
        debug!("Pipeline state: {:?} - {}", state, status);
        if let Some(ref callback) = self.progress_callback {
            callback(PipelineProgress {
                state,
                stage,
                stages_completed: completed,
                total_stages: Stage::ALL.len(),
                status: status.to_string(),
            });
        }
    }
}

fn variables<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> HashMap<String, String> {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
