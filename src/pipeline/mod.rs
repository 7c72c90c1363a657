/*!
 * The four-stage medical translation pipeline.
 *
 * The pipeline processes a Spanish medical document through four stages:
 * 1. **Literal Translator**: baseline direct translation
 * 2. **Technical Translator**: register-preserving translation that feeds later stages
 * 3. **Plain-Language Editor**: simplification for lay readers
 * 4. **Quality Estimator**: model-judged fidelity score
 */

pub mod generator;
pub mod orchestrator;
pub mod prompts;
pub mod stage;

// Re-export types used externally
pub use generator::{GenerationClient, Generator};
pub use orchestrator::{
    PipelineProgress, PipelineResult, PipelineState, ProgressCallback, TranslationPipeline,
};
pub use prompts::{PromptBuilder, PromptTemplate, RenderedPrompt};
pub use stage::Stage;
