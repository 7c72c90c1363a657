/*!
 * Stage definitions for the translation pipeline.
 *
 * A stage is one discrete prompt-plus-generation step. Each stage knows its
 * display name, which temperature setting it reads, and which prompt
 * template variables it requires.
 */

use std::fmt;

use crate::app_config::StageTemperatures;

/// The four stages of the translation pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Baseline direct translation, not consumed downstream
    Literal,
    /// Register-preserving technical translation that feeds later stages
    Technical,
    /// Simplification of the technical translation for lay readers
    PlainLanguage,
    /// Model-judged fidelity score of the simplified output
    QualityEstimate,
}

/// Template variable: the original source document
pub const VAR_SOURCE_TEXT: &str = "source_text";
/// Template variable: the technical translator's output
pub const VAR_TECHNICAL_TRANSLATION: &str = "technical_translation";
/// Template variable: the plain-language editor's output
pub const VAR_SIMPLIFIED_TRANSLATION: &str = "simplified_translation";

impl Stage {
    /// All stages in execution order.
    pub const ALL: [Stage; 4] = [
        Stage::Literal,
        Stage::Technical,
        Stage::PlainLanguage,
        Stage::QualityEstimate,
    ];

    /// Human-readable stage name.
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Literal => "literal translation",
            Stage::Technical => "technical translation",
            Stage::PlainLanguage => "plain-language editing",
            Stage::QualityEstimate => "quality estimation",
        }
    }

    /// The temperature setting this stage reads from the configuration.
    pub fn temperature(&self, temperatures: &StageTemperatures) -> f32 {
        match self {
            Stage::Literal => temperatures.literal,
            Stage::Technical => temperatures.technical,
            Stage::PlainLanguage => temperatures.plain_language,
            Stage::QualityEstimate => temperatures.quality,
        }
    }

    /// Names of the prompt template variables this stage requires.
    pub fn required_variables(&self) -> &'static [&'static str] {
        match self {
            Stage::Literal | Stage::Technical => &[VAR_SOURCE_TEXT],
            Stage::PlainLanguage => &[VAR_SOURCE_TEXT, VAR_TECHNICAL_TRANSLATION],
            Stage::QualityEstimate => &[
                VAR_SOURCE_TEXT,
                VAR_TECHNICAL_TRANSLATION,
                VAR_SIMPLIFIED_TRANSLATION,
            ],
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
