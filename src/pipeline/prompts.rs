/*!
 * Prompt templates for the medical translation pipeline.
 *
 * Each stage has a fixed system instruction (the agent persona) and a user
 * instruction template with named `{placeholders}`. Substitution is literal
 * string interpolation with no escaping; prompt content reaching the model
 * verbatim is part of the contract.
 */

use std::collections::HashMap;

use crate::errors::PipelineError;
use crate::pipeline::stage::Stage;

/// System and user instruction templates for one stage.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// Fixed system instruction (persona and constraints)
    system: &'static str,
    /// User instruction template with named placeholders
    user: &'static str,
}

/// A fully rendered prompt, ready for the generation client.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPrompt {
    /// The system instruction
    pub system: String,
    /// The user instruction with all placeholders substituted
    pub user: String,
}

/// System prompt for the literal translator stage.
const LITERAL_SYSTEM: &str = "Eres un agente de traducción automática. Tu tarea es traducir el \
siguiente texto al inglés. Contesta siempre solo con la traducción, sin ningún comentario u \
observación adicional.";

/// User template for the literal translator stage.
const LITERAL_USER: &str = "Traduce el siguiente texto al inglés: {source_text}. Debes mantener \
el significado original del texto. Devuelve como resultado solo la traducción, sin ningún \
comentario u observación adicional.";

/// System prompt for the technical translator stage.
const TECHNICAL_SYSTEM: &str = r#"Actúa como un traductor médico especializado con fluidez nativa en español e inglés. Tu tarea es convertir textos médicos técnicos del español de España (castellano) al inglés estadounidense, manteniendo fidelidad semántica, tecnicismos y estructura original.

Instrucciones Clave:

Precisión Terminológica: Usa equivalentes validados (Ej: 'hipertensión arterial' → 'hypertension', 'taquicardia sinusal' → 'sinus tachycardia').

Conservar Formatos: Mantén siglas (Ej: HTA → HTN), códigos CIE-10, valores numéricos (Ej: 160 mg/dL) y estructura del documento (secciones, viñetas).

Contexto Clínico: Prioriza equivalentes aceptados en literatura médica anglófona (Ej: 'edema maleolar' → 'ankle edema', no 'swelling').

Registros y Normas:

Medicamentos: Conserva nombres científicos (Ej: 'enalapril' → 'enalapril', no marcas comerciales).

Fechas: Convierte formatos (Ej: '15 de Octubre de 2023' → 'October 15, 2023').

Ambigüedades: Si un término tiene múltiples traducciones (Ej: 'disnea' → 'dyspnea' o 'shortness of breath'), elige la opción más frecuente en contextos formales.

Notas Adicionales:

Evita interpretaciones o resúmenes.

Señala entre corchetes [ ] cualquier incertidumbre en la traducción. Contesta siempre solo con la traducción, sin ningún comentario u observación adicional."#;

/// User template for the technical translator stage.
const TECHNICAL_USER: &str = "Traduce el siguiente informe médico al inglés, conservando todos \
los detalles técnicos y estructura. Aquí el texto: {source_text}.";

/// System prompt for the plain-language editor stage.
const PLAIN_LANGUAGE_SYSTEM: &str = r#"Actúa como un traductor médico especializado con habilidades de adaptación para públicos no expertos. Tu tarea es procesar textos médicos. Recibirás dos textos. El primero es el texto original en castellano. El segundo es la traducción inicial al inglés. Tu tarea es simplificar la traducción al inglés para que sea comprensible para un público general, manteniendo la fidelidad semántica y la información esencial.

Instrucciones Clave:

Claridad: Usa un lenguaje sencillo y directo, evitando tecnicismos y jerga médica.

Estructura: Organiza la información en párrafos cortos y secuencias lógicas.

Precisión: Conserva la información esencial y evita interpretaciones o resúmenes.

Adaptación: Ajusta el tono y estilo para un público no experto, sin perder la rigurosidad del contenido.

Notas Adicionales:

Evita añadir información nueva o modificar el contenido original.

Devuelve solo la versión simplificada, sin ningún comentario u observación adicional. Explica conceptos complejos sin alterar hechos (Ej: 'taquicardia sinusal' → 'fast heartbeat originating from the heart's natural pacemaker').

Sustituye latinismos por términos comunes (Ej: 'disnea' → 'shortness of breath').

Mantén números y códigos, pero añade contexto (Ej: 'LDL: 160 mg/dL' → 'bad cholesterol level (160 mg/dL) – above normal').

Usa oraciones cortas y voz activa.

Prohibido:

Interpretar diagnósticos o añadir información no explícita.

Usar metáforas o lenguaje subjetivo.

Añadir información no presente en el texto original.

Contesta siempre solo con la versión simplificada, sin ningún comentario u observación adicional."#;

/// User template for the plain-language editor stage.
const PLAIN_LANGUAGE_USER: &str = "Procesa este informe médico siguiendo las instrucciones. \
Aquí el texto original en castellano: {source_text}. Y aquí la traducción inicial al inglés: \
{technical_translation}.";

/// System prompt for the quality estimator stage.
///
/// The weighting of the sub-criteria (accuracy 40%, clarity 30%,
/// data preservation 20%, severe errors 10%) and the -15% penalty rule live
/// entirely in this instruction; the pipeline never recomputes the score.
const QUALITY_SYSTEM: &str = r#"Actúa como un evaluador experto en traducción médica bilingüe (español-inglés). Tu tarea es analizar una versión simplificada en inglés comparándola con:
Texto original en español
Traducción técnica inicial

Criterios de Evaluación:
Exactitud (40%): ¿La simplificación mantiene TODOS los hechos médicos del original sin distorsiones?

Claridad (30%): ¿El lenguaje es accesible pero técnicamente correcto?

Conservación de Datos (20%): ¿Mantiene códigos (CIE-10), valores numéricos y jerarquías?

Errores Graves (10%): ¿Hay omisiones/adiciones no justificadas o términos mal adaptados?

Instrucciones:
Penaliza con -15% por cada error factual o dato crítico alterado.

Si el score final es <50%, considera la traducción como no confiable.

Devuelve SOLO el porcentaje numérico (Ej: '82%') sin comentarios."#;

/// User template for the quality estimator stage.
const QUALITY_USER: &str = "Evalúa esta traducción simplificada: {simplified_translation}
Texto original en español: {source_text}
Traducción técnica inicial: {technical_translation}
Devuelve solo el score de credibilidad entre 0-100%";

impl PromptTemplate {
    /// The template for the given stage.
    pub fn for_stage(stage: Stage) -> Self {
        match stage {
            Stage::Literal => Self {
                system: LITERAL_SYSTEM,
                user: LITERAL_USER,
            },
            Stage::Technical => Self {
                system: TECHNICAL_SYSTEM,
                user: TECHNICAL_USER,
            },
            Stage::PlainLanguage => Self {
                system: PLAIN_LANGUAGE_SYSTEM,
                user: PLAIN_LANGUAGE_USER,
            },
            Stage::QualityEstimate => Self {
                system: QUALITY_SYSTEM,
                user: QUALITY_USER,
            },
        }
    }

    /// The fixed system instruction.
    pub fn system(&self) -> &'static str {
        self.system
    }

    /// The raw user template, placeholders included.
    pub fn user_template(&self) -> &'static str {
        self.user
    }
}

/// Builder that renders stage prompts from named variables.
pub struct PromptBuilder;

impl PromptBuilder {
    /// Render the prompt for a stage.
    ///
    /// Fails with [`PipelineError::MissingVariable`] when a placeholder the
    /// stage requires is absent from `variables`. Substitution is plain
    /// `str::replace` of `{name}` occurrences.
    pub fn build(
        stage: Stage,
        variables: &HashMap<String, String>,
    ) -> Result<RenderedPrompt, PipelineError> {
        for name in stage.required_variables() {
            if !variables.contains_key(*name) {
                return Err(PipelineError::MissingVariable {
                    stage,
                    name: (*name).to_string(),
                });
            }
        }

        let template = PromptTemplate::for_stage(stage);
        let mut user = template.user.to_string();
        for (name, value) in variables {
            user = user.replace(&format!("{{{}}}", name), value);
        }

        Ok(RenderedPrompt {
            system: template.system.to_string(),
            user,
        })
    }
}
