/*!
 * Common test utilities for the plainmed test suite
 */

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use tempfile::TempDir;

use plainmed::app_config::Config;

// Re-export the mock generators module
pub mod mock_providers;

/// Sample source document used across tests
pub const SAMPLE_REPORT: &str = "El paciente presenta taquicardia sinusal.";

/// A longer sample with values and codes worth preserving
pub const SAMPLE_REPORT_LONG: &str = "Paciente de 67 años con HTA conocida. \
Analítica: LDL 160 mg/dL. Refiere disnea de esfuerzo desde el 15 de Octubre de 2023. \
Diagnóstico: taquicardia sinusal (CIE-10 R00.0). Tratamiento: enalapril 10 mg/día.";

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// A configuration with a credential set, as every non-validation test needs
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.api_key = "sk-test".to_string();
    config
}
