/*!
 * Unit tests for application configuration loading and validation
 */

use crate::common::create_temp_dir;
use plainmed::app_config::{Config, LogLevel};

#[test]
fn test_loadOrCreate_missingFile_shouldWriteDefaultConfig() {
    let dir = create_temp_dir().unwrap();
    let path = dir.path().join("conf.json");

    let config = Config::load_or_create(&path).unwrap();

    assert!(path.exists());
    assert_eq!(config.model, "gpt-4o-mini");
    assert!(config.api_key.is_empty());
}

#[test]
fn test_loadOrCreate_existingFile_shouldRoundTrip() {
    let dir = create_temp_dir().unwrap();
    let path = dir.path().join("conf.json");

    let mut config = Config::default();
    config.model = "gpt-4o".to_string();
    config.api_key = "sk-roundtrip".to_string();
    config.temperatures.plain_language = 1.4;
    config.log_level = LogLevel::Debug;
    config.save_to_file(&path).unwrap();

    let loaded = Config::load_or_create(&path).unwrap();

    assert_eq!(loaded.model, "gpt-4o");
    assert_eq!(loaded.api_key, "sk-roundtrip");
    assert_eq!(loaded.temperatures.plain_language, 1.4);
    assert_eq!(loaded.log_level, LogLevel::Debug);
}

#[test]
fn test_fromFile_invalidJson_shouldFailWithContext() {
    let dir = create_temp_dir().unwrap();
    let path = dir.path().join("conf.json");
    std::fs::write(&path, "not json at all").unwrap();

    let result = Config::from_file(&path);

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("parse"));
}

#[test]
fn test_validate_boundaryTemperatures_shouldBeAccepted() {
    let mut config = Config::default();
    config.temperatures.literal = 0.0;
    config.temperatures.technical = 2.0;

    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_negativeTemperature_shouldBeRejected() {
    let mut config = Config::default();
    config.temperatures.literal = -0.1;

    assert!(config.validate().is_err());
}

#[test]
fn test_validate_invalidEndpoint_shouldBeRejected() {
    let mut config = Config::default();
    config.endpoint = "not a url".to_string();

    assert!(config.validate().is_err());
}
