use std::fs;

use tempfile::TempDir;

use super::*;

#[test]
fn load_from_path_reads_and_validates() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("solsniff.toml");
    fs::write(&path, "[output]\nformat = \"json\"\nwidth = 60\n").unwrap();

    let config = FileConfigLoader::new().load_from_path(&path).unwrap();

    assert_eq!(config.output.format, "json");
    assert_eq!(config.output.width, 60);
}

#[test]
fn missing_explicit_config_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.toml");

    let result = FileConfigLoader::new().load_from_path(&path);

    assert!(matches!(result, Err(SolsniffError::Config(_))));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[output\nformat =").unwrap();

    let result = FileConfigLoader::new().load_from_path(&path);

    assert!(matches!(result, Err(SolsniffError::TomlParse(_))));
}

#[test]
fn invalid_values_fail_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("narrow.toml");
    fs::write(&path, "[output]\nwidth = 5\n").unwrap();

    let result = FileConfigLoader::new().load_from_path(&path);

    assert!(matches!(result, Err(SolsniffError::Config(_))));
}
