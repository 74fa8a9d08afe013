use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::synth::{DEFAULT_BASE_URL, SynthOptions};

/// Project configuration loaded from `.oxs.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OxsConfig {
    /// Specification file to annotate and check.
    pub input: String,
    /// Base URL prepended to operation paths in generated samples.
    pub base_url: String,
    pub languages: LanguageConfig,
}

impl Default for OxsConfig {
    fn default() -> Self {
        Self {
            input: "venice.openapi.v3.yaml".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            languages: LanguageConfig::default(),
        }
    }
}

/// Which sample languages to emit. cURL and JavaScript are always emitted.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LanguageConfig {
    pub python: bool,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self { python: true }
    }
}

impl OxsConfig {
    pub fn synth_options(&self) -> SynthOptions {
        SynthOptions {
            base_url: self.base_url.clone(),
            python: self.languages.python,
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".oxs.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<OxsConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: OxsConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# oxs configuration
input: venice.openapi.v3.yaml
base_url: https://api.venice.ai/api/v1

languages:
  python: true    # cURL and JavaScript are always emitted
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OxsConfig::default();
        assert_eq!(config.input, "venice.openapi.v3.yaml");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.languages.python);
    }

    #[test]
    fn test_parse_config_yaml() {
        let yaml = r#"
input: api.yaml
base_url: https://staging.venice.ai/api/v1
languages:
  python: false
"#;
        let config: OxsConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.input, "api.yaml");
        assert_eq!(config.base_url, "https://staging.venice.ai/api/v1");
        assert!(!config.languages.python);
        assert!(!config.synth_options().python);
    }

    #[test]
    fn test_parse_minimal_config() {
        let yaml = "input: api.yaml\n";
        let config: OxsConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.input, "api.yaml");
        // Defaults applied
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.languages.python);
    }

    #[test]
    fn test_default_content_parses() {
        let config: OxsConfig = serde_yaml_ng::from_str(default_config_content()).unwrap();
        assert_eq!(config.input, OxsConfig::default().input);
    }
}
