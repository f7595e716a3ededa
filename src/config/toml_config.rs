use crate::config::TourConfig;
use crate::utils::error::{Result, TourError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional overrides read from a TOML file.
///
/// ```toml
/// [fetch]
/// delay_ms = 250
/// primary_url = "https://api1.example.com"
///
/// [output]
/// path = "${HOME}/example.txt"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub fetch: Option<FetchSection>,
    pub output: Option<OutputSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FetchSection {
    pub delay_ms: Option<u64>,
    pub primary_url: Option<String>,
    pub secondary_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    pub path: Option<String>,
    pub message: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TourError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${HOME})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TourError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Overwrites every field of `config` that this file sets.
    pub fn apply_to(&self, config: &mut TourConfig) {
        if let Some(fetch) = &self.fetch {
            if let Some(delay_ms) = fetch.delay_ms {
                config.fetch_delay_ms = delay_ms;
            }
            if let Some(url) = &fetch.primary_url {
                config.primary_url = url.clone();
            }
            if let Some(url) = &fetch.secondary_url {
                config.secondary_url = url.clone();
            }
        }

        if let Some(output) = &self.output {
            if let Some(path) = &output.path {
                config.output_path = path.clone();
            }
            if let Some(message) = &output.message {
                config.message = message.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_overrides() {
        let toml = TomlConfig::from_toml_str(
            r#"
[fetch]
delay_ms = 5
"#,
        )
        .unwrap();

        let mut config = TourConfig::default();
        toml.apply_to(&mut config);

        assert_eq!(config.fetch_delay_ms, 5);
        assert_eq!(config.primary_url, TourConfig::default().primary_url);
        assert_eq!(config.message, "Hello, World!");
    }

    #[test]
    fn test_empty_file_changes_nothing() {
        let toml = TomlConfig::from_toml_str("").unwrap();
        let mut config = TourConfig::default();
        toml.apply_to(&mut config);
        assert_eq!(config, TourConfig::default());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let result = TomlConfig::from_toml_str("[fetch]\nretries = 3\n");
        assert!(matches!(result, Err(TourError::TomlError(_))));
    }

    #[test]
    fn test_unset_env_var_is_left_alone() {
        let toml = TomlConfig::from_toml_str(
            r#"
[output]
message = "${LANG_TOUR_SURELY_UNSET_VARIABLE}"
"#,
        )
        .unwrap();
        let output = toml.output.unwrap();
        assert_eq!(
            output.message.as_deref(),
            Some("${LANG_TOUR_SURELY_UNSET_VARIABLE}")
        );
    }
}
