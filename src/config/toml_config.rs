use crate::utils::error::{Result, ZooError};
use crate::utils::validation::{validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional run settings loaded from a TOML file. Every section may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub report_path: Option<String>,
    pub rejects_path: Option<String>,
    pub summary_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub verbose: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ZooError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ZooError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ZOO_DATA_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ZooError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        let paths = [
            ("input.path", &self.input.path),
            ("output.report_path", &self.output.report_path),
            ("output.rejects_path", &self.output.rejects_path),
            ("output.summary_path", &self.output.summary_path),
        ];
        for (field, value) in paths {
            if let Some(path) = value {
                validate_path(field, path)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[input]
path = "data/animals.txt"

[output]
report_path = "out/report.txt"
rejects_path = "out/rejects.csv"

[logging]
verbose = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.input.path.as_deref(), Some("data/animals.txt"));
        assert_eq!(config.output.report_path.as_deref(), Some("out/report.txt"));
        assert_eq!(config.output.rejects_path.as_deref(), Some("out/rejects.csv"));
        assert!(config.output.summary_path.is_none());
        assert!(config.logging.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.input.path.is_none());
        assert!(!config.logging.verbose);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ZOO_REPORT_TEST_DIR", "/srv/zoo");

        let toml_content = r#"
[input]
path = "${ZOO_REPORT_TEST_DIR}/animals.txt"

[output]
report_path = "${ZOO_REPORT_UNSET_VAR}/report.txt"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.input.path.as_deref(), Some("/srv/zoo/animals.txt"));
        assert_eq!(
            config.output.report_path.as_deref(),
            Some("${ZOO_REPORT_UNSET_VAR}/report.txt")
        );

        std::env::remove_var("ZOO_REPORT_TEST_DIR");
    }

    #[test]
    fn test_invalid_toml() {
        let err = TomlConfig::from_toml_str("[input\npath = 1").unwrap_err();
        assert!(matches!(err, ZooError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[output]\nreport_path = \"\"").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[input]\npath = \"animals.txt\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.input.path.as_deref(), Some("animals.txt"));
    }
}
