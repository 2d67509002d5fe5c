use crate::core::container::{SOURCE_KINDS, SOURCE_STATIC};
use crate::core::ConfigProvider;
use crate::utils::error::{GreetError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub greeting: GreetingConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GreetingConfig {
    #[serde(default = "default_source")]
    pub source: String,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

fn default_source() -> String {
    crate::core::container::SOURCE_DAO.to_string()
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            text: None,
        }
    }
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"))
}

impl TomlConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| GreetError::ConfigParseError {
            field: "toml_parsing".to_string(),
            message: e.to_string(),
        })
    }

    /// Replace `${VAR}` with the environment value. Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn source_kind(&self) -> &str {
        &self.greeting.source
    }

    fn static_text(&self) -> Option<&str> {
        self.greeting.text.as_deref()
    }

    fn verbose(&self) -> bool {
        TomlConfig::verbose(self)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_one_of("greeting.source", &self.greeting.source, SOURCE_KINDS)?;

        if self.greeting.source == SOURCE_STATIC {
            let text = validation::validate_required_field("greeting.text", &self.greeting.text)?;
            validation::validate_non_empty_string("greeting.text", text)?;
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
    fn test_parse_static_config() {
        let toml_content = r#"
[greeting]
source = "static"
text = "Hola"

[logging]
verbose = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.source_kind(), "static");
        assert_eq!(config.static_text(), Some("Hola"));
        assert!(config.verbose());
        assert!(!config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_defaults_to_dao() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.source_kind(), "dao");
        assert_eq!(config.static_text(), None);
        assert!(!config.verbose());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("HELLO_SERVICE_TEST_TEXT", "Servus");

        let toml_content = r#"
[greeting]
source = "static"
text = "${HELLO_SERVICE_TEST_TEXT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.static_text(), Some("Servus"));

        std::env::remove_var("HELLO_SERVICE_TEST_TEXT");
    }

    #[test]
    fn test_unset_env_var_is_left_as_written() {
        let toml_content = r#"
[greeting]
text = "${HELLO_SERVICE_SURELY_UNSET_VAR}"
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.static_text(), Some("${HELLO_SERVICE_SURELY_UNSET_VAR}"));
    }

    #[test]
    fn test_config_validation() {
        let unknown = TomlConfig::from_toml_str("[greeting]\nsource = \"http\"\n").unwrap();
        assert!(matches!(
            unknown.validate(),
            Err(GreetError::InvalidConfigValueError { .. })
        ));

        let missing_text = TomlConfig::from_toml_str("[greeting]\nsource = \"static\"\n").unwrap();
        assert!(matches!(
            missing_text.validate(),
            Err(GreetError::MissingConfigError { .. })
        ));

        let blank_text =
            TomlConfig::from_toml_str("[greeting]\nsource = \"static\"\ntext = \"  \"\n").unwrap();
        assert!(blank_text.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let result = TomlConfig::from_toml_str("[greeting\nsource = ");
        assert!(matches!(result, Err(GreetError::ConfigParseError { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[greeting]\nsource = \"static\"\ntext = \"Hei\"").unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap();
        assert_eq!(config.static_text(), Some("Hei"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = TomlConfig::from_file("/definitely/not/here/hello.toml");
        assert!(matches!(result, Err(GreetError::IoError(_))));
    }
}
