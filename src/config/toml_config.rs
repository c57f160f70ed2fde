use crate::core::demo::DEMO_QUOTE;
use crate::core::report::OutputFormat;
use crate::domain::model::Strategy;
use crate::utils::error::{QuoteLexError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub lexer: LexerSection,
    pub output: OutputSection,
    pub demo: DemoSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerSection {
    pub strategy: String,
    pub input: Option<String>,
    pub strict: bool,
}

impl Default for LexerSection {
    fn default() -> Self {
        Self {
            strategy: Strategy::Regex.as_str().to_string(),
            input: None,
            strict: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub format: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoSection {
    pub quote: String,
}

impl Default for DemoSection {
    fn default() -> Self {
        Self {
            quote: DEMO_QUOTE.to_string(),
        }
    }
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;

        toml::from_str(&processed).map_err(|e| QuoteLexError::ConfigParseError {
            message: e.to_string(),
        })
    }

    /// 替換環境變數 (例如 ${INPUT_FILE})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn strategy(&self) -> Result<Strategy> {
        Strategy::from_name(&self.lexer.strategy).ok_or_else(|| {
            QuoteLexError::InvalidConfigValueError {
                field: "lexer.strategy".to_string(),
                value: self.lexer.strategy.clone(),
                reason: format!("Valid values: {}", Strategy::NAMES.join(", ")),
            }
        })
    }

    pub fn output_format(&self) -> Result<OutputFormat> {
        OutputFormat::from_name(&self.output.format).ok_or_else(|| {
            QuoteLexError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: self.output.format.clone(),
                reason: format!("Valid values: {}", OutputFormat::NAMES.join(", ")),
            }
        })
    }

    pub fn input_path(&self) -> Option<PathBuf> {
        self.lexer.input.as_ref().map(PathBuf::from)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_one_of("lexer.strategy", &self.lexer.strategy, Strategy::NAMES)?;
        validation::validate_one_of("output.format", &self.output.format, OutputFormat::NAMES)?;

        if let Some(input) = &self.lexer.input {
            validation::validate_path("lexer.input", input)?;
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
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();

        assert_eq!(config.strategy().unwrap(), Strategy::Regex);
        assert_eq!(config.output_format().unwrap(), OutputFormat::Text);
        assert_eq!(config.demo.quote, "eat your vegetables!");
        assert!(config.input_path().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[lexer]
strategy = "automaton"
input = "samples/input.js"
strict = true

[output]
format = "json"

[demo]
quote = "floss daily."
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.strategy().unwrap(), Strategy::Automaton);
        assert_eq!(config.output_format().unwrap(), OutputFormat::Json);
        assert_eq!(config.input_path(), Some(PathBuf::from("samples/input.js")));
        assert!(config.lexer.strict);
        assert_eq!(config.demo.quote, "floss daily.");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("QUOTE_LEXER_TEST_INPUT", "from-env.js");

        let config = AppConfig::from_toml_str(
            r#"
[lexer]
input = "${QUOTE_LEXER_TEST_INPUT}"
"#,
        )
        .unwrap();
        assert_eq!(config.lexer.input.as_deref(), Some("from-env.js"));

        std::env::remove_var("QUOTE_LEXER_TEST_INPUT");
    }

    #[test]
    fn test_unset_env_var_is_left_alone() {
        let config = AppConfig::from_toml_str(
            r#"
[demo]
quote = "${QUOTE_LEXER_SURELY_UNSET}"
"#,
        )
        .unwrap();
        assert_eq!(config.demo.quote, "${QUOTE_LEXER_SURELY_UNSET}");
    }

    #[test]
    fn test_config_validation() {
        let config = AppConfig::from_toml_str(
            r#"
[lexer]
strategy = "lalr"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
        assert!(config.strategy().is_err());

        // 任何字串都是合法的 quote，包含空白
        let config = AppConfig::from_toml_str("[demo]\nquote = \"  \"\n").unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = AppConfig::from_toml_str("[lexer\nstrategy = ").unwrap_err();
        assert!(matches!(err, QuoteLexError::ConfigParseError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[output]\nformat = \"json\"\n")
            .unwrap();

        let config = AppConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.output_format().unwrap(), OutputFormat::Json);
    }
}
