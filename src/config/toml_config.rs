use crate::core::number::{to_currency, DEFAULT_CURRENCY, DEFAULT_LOCALE};
use crate::domain::model::ElapsedSuffixes;
use crate::utils::error::{Result, UtilsError};
use crate::utils::validation::{validate_non_empty_string, validate_one_of, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UtilsConfig {
    pub currency: CurrencyConfig,
    pub elapsed: ElapsedConfig,
    pub debounce: DebounceConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyConfig {
    pub locale: String,
    pub code: String,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            code: DEFAULT_CURRENCY.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElapsedConfig {
    pub suffixes: ElapsedSuffixes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebounceConfig {
    pub delay_ms: u64,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self { delay_ms: 200 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl UtilsConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        toml::from_str(&processed).map_err(|e| UtilsError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${LOCALE})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| {
                    tracing::warn!("environment variable {} is not set", var_name);
                    format!("${{{}}}", var_name)
                })
            })
            .into_owned()
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce.delay_ms)
    }

    /// Formats `amount` with the configured locale and currency.
    pub fn format_currency(&self, amount: f64) -> Result<String> {
        to_currency(amount, &self.currency.locale, &self.currency.code)
    }
}

impl Validate for UtilsConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("currency.locale", &self.currency.locale)?;
        validate_non_empty_string("currency.code", &self.currency.code)?;

        // the formatter itself is the source of truth for what is supported
        if let Err(e) = self.format_currency(0.0) {
            let (field, value) = match &e {
                UtilsError::UnsupportedLocale { locale } => ("currency.locale", locale.clone()),
                _ => ("currency.code", self.currency.code.clone()),
            };
            return Err(UtilsError::InvalidConfigValueError {
                field: field.to_string(),
                value,
                reason: e.recovery_suggestion().to_string(),
            });
        }

        validate_range("debounce.delay_ms", self.debounce.delay_ms, 1, 600_000)?;
        validate_one_of("logging.level", &self.logging.level, LOG_LEVELS)?;
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
[currency]
locale = "de-DE"
code = "EUR"

[elapsed.suffixes]
h = " hours"
m = " minutes"

[debounce]
delay_ms = 350

[logging]
level = "debug"
json = true
"#;

        let config = UtilsConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.currency.locale, "de-DE");
        assert_eq!(config.elapsed.suffixes.hours, " hours");
        assert_eq!(config.elapsed.suffixes.seconds, "s");
        assert_eq!(config.debounce_delay(), Duration::from_millis(350));
        assert!(config.logging.json);
        assert!(config.validate().is_ok());
        assert_eq!(config.format_currency(1234.56).unwrap(), "1.234,56\u{a0}€");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = UtilsConfig::from_toml_str("").unwrap();
        assert_eq!(config, UtilsConfig::default());
        assert_eq!(config.currency.code, "USD");
        assert_eq!(config.debounce.delay_ms, 200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SMALL_UTILS_TEST_LOCALE", "cs-CZ");

        let toml_content = r#"
[currency]
locale = "${SMALL_UTILS_TEST_LOCALE}"
code = "CZK"
"#;

        let config = UtilsConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.currency.locale, "cs-CZ");

        std::env::remove_var("SMALL_UTILS_TEST_LOCALE");
    }

    #[test]
    fn test_unset_env_var_is_kept() {
        let config =
            UtilsConfig::from_toml_str("[currency]\nlocale = \"${SMALL_UTILS_SURELY_UNSET}\"\n")
                .unwrap();
        assert_eq!(config.currency.locale, "${SMALL_UTILS_SURELY_UNSET}");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation() {
        let bad_currency = UtilsConfig::from_toml_str("[currency]\ncode = \"XYZ\"\n").unwrap();
        let err = bad_currency.validate().unwrap_err();
        assert!(err.to_string().contains("currency.code"));

        let bad_delay = UtilsConfig::from_toml_str("[debounce]\ndelay_ms = 0\n").unwrap();
        assert!(bad_delay.validate().is_err());

        let bad_level = UtilsConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(bad_level.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let err = UtilsConfig::from_toml_str("[currency\nlocale = 1").unwrap_err();
        assert!(matches!(err, UtilsError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[currency]\nlocale = \"ja-JP\"\ncode = \"JPY\"\n")
            .unwrap();

        let config = UtilsConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.format_currency(1234.0).unwrap(), "￥1,234");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = UtilsConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, UtilsError::IoError(_)));
    }
}
