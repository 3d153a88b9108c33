use crate::core::library::DEFAULT_MAX_YEAR;
use crate::utils::error::{DemoError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_one_of, validate_range, Validate};
use serde::Deserialize;
use std::path::Path;

pub const MAX_CONFIGURABLE_YEAR: i64 = 9999;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub validation: Option<ValidationConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidationConfig {
    pub max_year: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DemoError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DemoError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MAX_YEAR})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DemoError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn max_year(&self) -> i64 {
        self.validation
            .as_ref()
            .and_then(|v| v.max_year)
            .unwrap_or(DEFAULT_MAX_YEAR)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn log_format(&self) -> LogFormat {
        match self.logging.as_ref().and_then(|l| l.format.as_deref()) {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_range(
            "validation.max_year",
            self.max_year(),
            1,
            MAX_CONFIGURABLE_YEAR,
        )?;

        if let Some(level) = self.log_level() {
            validate_one_of(
                "logging.level",
                level,
                &["trace", "debug", "info", "warn", "error"],
            )?;
        }

        if let Some(format) = self.logging.as_ref().and_then(|l| l.format.as_deref()) {
            validate_one_of("logging.format", format, &["compact", "json"])?;
        }

        Ok(())
    }
}
