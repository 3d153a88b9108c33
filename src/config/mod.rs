#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::config::toml_config::{TomlConfig, MAX_CONFIGURABLE_YEAR};
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_range, Validate};

/// 合併後的執行設定：預設值 → TOML 檔 → 命令列參數
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub max_year: i64,
    pub verbose: bool,
    pub log_level: Option<String>,
    pub log_format: LogFormat,
}

impl Settings {
    pub fn resolve(file: Option<&TomlConfig>, max_year: Option<i64>, verbose: bool) -> Result<Self> {
        let file = file.cloned().unwrap_or_default();
        file.validate()?;

        let settings = Self {
            max_year: max_year.unwrap_or_else(|| file.max_year()),
            verbose,
            log_level: file.log_level().map(str::to_string),
            log_format: file.log_format(),
        };
        settings.validate()?;
        Ok(settings)
    }

    #[cfg(feature = "cli")]
    pub fn from_args(args: &cli::CatalogArgs) -> Result<Self> {
        let file = match &args.config {
            Some(path) => Some(TomlConfig::from_file(path)?),
            None => None,
        };
        Self::resolve(file.as_ref(), args.max_year, args.verbose)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_range("max_year", self.max_year, 1, MAX_CONFIGURABLE_YEAR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::library::DEFAULT_MAX_YEAR;

    #[test]
    fn test_defaults_without_file() {
        let settings = Settings::resolve(None, None, false).unwrap();
        assert_eq!(settings.max_year, DEFAULT_MAX_YEAR);
        assert_eq!(settings.log_format, LogFormat::Compact);
        assert!(settings.log_level.is_none());
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = TomlConfig::from_toml_str("[validation]\nmax_year = 2000\n").unwrap();

        let settings = Settings::resolve(Some(&file), None, false).unwrap();
        assert_eq!(settings.max_year, 2000);

        let settings = Settings::resolve(Some(&file), Some(2100), true).unwrap();
        assert_eq!(settings.max_year, 2100);
        assert!(settings.verbose);
    }

    #[test]
    fn test_rejects_out_of_range_override() {
        assert!(Settings::resolve(None, Some(0), false).is_err());
        assert!(Settings::resolve(None, Some(10_000), false).is_err());
    }
}
