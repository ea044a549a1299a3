use crate::config::OutputFormat;
use crate::core::sorter::{PackageSorter, Thresholds};
use crate::utils::error::{Result, SorterError};
use crate::utils::validation::{validate_one_of, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SorterConfig {
    #[serde(default)]
    pub thresholds: ThresholdsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Any key left out keeps its standard value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThresholdsConfig {
    pub bulky_volume: Option<u64>,
    pub bulky_dimension: Option<i64>,
    pub heavy_mass: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub format: Option<String>,
}

impl SorterConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SorterError::ConfigError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HEAVY_MASS})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SorterError::ConfigError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn thresholds(&self) -> Thresholds {
        let defaults = Thresholds::default();
        Thresholds {
            bulky_volume: self.thresholds.bulky_volume.unwrap_or(defaults.bulky_volume),
            bulky_dimension: self
                .thresholds
                .bulky_dimension
                .unwrap_or(defaults.bulky_dimension),
            heavy_mass: self.thresholds.heavy_mass.unwrap_or(defaults.heavy_mass),
        }
    }

    pub fn uses_standard_thresholds(&self) -> bool {
        self.thresholds() == Thresholds::default()
    }

    pub fn sorter(&self) -> Result<PackageSorter> {
        PackageSorter::with_thresholds(self.thresholds())
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output
            .format
            .as_deref()
            .and_then(OutputFormat::from_name)
            .unwrap_or_default()
    }
}

impl Validate for SorterConfig {
    fn validate(&self) -> Result<()> {
        self.thresholds().validate()?;

        if let Some(format) = &self.output.format {
            validate_one_of("output.format", format, &OutputFormat::NAMES)?;
        }

        Ok(())
    }
}
