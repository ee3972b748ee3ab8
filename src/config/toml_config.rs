use crate::utils::error::{KitError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KitConfig {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
    pub monitoring: MonitoringConfig,
    pub bench: BenchConfig,
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            pretty: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    pub iterations: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self { iterations: 10_000 }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Used by `tail` when no count is given on the command line.
    pub tail_count: Option<isize>,
}

impl KitConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        tracing::debug!("Loaded config file {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed)?)
    }

    /// 替換環境變數 (例如 ${KIT_FORMAT})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| KitError::ConfigError {
            message: format!("env pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| {
                tracing::warn!("Environment variable {} is not set", var_name);
                format!("${{{}}}", var_name)
            })
        });

        Ok(result.into_owned())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(level) = &self.logging.level {
            validation::validate_non_empty_string("logging.level", level)?;
            validation::validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }

        validation::validate_positive_number("bench.iterations", self.bench.iterations, 1)?;

        Ok(())
    }
}

impl Validate for KitConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
