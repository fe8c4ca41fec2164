use crate::utils::error::{ForgeError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_one_of, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_NAME: &str = "chronoforge";
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForgeConfig {
    pub forge: ForgeSection,
    pub logging: Option<LoggingConfig>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForgeSection {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            forge: ForgeSection {
                name: DEFAULT_NAME.to_string(),
            },
            logging: None,
            monitoring: None,
        }
    }
}

impl ForgeConfig {
    /// Loads a configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from TOML text, after `${VAR}` substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ForgeError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Unset variables are left in place as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ForgeError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn name(&self) -> &str {
        &self.forge.name
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|l| l.level.as_deref())
            .unwrap_or("info")
    }

    pub fn log_format(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .unwrap_or("compact")
    }

    /// JSON logs imply a JSON run report.
    pub fn json_output(&self) -> bool {
        self.log_format().eq_ignore_ascii_case("json")
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl Validate for ForgeConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("forge.name", &self.forge.name)?;
        validate_one_of("logging.level", self.log_level(), &LOG_LEVELS)?;
        validate_one_of("logging.format", self.log_format(), &LOG_FORMATS)?;
        Ok(())
    }
}
