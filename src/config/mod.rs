pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::validate_path;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use toml_config::{ForgeConfig, LoggingConfig, MonitoringConfig};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "chronoforge")]
#[command(about = "Construct a ChronoForge and run it")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the forge name from the config file
    #[arg(long)]
    pub name: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,

    #[arg(long, help = "Emit logs and the run report as JSON")]
    pub json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the file config (or defaults) and applies flag overrides on top.
    pub fn resolve(&self) -> Result<ForgeConfig> {
        let base = match &self.config {
            Some(path) => {
                validate_path("config", path)?;
                ForgeConfig::from_file(path)?
            }
            None => ForgeConfig::default(),
        };
        Ok(self.apply_overrides(base))
    }

    pub fn apply_overrides(&self, mut config: ForgeConfig) -> ForgeConfig {
        if let Some(name) = &self.name {
            config.forge.name = name.clone();
        }
        if self.monitor {
            config.monitoring = Some(MonitoringConfig { enabled: true });
        }
        if self.json {
            let level = config.logging.as_ref().and_then(|l| l.level.clone());
            config.logging = Some(LoggingConfig {
                level,
                format: Some("json".to_string()),
            });
        }
        config
    }
}
