use crate::config::toml_config::{ForgeConfig, DEFAULT_NAME};
use crate::domain::ports::Runnable;

/// The forge itself. Each value is independent; nothing is shared between instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChronoForge {
    label: String,
}

impl ChronoForge {
    pub fn new() -> Self {
        Self {
            label: DEFAULT_NAME.to_string(),
        }
    }

    pub fn from_config(config: &ForgeConfig) -> Self {
        Self {
            label: config.name().to_string(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Always succeeds. Does not mutate the forge.
    pub fn run(&self) -> bool {
        tracing::debug!(forge = %self.label, "running");
        true
    }
}

impl Default for ChronoForge {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable for ChronoForge {
    fn name(&self) -> &str {
        self.label()
    }

    fn run(&self) -> bool {
        ChronoForge::run(self)
    }
}
