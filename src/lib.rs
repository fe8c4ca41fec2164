pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::ForgeConfig;
pub use core::{chronoforge::ChronoForge, engine::ForgeEngine};
pub use domain::{model::RunReport, ports::Runnable};
pub use utils::error::{ForgeError, Result};
