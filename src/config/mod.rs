#[cfg(feature = "cli")]
pub mod cli;
pub mod settings;
pub mod toml_config;

pub use settings::{GatewaySettings, NotificationSettings};
pub use toml_config::TomlConfig;
