pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{DryRunGateway, NaloGateway};
pub use config::{GatewaySettings, NotificationSettings, TomlConfig};
pub use crate::core::dispatcher::NotificationDispatcher;
pub use domain::model::{
    GatewayCredentials, NotificationRequest, OrderAmount, OrderFact, OrderStatus, StatusChange,
};
pub use domain::ports::{DispatchOutcome, OrderEventHandler, SmsGateway};
pub use utils::error::{DispatchError, NotifyError, Result};
