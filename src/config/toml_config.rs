use crate::config::settings::{
    GatewaySettings, NotificationSettings, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECONDS,
};
use crate::domain::model::{GatewayCredentials, OrderStatus};
use crate::utils::error::{NotifyError, Result};
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

static UNRESOLVED_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\$\{[^}]+\}$").expect("valid regex"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub templates: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(flatten)]
    pub credentials: GatewayCredentials,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout_seconds(),
            credentials: GatewayCredentials::default(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default)]
    pub enabled_statuses: Vec<String>,
}

impl TomlConfig {
    /// Reads and parses a TOML file, substituting `${VAR}` placeholders.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(NotifyError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Unset variables are left as the literal `${VAR}` text.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| NotifyError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_url("gateway.endpoint", &self.gateway.endpoint)?;
        validate_positive_number("gateway.timeout_seconds", self.gateway.timeout_seconds, 1)?;
        self.notification_settings()?;
        Ok(())
    }

    /// Builds the dispatcher settings, rejecting unknown statuses.
    pub fn notification_settings(&self) -> Result<NotificationSettings> {
        let mut settings = NotificationSettings::new(self.resolved_credentials());

        for raw in &self.notifications.enabled_statuses {
            settings = settings.enable(parse_status("notifications.enabled_statuses", raw)?);
        }
        for (raw, template) in &self.templates {
            let status = parse_status(&format!("templates.{}", raw), raw)?;
            settings = settings.with_template(status, template.clone());
        }

        Ok(settings)
    }

    pub fn gateway_settings(&self) -> GatewaySettings {
        GatewaySettings {
            endpoint: self.gateway.endpoint.clone(),
            timeout: Duration::from_secs(self.gateway.timeout_seconds),
        }
    }

    /// Credentials whose `${VAR}` was never set count as missing.
    pub fn resolved_credentials(&self) -> GatewayCredentials {
        let resolve = |value: &str| {
            if UNRESOLVED_PLACEHOLDER.is_match(value) {
                String::new()
            } else {
                value.to_string()
            }
        };

        GatewayCredentials::new(
            resolve(&self.gateway.credentials.auth_key),
            resolve(&self.gateway.credentials.sender_id),
        )
    }

    pub fn has_credentials(&self) -> bool {
        self.resolved_credentials().is_complete()
    }
}

fn parse_status(field: &str, raw: &str) -> Result<OrderStatus> {
    OrderStatus::parse(raw).ok_or_else(|| NotifyError::InvalidConfigValueError {
        field: field.to_string(),
        value: raw.to_string(),
        reason: format!(
            "Unknown status. Valid statuses: {}",
            OrderStatus::ALL
                .iter()
                .map(OrderStatus::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        ),
    })
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
