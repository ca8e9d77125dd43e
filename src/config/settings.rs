use crate::domain::model::{GatewayCredentials, OrderStatus};
use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str =
    "https://sms.nalosolutions.com/smsbackend/clientapi/Resl_Nalo/send-message/";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 20;

/// Validated notification settings, read-only once built.
#[derive(Debug, Clone, Default)]
pub struct NotificationSettings {
    pub credentials: GatewayCredentials,
    enabled_statuses: BTreeSet<OrderStatus>,
    templates: BTreeMap<OrderStatus, String>,
}

impl NotificationSettings {
    pub fn new(credentials: GatewayCredentials) -> Self {
        Self {
            credentials,
            ..Self::default()
        }
    }

    pub fn enable(mut self, status: OrderStatus) -> Self {
        self.enabled_statuses.insert(status);
        self
    }

    /// Empty templates are not stored, so a lookup never yields one.
    pub fn with_template(mut self, status: OrderStatus, template: impl Into<String>) -> Self {
        let template = template.into();
        if template.is_empty() {
            self.templates.remove(&status);
        } else {
            self.templates.insert(status, template);
        }
        self
    }

    pub fn is_enabled(&self, status: OrderStatus) -> bool {
        self.enabled_statuses.contains(&status)
    }

    pub fn template_for(&self, status: OrderStatus) -> Option<&str> {
        self.templates.get(&status).map(String::as_str)
    }

    pub fn enabled_statuses(&self) -> impl Iterator<Item = OrderStatus> + '_ {
        self.enabled_statuses.iter().copied()
    }

    pub fn templated_statuses(&self) -> impl Iterator<Item = OrderStatus> + '_ {
        self.templates.keys().copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewaySettings {
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        }
    }
}
