use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Statuses a shop owner can enable notifications and templates for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Processing,
    Completed,
    OnHold,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Processing,
        OrderStatus::Completed,
        OrderStatus::OnHold,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "processing",
            OrderStatus::Completed => "completed",
            OrderStatus::OnHold => "on-hold",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Exact, case-sensitive match against the raw status string.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == raw)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An order total as the shop hands it over: usually a number, sometimes
/// an already formatted price string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderAmount {
    Number(f64),
    Text(String),
}

impl From<f64> for OrderAmount {
    fn from(value: f64) -> Self {
        OrderAmount::Number(value)
    }
}

impl From<&str> for OrderAmount {
    fn from(value: &str) -> Self {
        OrderAmount::Text(value.to_string())
    }
}

impl Default for OrderAmount {
    fn default() -> Self {
        OrderAmount::Number(0.0)
    }
}

/// Facts about one order, supplied per dispatch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderFact {
    pub order_number: String,
    #[serde(default)]
    pub total_amount: OrderAmount,
    #[serde(default)]
    pub new_status: String,
    #[serde(default)]
    pub billing_first_name: String,
    pub billing_phone: String,
}

/// An order moved from one status to another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusChange {
    pub order_id: u64,
    pub previous_status: String,
    pub order: OrderFact,
}

impl StatusChange {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn new_status(&self) -> &str {
        &self.order.new_status
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    /// Canonical `+233...` number.
    pub destination_phone: String,
    /// Plain text, tags already stripped.
    pub body: String,
}

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayCredentials {
    #[serde(default)]
    pub auth_key: String,
    #[serde(default)]
    pub sender_id: String,
}

impl GatewayCredentials {
    pub fn new(auth_key: impl Into<String>, sender_id: impl Into<String>) -> Self {
        Self {
            auth_key: auth_key.into(),
            sender_id: sender_id.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.auth_key.is_empty() && !self.sender_id.is_empty()
    }
}

impl fmt::Debug for GatewayCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayCredentials")
            .field("auth_key", &"<redacted>")
            .field("sender_id", &self.sender_id)
            .finish()
    }
}
