use crate::domain::model::{GatewayCredentials, NotificationRequest, OrderFact, StatusChange};
use crate::utils::error::DispatchError;
use async_trait::async_trait;

/// One outbound call to an SMS provider. No retries, no response parsing.
#[async_trait]
pub trait SmsGateway: Send + Sync {
    async fn send(
        &self,
        request: &NotificationRequest,
        credentials: &GatewayCredentials,
    ) -> Result<(), DispatchError>;

    fn provider_name(&self) -> &str;
}

/// Result of one dispatch. Hosts are free to ignore it.
#[derive(Debug)]
pub enum DispatchOutcome {
    Sent,
    Halted(DispatchError),
}

impl DispatchOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, DispatchOutcome::Sent)
    }
}

/// The two entry points a host application wires to its own events.
#[async_trait]
pub trait OrderEventHandler: Send + Sync {
    async fn status_changed(&self, event: &StatusChange) -> DispatchOutcome;

    /// `text` arrives already authenticated by the host's own form handling.
    async fn send_custom_text(&self, order_id: u64, order: &OrderFact, text: &str)
        -> DispatchOutcome;
}
