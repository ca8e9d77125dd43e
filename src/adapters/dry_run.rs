use crate::domain::model::{GatewayCredentials, NotificationRequest};
use crate::domain::ports::SmsGateway;
use crate::utils::error::DispatchError;
use crate::utils::logger::mask_phone;
use async_trait::async_trait;

/// Logs what would have been sent. Used by `--dry-run`.
#[derive(Debug, Default, Clone)]
pub struct DryRunGateway;

impl DryRunGateway {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SmsGateway for DryRunGateway {
    async fn send(
        &self,
        request: &NotificationRequest,
        credentials: &GatewayCredentials,
    ) -> Result<(), DispatchError> {
        tracing::info!(
            "🔍 [DRY RUN] SMS from {} to {}: {}",
            credentials.sender_id,
            mask_phone(&request.destination_phone),
            request.body
        );
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "dry-run"
    }
}
