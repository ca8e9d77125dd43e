use crate::config::GatewaySettings;
use crate::domain::model::{GatewayCredentials, NotificationRequest};
use crate::domain::ports::SmsGateway;
use crate::utils::error::{DispatchError, NotifyError};
use crate::utils::logger::mask_phone;
use async_trait::async_trait;
use reqwest::Client;

/// Form-encoded POST to the NALO `send-message` endpoint.
///
/// The response body is never read and a non-success status is only logged;
/// the gateway offers no delivery contract worth checking.
pub struct NaloGateway {
    client: Client,
    endpoint: String,
}

impl NaloGateway {
    pub fn new(settings: &GatewaySettings) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| NotifyError::ConfigValidationError {
                field: "gateway".to_string(),
                message: format!("could not build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
        })
    }
}

#[async_trait]
impl SmsGateway for NaloGateway {
    async fn send(
        &self,
        request: &NotificationRequest,
        credentials: &GatewayCredentials,
    ) -> Result<(), DispatchError> {
        let form = [
            ("key", credentials.auth_key.as_str()),
            ("sender_id", credentials.sender_id.as_str()),
            ("msisdn", request.destination_phone.as_str()),
            ("message", request.body.as_str()),
        ];

        tracing::debug!(
            "Posting SMS for {} to {}",
            mask_phone(&request.destination_phone),
            self.endpoint
        );
        let response = self.client.post(&self.endpoint).form(&form).send().await?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!("NALO gateway responded with {}", status);
        } else {
            tracing::warn!("NALO gateway responded with {}, not retrying", status);
        }
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "NALO"
    }
}
