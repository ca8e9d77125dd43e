use crate::config::NotificationSettings;
use crate::core::phone::normalize_phone;
use crate::core::template::render_template;
use crate::domain::model::{NotificationRequest, OrderFact, OrderStatus, StatusChange};
use crate::domain::ports::{DispatchOutcome, OrderEventHandler, SmsGateway};
use crate::utils::error::DispatchError;
use crate::utils::logger::mask_phone;
use crate::utils::sanitize::{sanitize_textarea, strip_all_tags};
use async_trait::async_trait;

/// Turns order events into at most one gateway call each.
///
/// Nothing here fails the caller: every stop on the way to the gateway,
/// including a failed request, is logged and reported as
/// [`DispatchOutcome::Halted`].
pub struct NotificationDispatcher<G: SmsGateway> {
    settings: NotificationSettings,
    gateway: G,
}

impl<G: SmsGateway> NotificationDispatcher<G> {
    pub fn new(settings: NotificationSettings, gateway: G) -> Self {
        Self { settings, gateway }
    }

    pub async fn on_status_change(&self, event: &StatusChange) -> DispatchOutcome {
        tracing::debug!(
            "Order {} moved from '{}' to '{}'",
            event.order_id,
            event.previous_status,
            event.new_status()
        );

        let result = match self.prepare_status_message(&event.order) {
            Ok(request) => self.deliver(event.order_id, request).await,
            Err(e) => Err(e),
        };
        self.finish(event.order_id, result)
    }

    pub async fn send_custom(&self, order_id: u64, order: &OrderFact, text: &str) -> DispatchOutcome {
        let result = match self.prepare_custom_message(order, text) {
            Ok(request) => self.deliver(order_id, request).await,
            Err(e) => Err(e),
        };
        self.finish(order_id, result)
    }

    fn prepare_status_message(&self, order: &OrderFact) -> Result<NotificationRequest, DispatchError> {
        let ineligible = || DispatchError::IneligibleStatus {
            status: order.new_status.clone(),
        };
        let status = OrderStatus::parse(&order.new_status).ok_or_else(ineligible)?;
        if !self.settings.is_enabled(status) {
            return Err(ineligible());
        }

        let template = self
            .settings
            .template_for(status)
            .ok_or_else(|| DispatchError::MissingTemplate {
                status: status.to_string(),
            })?;

        let destination_phone =
            normalize_phone(&order.billing_phone).ok_or(DispatchError::InvalidPhone)?;

        let rendered = render_template(template, order);
        self.build_request(destination_phone, &rendered)
    }

    fn prepare_custom_message(
        &self,
        order: &OrderFact,
        text: &str,
    ) -> Result<NotificationRequest, DispatchError> {
        let destination_phone =
            normalize_phone(&order.billing_phone).ok_or(DispatchError::InvalidPhone)?;

        let text = sanitize_textarea(text);
        if text.is_empty() {
            return Err(DispatchError::EmptyMessage);
        }

        self.build_request(destination_phone, &text)
    }

    fn build_request(
        &self,
        destination_phone: String,
        body: &str,
    ) -> Result<NotificationRequest, DispatchError> {
        if !self.settings.credentials.is_complete() {
            return Err(DispatchError::MissingCredentials);
        }

        Ok(NotificationRequest {
            destination_phone,
            body: strip_all_tags(body),
        })
    }

    async fn deliver(&self, order_id: u64, request: NotificationRequest) -> Result<(), DispatchError> {
        tracing::info!(
            "📱 Sending SMS for order {} via {} to {}: {}",
            order_id,
            self.gateway.provider_name(),
            mask_phone(&request.destination_phone),
            request.body
        );
        self.gateway.send(&request, &self.settings.credentials).await
    }

    fn finish(&self, order_id: u64, result: Result<(), DispatchError>) -> DispatchOutcome {
        match result {
            Ok(()) => DispatchOutcome::Sent,
            Err(e) => {
                match &e {
                    DispatchError::IneligibleStatus { .. } | DispatchError::MissingTemplate { .. } => {
                        tracing::debug!("No SMS for order {}: {}", order_id, e);
                    }
                    _ => {
                        tracing::warn!("SMS for order {} not sent: {}", order_id, e);
                    }
                }
                DispatchOutcome::Halted(e)
            }
        }
    }
}

#[async_trait]
impl<G: SmsGateway> OrderEventHandler for NotificationDispatcher<G> {
    async fn status_changed(&self, event: &StatusChange) -> DispatchOutcome {
        self.on_status_change(event).await
    }

    async fn send_custom_text(&self, order_id: u64, order: &OrderFact, text: &str) -> DispatchOutcome {
        self.send_custom(order_id, order, text).await
    }
}
