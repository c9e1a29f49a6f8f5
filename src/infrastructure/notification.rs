use crate::domain::order::Order;
use crate::domain::ports::NotificationService;
use async_trait::async_trait;
use tracing::info;

/// Sends order confirmations by email.
///
/// Delivery is simulated: the rendered message is emitted as a log event.
#[derive(Debug, Clone)]
pub struct EmailService {
    recipient: String,
}

impl EmailService {
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
        }
    }

    /// Renders the confirmation text for `order`.
    pub fn message(&self, order: &Order) -> String {
        format!(
            "Email to {}: your order #{} is confirmed",
            self.recipient, order.id
        )
    }
}

#[async_trait]
impl NotificationService for EmailService {
    async fn send(&self, order: &Order) {
        info!(order = order.id, channel = "email", "{}", self.message(order));
    }
}

/// Sends order confirmations by SMS. Delivery is simulated like `EmailService`.
#[derive(Debug, Clone)]
pub struct SmsService {
    phone_number: String,
}

impl SmsService {
    pub fn new(phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
        }
    }

    pub fn message(&self, order: &Order) -> String {
        format!(
            "SMS to {}: order #{} confirmed",
            self.phone_number, order.id
        )
    }
}

#[async_trait]
impl NotificationService for SmsService {
    async fn send(&self, order: &Order) {
        info!(order = order.id, channel = "sms", "{}", self.message(order));
    }
}
