use super::order::Order;
use async_trait::async_trait;

/// Charges an order. Returns `true` when the payment went through.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    async fn process(&self, order: &Order) -> bool;
}

/// Delivers a confirmation for an order that has been paid.
#[async_trait]
pub trait NotificationService: Send + Sync {
    async fn send(&self, order: &Order);
}

pub type PaymentProcessorBox = Box<dyn PaymentProcessor>;
pub type NotificationServiceBox = Box<dyn NotificationService>;
