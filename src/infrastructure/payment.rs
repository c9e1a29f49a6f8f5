use crate::domain::order::Order;
use crate::domain::ports::PaymentProcessor;
use async_trait::async_trait;
use tracing::info;

/// Stub card processor. Every charge is approved.
#[derive(Debug, Default, Clone)]
pub struct CreditCardProcessor;

impl CreditCardProcessor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PaymentProcessor for CreditCardProcessor {
    async fn process(&self, order: &Order) -> bool {
        info!(
            order = order.id,
            amount = ?order.amount.map(|a| a.value()),
            "processing credit card payment"
        );
        true
    }
}

/// Stub bank transfer processor. Every transfer is approved.
#[derive(Debug, Default, Clone)]
pub struct BankTransferProcessor;

impl BankTransferProcessor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PaymentProcessor for BankTransferProcessor {
    async fn process(&self, order: &Order) -> bool {
        info!(
            order = order.id,
            amount = ?order.amount.map(|a| a.value()),
            "processing bank transfer"
        );
        true
    }
}
