use serde::{Deserialize, Serialize};

/// Result of a single checkout run.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutOutcome {
    /// Payment succeeded and the customer was notified.
    Completed,
    /// Payment was declined; no notification was sent.
    PaymentFailed,
}

impl CheckoutOutcome {
    pub fn is_completed(&self) -> bool {
        *self == CheckoutOutcome::Completed
    }
}

/// One row of checkout output.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct CheckoutReport {
    pub order: u32,
    pub outcome: CheckoutOutcome,
}
