use crate::domain::order::Order;
use crate::domain::outcome::CheckoutOutcome;
use crate::domain::ports::{NotificationServiceBox, PaymentProcessorBox};
use tracing::{info, warn};

/// Runs the two-step checkout workflow: charge, then notify.
///
/// `CheckoutCoordinator` owns one payment processor and one notifier, both
/// supplied by the caller. Adding a new payment method or channel means
/// writing a new capability implementation; this type never changes.
pub struct CheckoutCoordinator {
    payment_processor: PaymentProcessorBox,
    notifier: NotificationServiceBox,
}

impl CheckoutCoordinator {
    /// Creates a new `CheckoutCoordinator`.
    ///
    /// # Arguments
    ///
    /// * `payment_processor` - Charges each order.
    /// * `notifier` - Confirms each successfully paid order.
    pub fn new(payment_processor: PaymentProcessorBox, notifier: NotificationServiceBox) -> Self {
        Self {
            payment_processor,
            notifier,
        }
    }

    /// Checks out a single order.
    ///
    /// The notifier is invoked exactly once if payment succeeds and not at all
    /// if it fails. A failed payment is reported through the outcome, not as an
    /// error.
    pub async fn run_checkout(&self, order: &Order) -> CheckoutOutcome {
        if !self.payment_processor.process(order).await {
            warn!(order = order.id, "payment declined, skipping notification");
            return CheckoutOutcome::PaymentFailed;
        }

        self.notifier.send(order).await;
        info!(order = order.id, "checkout completed");
        CheckoutOutcome::Completed
    }
}
