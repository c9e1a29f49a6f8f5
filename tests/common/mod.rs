#![allow(dead_code)]

use async_trait::async_trait;
use checkout::domain::order::Order;
use checkout::domain::ports::{NotificationService, PaymentProcessor};
use std::io::Write;
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;

/// A payment method the library does not ship. Approves everything.
pub struct QrisProcessor;

#[async_trait]
impl PaymentProcessor for QrisProcessor {
    async fn process(&self, _order: &Order) -> bool {
        true
    }
}

/// Declines every payment.
pub struct DecliningProcessor;

#[async_trait]
impl PaymentProcessor for DecliningProcessor {
    async fn process(&self, _order: &Order) -> bool {
        false
    }
}

/// Records every order it is asked to confirm. Clones share the record.
#[derive(Default, Clone)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<Order>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invocations(&self) -> Vec<Order> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationService for RecordingNotifier {
    async fn send(&self, order: &Order) {
        self.sent.lock().unwrap().push(order.clone());
    }
}

/// Wraps any processor and counts how often it is called.
pub struct CountingProcessor<P> {
    inner: P,
    calls: Arc<Mutex<usize>>,
}

impl<P> CountingProcessor<P> {
    pub fn new(inner: P) -> (Self, Arc<Mutex<usize>>) {
        let calls = Arc::new(Mutex::new(0));
        (
            Self {
                inner,
                calls: calls.clone(),
            },
            calls,
        )
    }
}

#[async_trait]
impl<P: PaymentProcessor> PaymentProcessor for CountingProcessor<P> {
    async fn process(&self, order: &Order) -> bool {
        *self.calls.lock().unwrap() += 1;
        self.inner.process(order).await
    }
}

/// Writes `rows` below an `order, amount` header into a temp file.
pub fn orders_csv(rows: &[&str]) -> NamedTempFile {
    let mut csv = NamedTempFile::new().unwrap();
    writeln!(csv, "order, amount").unwrap();
    for row in rows {
        writeln!(csv, "{}", row).unwrap();
    }
    csv
}
