//! Command-line surface and composition root.
//!
//! This is the only place that knows about concrete capability variants. It
//! turns command-line choices into boxed capabilities and hands them to the
//! coordinator.

use crate::application::checkout::CheckoutCoordinator;
use crate::domain::ports::{NotificationServiceBox, PaymentProcessorBox};
use crate::infrastructure::notification::{EmailService, SmsService};
use crate::infrastructure::payment::{BankTransferProcessor, CreditCardProcessor};
use crate::interfaces::OutputFormat;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input orders CSV file (`order, amount`)
    pub input: PathBuf,

    /// Payment method used for every order
    #[arg(long, value_enum, default_value_t = PaymentMethod::CreditCard)]
    pub payment: PaymentMethod,

    /// Channel used to confirm paid orders
    #[arg(long, value_enum, default_value_t = NotificationChannel::Email)]
    pub notify: NotificationChannel,

    /// Email address or phone number receiving confirmations
    #[arg(long, default_value = "customer@example.com")]
    pub recipient: String,

    /// Output format for checkout reports
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,
}

impl Cli {
    /// Builds a coordinator wired with the selected variants.
    pub fn coordinator(&self) -> CheckoutCoordinator {
        CheckoutCoordinator::new(
            self.payment.processor(),
            self.notify.notifier(&self.recipient),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PaymentMethod {
    CreditCard,
    BankTransfer,
}

impl PaymentMethod {
    pub fn processor(self) -> PaymentProcessorBox {
        match self {
            PaymentMethod::CreditCard => Box::new(CreditCardProcessor::new()),
            PaymentMethod::BankTransfer => Box::new(BankTransferProcessor::new()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NotificationChannel {
    Email,
    Sms,
}

impl NotificationChannel {
    pub fn notifier(self, recipient: &str) -> NotificationServiceBox {
        match self {
            NotificationChannel::Email => Box::new(EmailService::new(recipient)),
            NotificationChannel::Sms => Box::new(SmsService::new(recipient)),
        }
    }
}
