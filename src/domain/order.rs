use crate::error::CheckoutError;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// A positive monetary amount attached to an order.
///
/// Carries no currency; it only rejects zero and negative values.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, CheckoutError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(CheckoutError::ValidationError(
                "Amount must be positive".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = CheckoutError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

// Parsed from the field's text so CSV input never detours through `f64`.
impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = rust_decimal::serde::str::deserialize(deserializer)?;
        Amount::new(value).map_err(serde::de::Error::custom)
    }
}

/// A purchase handed to the checkout workflow.
///
/// The coordinator treats it as an opaque handle: it borrows the order,
/// passes it to each capability, and never mutates it.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Order {
    #[serde(rename = "order")]
    pub id: u32,
    pub amount: Option<Amount>,
}

impl Order {
    pub fn new(id: u32) -> Self {
        Self { id, amount: None }
    }

    pub fn with_amount(mut self, amount: Amount) -> Self {
        self.amount = Some(amount);
        self
    }
}
