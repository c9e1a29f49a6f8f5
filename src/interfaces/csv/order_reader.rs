use crate::domain::order::Order;
use crate::error::{CheckoutError, Result};
use std::io::Read;

/// Source of orders for a checkout batch.
///
/// Expects an `order, amount` header. An empty or missing amount column
/// becomes `None`; amounts keep every digit written in the file.
pub struct OrderReader<R: Read> {
    records: csv::Reader<R>,
}

impl<R: Read> OrderReader<R> {
    pub fn new(source: R) -> Self {
        let records = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { records }
    }

    /// Orders in file order. A row with a bad id or a non-positive amount
    /// yields its own `Err` and the rows after it are still read.
    pub fn orders(self) -> impl Iterator<Item = Result<Order>> {
        self.records
            .into_deserialize()
            .map(|row| row.map_err(CheckoutError::from))
    }
}
