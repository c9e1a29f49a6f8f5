use crate::domain::outcome::CheckoutReport;
use crate::error::Result;
use crate::interfaces::OutputFormat;
use std::io::Write;

/// Writes checkout reports as CSV (`order,outcome`) or as a JSON array.
pub struct OutcomeWriter<W: Write> {
    sink: W,
    format: OutputFormat,
}

impl<W: Write> OutcomeWriter<W> {
    pub fn new(sink: W, format: OutputFormat) -> Self {
        Self { sink, format }
    }

    /// Writes all reports. The CSV header is emitted even for an empty batch.
    pub fn write_reports(
        &mut self,
        reports: impl IntoIterator<Item = CheckoutReport>,
    ) -> Result<()> {
        match self.format {
            OutputFormat::Csv => {
                let mut writer = csv::WriterBuilder::new()
                    .has_headers(false)
                    .from_writer(&mut self.sink);
                writer.write_record(["order", "outcome"])?;
                for report in reports {
                    writer.serialize(report)?;
                }
                writer.flush()?;
            }
            OutputFormat::Json => {
                let reports: Vec<CheckoutReport> = reports.into_iter().collect();
                serde_json::to_writer_pretty(&mut self.sink, &reports)?;
                writeln!(self.sink)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::outcome::CheckoutOutcome;

    fn sample() -> Vec<CheckoutReport> {
        vec![
            CheckoutReport {
                order: 1,
                outcome: CheckoutOutcome::Completed,
            },
            CheckoutReport {
                order: 2,
                outcome: CheckoutOutcome::PaymentFailed,
            },
        ]
    }

    #[test]
    fn test_write_csv() {
        let mut buf = Vec::new();
        OutcomeWriter::new(&mut buf, OutputFormat::Csv)
            .write_reports(sample())
            .unwrap();

        let out = String::from_utf8(buf).unwrap();
        assert_eq!(out, "order,outcome\n1,completed\n2,payment_failed\n");
    }

    #[test]
    fn test_write_csv_empty_batch_keeps_header() {
        let mut buf = Vec::new();
        OutcomeWriter::new(&mut buf, OutputFormat::Csv)
            .write_reports(Vec::new())
            .unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), "order,outcome\n");
    }

    #[test]
    fn test_write_json() {
        let mut buf = Vec::new();
        OutcomeWriter::new(&mut buf, OutputFormat::Json)
            .write_reports(sample())
            .unwrap();

        let parsed: Vec<CheckoutReport> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed, sample());
    }
}
