use checkout::domain::outcome::CheckoutReport;
use checkout::interfaces::cli::Cli;
use checkout::interfaces::csv::order_reader::OrderReader;
use checkout::interfaces::csv::outcome_writer::OutcomeWriter;
use checkout::telemetry::setup_tracing;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use tracing::error;

#[tokio::main]
async fn main() -> Result<()> {
    setup_tracing();
    let cli = Cli::parse();

    let coordinator = cli.coordinator();

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = OrderReader::new(file);
    let mut reports = Vec::new();
    for order_result in reader.orders() {
        match order_result {
            Ok(order) => {
                let outcome = coordinator.run_checkout(&order).await;
                reports.push(CheckoutReport {
                    order: order.id,
                    outcome,
                });
            }
            Err(e) => {
                error!("Error reading order: {}", e);
            }
        }
    }

    let stdout = io::stdout();
    let mut writer = OutcomeWriter::new(stdout.lock(), cli.format);
    writer.write_reports(reports).into_diagnostic()?;

    Ok(())
}
