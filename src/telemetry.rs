use tracing_subscriber::EnvFilter;

/// Initializes structured logging on stderr.
///
/// Verbosity follows `RUST_LOG` (e.g. `RUST_LOG=checkout=debug`) and falls
/// back to `info` when unset. Stdout is left for checkout reports.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
