use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global subscriber.
///
/// Reads the filter from `RUST_LOG`, falling back to `info`.
/// e.g. `RUST_LOG=hog_cost_calc_rs=debug` shows per-stage contributions.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Verbose subscriber for tests; safe to call more than once.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
