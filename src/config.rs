use tracing_subscriber::EnvFilter;

/// Application-level constants
pub const APP_NAME: &str = "Medora";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Simulated processing delay bounds for conversational replies, in
/// milliseconds. The engine picks a uniform value in this range per request.
pub const RESPONSE_DELAY_MS_MIN: u64 = 1_000;
pub const RESPONSE_DELAY_MS_MAX: u64 = 2_000;

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    "medora=info".to_string()
}

/// Initialize tracing for binaries and integration harnesses.
/// Respects RUST_LOG, falling back to [`default_log_filter`].
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_log_filter())),
        )
        .init();
}
