use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber for hosts embedding the store.
///
/// Honors `RUST_LOG`, defaulting to `info`. Calling it twice is harmless:
/// the second install is ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .try_init();
}
