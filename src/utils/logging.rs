use tracing_subscriber::EnvFilter;

/// Install the diagnostic subscriber. `RUST_LOG` wins over the configured
/// level. Output goes to stderr so it never mixes with command output.
pub fn enable_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}={level}",
            env!("CARGO_PKG_NAME").replace('-', "_")
        ))
    });

    // a second init (e.g. in tests) is not an error worth reporting
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
