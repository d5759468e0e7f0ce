use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` overrides the default `info` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        // the module path adds nothing in CloudWatch
        .with_target(false)
        // CloudWatch colour codes render as garbage
        .with_ansi(false)
        // CloudWatch stamps every line on ingestion
        .without_time()
        .init();
}
