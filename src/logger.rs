use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber. Logs go to stderr, so that stdout only ever
/// carries the CSV output.
pub fn init(filter: &str) {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(EnvFilter::new(filter));

    tracing_subscriber::registry().with(layer).init();
}
