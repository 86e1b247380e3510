use tracing_subscriber::{prelude::*, util::SubscriberInitExt, EnvFilter};

/// Installs a stderr subscriber filtered by `RUST_LOG`, defaulting to `info`
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .init();
}
