use tracing_subscriber::{prelude::*, EnvFilter};

/// Logs go to stderr so they never mix with the manifests written to stdout.
///
/// Quiet unless `RUST_LOG` is set, e.g. `RUST_LOG=vick_controller=trace`.
pub(crate) fn init_tracing_registry() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .compact(),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")))
        .init();
}
