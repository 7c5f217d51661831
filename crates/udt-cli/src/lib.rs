//! Shared bootstrap for the `udt-create` and `udt-extract` binaries

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn,udt_cli=info,application=info,infrastructure=info";

/// Load `.env` and install the tracing subscriber.
///
/// Logs go to stderr; stdout is reserved for reports.
pub fn init() {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Print a fatal error as a single line and exit non-zero.
pub fn exit_with(err: anyhow::Error) -> ! {
    eprintln!("Error: {err:#}");
    std::process::exit(1);
}
