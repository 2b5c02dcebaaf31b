use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};
use uasig::error::{BoxError, ErrorContext as _};

/// Install the tracing subscriber used by the cli.
///
/// Events are written to stderr, so stdout only carries the report.
/// Filtering defaults to `warn` and can be overwritten using `RUST_LOG`.
pub fn init_tracing() -> Result<(), BoxError> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .try_init()
        .context("try init (default) tracing subscriber")?;

    Ok(())
}
