//! Logging bootstrap built on `tracing-subscriber`.

use anyhow::Context;
use rtdb_kernel::settings::{LogFormat, LogSettings};
use tracing_subscriber::EnvFilter;

/// Resolve the log filter. `RUST_LOG` takes precedence over the configured one.
pub fn env_filter(settings: &LogSettings) -> anyhow::Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&settings.filter)
            .with_context(|| format!("invalid log filter '{}'", settings.filter)),
    }
}

/// Install the global subscriber. Logs are written to stderr so stdout stays
/// free for command output. A subscriber installed earlier is left in place.
pub fn init(settings: &LogSettings) -> anyhow::Result<()> {
    let filter = env_filter(settings)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match settings.format {
        LogFormat::Pretty => builder.try_init().is_ok(),
        LogFormat::Json => builder.json().try_init().is_ok(),
    };

    if installed {
        tracing::debug!(
            target: "rtdb-telemetry",
            format = ?settings.format,
            "telemetry initialized"
        );
    }

    Ok(())
}
