use anyhow::Context;
use rtdb_db::{bootstrap, Bootstrapped, DatabaseConfig, FirebaseSdk};
use rtdb_kernel::settings::Settings;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load settings")?;
    rtdb_telemetry::init(&settings.log)?;

    tracing::info!(env = ?settings.environment, "rtdb-app bootstrap starting");

    let config = DatabaseConfig::from_settings(&settings.database);
    let sdk = FirebaseSdk::new();

    // Held until exit; the handles live as long as the process.
    let outcome = bootstrap(&config, &sdk, &sdk)?;

    match &outcome {
        Bootstrapped::Ready { app, database } => tracing::info!(
            app = app.name(),
            namespace = database.namespace(),
            "rtdb-app bootstrap complete"
        ),
        Bootstrapped::Absent => tracing::info!("rtdb-app bootstrap complete without database"),
    }

    Ok(())
}
