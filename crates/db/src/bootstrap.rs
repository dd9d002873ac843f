use crate::config::DatabaseConfig;
use crate::sdk::{AppInitializer, DatabaseAccessor};

/// Outcome of a bootstrap run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bootstrapped<A, D> {
    /// The application initialized and the database service was acquired.
    Ready { app: A, database: D },
    /// The initializer produced no application; nothing was acquired.
    Absent,
}

impl<A, D> Bootstrapped<A, D> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Bootstrapped::Ready { .. })
    }

    pub fn database(&self) -> Option<&D> {
        match self {
            Bootstrapped::Ready { database, .. } => Some(database),
            Bootstrapped::Absent => None,
        }
    }
}

/// Initialize the application from `config` and, if one is produced, acquire
/// its database service.
///
/// Collaborator errors are returned exactly as raised.
pub fn bootstrap<I, S>(
    config: &DatabaseConfig,
    initializer: &I,
    accessor: &S,
) -> anyhow::Result<Bootstrapped<I::App, S::Database>>
where
    I: AppInitializer,
    S: DatabaseAccessor<I::App>,
{
    tracing::info!(
        database_url = config.database_url().unwrap_or("<unset>"),
        "initializing realtime database app"
    );

    match initializer.initialize_app(config)? {
        Some(app) => {
            let database = accessor.get_database(&app)?;
            tracing::info!("realtime database service acquired");
            Ok(Bootstrapped::Ready { app, database })
        }
        None => {
            tracing::warn!(
                database_url_set = config.database_url().is_some(),
                "app initialization produced no handle; database service not acquired"
            );
            Ok(Bootstrapped::Absent)
        }
    }
}
