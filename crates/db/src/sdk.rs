use crate::config::DatabaseConfig;

/// Creates an application handle from a configuration record.
///
/// `Ok(None)` means the SDK produced no usable application; callers skip
/// service acquisition in that case.
pub trait AppInitializer {
    type App;

    fn initialize_app(&self, config: &DatabaseConfig) -> anyhow::Result<Option<Self::App>>;
}

/// Hands out the database service for an initialized application.
pub trait DatabaseAccessor<A> {
    type Database;

    fn get_database(&self, app: &A) -> anyhow::Result<Self::Database>;
}
