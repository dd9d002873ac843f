//! In-process realtime database SDK.
//!
//! Keeps an app registry keyed by app name and one database instance per app.
//! Nothing here opens a connection; acquiring the database only resolves the
//! URL and namespace the service would be reached at.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use anyhow::anyhow;
use url::{Host, Url};

use crate::config::DatabaseConfig;
use crate::error::SdkError;
use crate::sdk::{AppInitializer, DatabaseAccessor};

pub const DEFAULT_APP_NAME: &str = "[DEFAULT]";

/// Initialized application context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirebaseApp {
    name: String,
    options: DatabaseConfig,
}

impl FirebaseApp {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &DatabaseConfig {
        &self.options
    }
}

/// Database service reference bound to one app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Database {
    app_name: String,
    url: Url,
    namespace: String,
}

impl Database {
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

#[derive(Debug, Default)]
struct Registry {
    apps: HashMap<String, FirebaseApp>,
    databases: HashMap<String, Database>,
}

#[derive(Debug)]
pub struct FirebaseSdk {
    app_name: String,
    registry: Mutex<Registry>,
}

impl FirebaseSdk {
    pub fn new() -> Self {
        Self::with_app_name(DEFAULT_APP_NAME)
    }

    /// SDK that initializes apps under `app_name` instead of `[DEFAULT]`.
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            registry: Mutex::new(Registry::default()),
        }
    }

    /// Remove an app and its database instance. Returns whether the app existed.
    pub fn delete_app(&self, name: &str) -> anyhow::Result<bool> {
        let mut registry = self.registry()?;
        registry.databases.remove(name);
        let removed = registry.apps.remove(name).is_some();

        if removed {
            tracing::info!(app = name, "app deleted");
        }

        Ok(removed)
    }

    fn registry(&self) -> anyhow::Result<MutexGuard<'_, Registry>> {
        self.registry
            .lock()
            .map_err(|_| anyhow!("app registry lock poisoned"))
    }
}

impl Default for FirebaseSdk {
    fn default() -> Self {
        Self::new()
    }
}

impl AppInitializer for FirebaseSdk {
    type App = FirebaseApp;

    fn initialize_app(&self, config: &DatabaseConfig) -> anyhow::Result<Option<FirebaseApp>> {
        let Some(url) = config.database_url().filter(|url| !url.trim().is_empty()) else {
            tracing::debug!(app = %self.app_name, "no database URL; app not created");
            return Ok(None);
        };

        let mut registry = self.registry()?;

        if let Some(existing) = registry.apps.get(&self.app_name) {
            if existing.options == *config {
                return Ok(Some(existing.clone()));
            }
            return Err(SdkError::DuplicateApp {
                name: self.app_name.clone(),
            }
            .into());
        }

        let app = FirebaseApp {
            name: self.app_name.clone(),
            options: config.clone(),
        };
        registry.apps.insert(app.name.clone(), app.clone());

        tracing::info!(app = %app.name, database_url = %url, "app initialized");
        Ok(Some(app))
    }
}

impl DatabaseAccessor<FirebaseApp> for FirebaseSdk {
    type Database = Database;

    fn get_database(&self, app: &FirebaseApp) -> anyhow::Result<Database> {
        let mut registry = self.registry()?;

        if registry.apps.get(&app.name) != Some(app) {
            return Err(SdkError::AppDeleted {
                name: app.name.clone(),
            }
            .into());
        }

        if let Some(database) = registry.databases.get(&app.name) {
            return Ok(database.clone());
        }

        let raw = app.options.database_url().unwrap_or_default();
        let database = resolve_database(&app.name, raw)?;
        registry
            .databases
            .insert(app.name.clone(), database.clone());

        tracing::info!(
            app = %app.name,
            namespace = %database.namespace,
            "database service acquired"
        );
        Ok(database)
    }
}

fn resolve_database(app_name: &str, raw: &str) -> Result<Database, SdkError> {
    let url = Url::parse(raw).map_err(|source| SdkError::InvalidDatabaseUrl {
        url: raw.to_string(),
        source,
    })?;

    match url.scheme() {
        "https" | "http" => {}
        other => {
            return Err(SdkError::UnsupportedScheme {
                scheme: other.to_string(),
            })
        }
    }

    // `ns` wins over the host, as emulator URLs point at an IP or localhost.
    let from_query = url
        .query_pairs()
        .find(|(key, value)| key == "ns" && !value.is_empty())
        .map(|(_, value)| value.into_owned());

    let namespace = match from_query {
        Some(ns) => ns,
        None => match url.host() {
            Some(Host::Domain(domain)) => domain
                .split('.')
                .next()
                .filter(|label| !label.is_empty())
                .map(str::to_string)
                .ok_or_else(|| SdkError::MissingNamespace {
                    url: raw.to_string(),
                })?,
            _ => {
                return Err(SdkError::MissingNamespace {
                    url: raw.to_string(),
                })
            }
        },
    };

    Ok(Database {
        app_name: app_name.to_string(),
        url,
        namespace,
    })
}
