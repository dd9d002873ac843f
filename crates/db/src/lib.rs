//! Realtime database client factory.
//!
//! Builds the [`DatabaseConfig`] record from settings, initializes an
//! application handle through an [`AppInitializer`] and, when one is
//! available, acquires the database service through a [`DatabaseAccessor`].

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod firebase;
pub mod sdk;

pub use bootstrap::{bootstrap, Bootstrapped};
pub use config::DatabaseConfig;
pub use error::SdkError;
pub use firebase::{Database, FirebaseApp, FirebaseSdk, DEFAULT_APP_NAME};
pub use sdk::{AppInitializer, DatabaseAccessor};
