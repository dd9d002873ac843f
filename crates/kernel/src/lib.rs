//! Settings shared by the realtime database bootstrapper crates.

pub mod settings;

pub use settings::Settings;
