use rtdb_kernel::settings::DatabaseSettings;
use serde::Serialize;

/// Configuration record handed to the application initializer.
///
/// The URL is carried as-is: absent, empty or malformed values are not
/// rejected here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DatabaseConfig {
    #[serde(rename = "databaseURL", skip_serializing_if = "Option::is_none")]
    pub database_url: Option<String>,
}

impl DatabaseConfig {
    pub fn new(database_url: Option<String>) -> Self {
        Self { database_url }
    }

    pub fn from_settings(settings: &DatabaseSettings) -> Self {
        Self::new(settings.url.clone())
    }

    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_under_database_url_key() {
        let config = DatabaseConfig::new(Some("https://example-db.firebaseio.com".into()));
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "databaseURL": "https://example-db.firebaseio.com" })
        );
    }

    #[test]
    fn absent_url_is_omitted() {
        let json = serde_json::to_value(DatabaseConfig::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn settings_value_is_copied_unchanged() {
        let settings = DatabaseSettings {
            url: Some("  not a url ".to_string()),
        };
        let config = DatabaseConfig::from_settings(&settings);
        assert_eq!(config.database_url(), Some("  not a url "));
    }
}
