use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{anyhow, Context};
use serde::Deserialize;

const DEFAULT_ENV: &str = "local";
const ENV_PREFIX: &str = "RTDB";
const ENV_VAR_NAME: &str = "RTDB_ENV";
const CONFIG_DIR_ENV: &str = "RTDB_CONFIG_DIR";

/// Deployment environment the application is running in.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Local,
    Staging,
    Production,
}

impl Environment {
    fn parse(name: &str) -> anyhow::Result<Self> {
        match name {
            "local" => Ok(Environment::Local),
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            other => Err(anyhow!(
                "unsupported environment '{}'; expected local/staging/production",
                other
            )),
        }
    }
}

/// Top-level configuration structure loaded from layered sources.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub environment: Environment,
    #[serde(default)]
    pub database: DatabaseSettings,
    #[serde(default)]
    pub log: LogSettings,
}

impl Settings {
    /// Load configuration by layering `.env`, base file, environment overlay
    /// and the process environment.
    pub fn load() -> anyhow::Result<Self> {
        // Allow missing `.env` files without failing.
        let _ = dotenvy::dotenv();

        // Non UTF-8 variables cannot carry settings; skip them.
        let vars: HashMap<String, String> = std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect();
        Self::load_from(&vars)
    }

    /// Same layering as [`Settings::load`], reading variables from `vars`
    /// instead of the process environment.
    pub fn load_from(vars: &HashMap<String, String>) -> anyhow::Result<Self> {
        let environment = vars
            .get(ENV_VAR_NAME)
            .cloned()
            .unwrap_or_else(|| DEFAULT_ENV.to_string());
        let environment_kind = Environment::parse(&environment)?;

        let config_dir = match vars.get(CONFIG_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => std::env::current_dir()
                .map(|cwd| cwd.join("config"))
                .with_context(|| "unable to resolve current directory")?,
        };

        let base_path = config_dir.join("base.toml");
        let environment_path = config_dir.join(format!("{}.toml", environment));

        let env_source: config::Map<String, String> = vars
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        let builder = config::Config::builder()
            .add_source(config::File::from(base_path).required(false))
            .add_source(config::File::from(environment_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("_")
                    .source(Some(env_source)),
            );

        let cfg = builder
            .build()
            .with_context(|| "failed to build configuration")?;

        let mut settings: Settings = cfg
            .try_deserialize()
            .with_context(|| "failed to deserialize configuration")?;

        settings.environment = environment_kind;

        tracing::debug!(
            env = ?settings.environment,
            config_dir = %config_dir.display(),
            database_url_set = settings.database.url.is_some(),
            "settings loaded"
        );

        Ok(settings)
    }
}

/// Realtime database connection settings. `RTDB_DATABASE_URL` lands in `url`.
///
/// There is no default URL and the value is not validated here.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct DatabaseSettings {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    #[serde(default)]
    pub format: LogFormat,
    #[serde(default = "LogSettings::default_filter")]
    pub filter: String,
}

impl LogSettings {
    fn default_filter() -> String {
        "info".to_string()
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            format: LogFormat::Pretty,
            filter: Self::default_filter(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        let mut map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        map.entry(CONFIG_DIR_ENV.to_string())
            .or_insert_with(|| "/nonexistent/rtdb-config".to_string());
        map
    }

    #[test]
    fn default_environment_is_local() {
        let settings = Settings::default();
        assert_eq!(settings.environment, Environment::Local);
    }

    #[test]
    fn default_database_url_is_unset() {
        let settings = Settings::default();
        assert_eq!(settings.database.url, None);
    }

    #[test]
    fn database_url_comes_from_prefixed_variable() {
        let settings = Settings::load_from(&vars(&[(
            "RTDB_DATABASE_URL",
            "https://example-db.firebaseio.com",
        )]))
        .unwrap();

        assert_eq!(
            settings.database.url.as_deref(),
            Some("https://example-db.firebaseio.com")
        );
    }

    #[test]
    fn missing_database_url_is_passed_through() {
        let settings = Settings::load_from(&vars(&[])).unwrap();
        assert_eq!(settings.database.url, None);
        assert_eq!(settings.environment, Environment::Local);
    }

    #[test]
    fn log_settings_follow_environment() {
        let settings = Settings::load_from(&vars(&[
            ("RTDB_LOG_FORMAT", "json"),
            ("RTDB_LOG_FILTER", "debug"),
        ]))
        .unwrap();

        assert_eq!(settings.log.format, LogFormat::Json);
        assert_eq!(settings.log.filter, "debug");
    }

    #[test]
    fn unsupported_environment_is_rejected() {
        let err = Settings::load_from(&vars(&[("RTDB_ENV", "qa")])).unwrap_err();
        assert!(err.to_string().contains("unsupported environment 'qa'"));
    }

    #[test]
    fn environment_file_overrides_base_file() {
        let dir = std::env::temp_dir().join(format!("rtdb-settings-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("base.toml"),
            "[database]\nurl = \"https://base.firebaseio.com\"\n",
        )
        .unwrap();
        std::fs::write(
            dir.join("staging.toml"),
            "[database]\nurl = \"https://staging.firebaseio.com\"\n",
        )
        .unwrap();

        let settings = Settings::load_from(&vars(&[
            ("RTDB_ENV", "staging"),
            (CONFIG_DIR_ENV, dir.to_str().unwrap()),
        ]))
        .unwrap();

        std::fs::remove_dir_all(&dir).ok();

        assert_eq!(settings.environment, Environment::Staging);
        assert_eq!(
            settings.database.url.as_deref(),
            Some("https://staging.firebaseio.com")
        );
    }
}
