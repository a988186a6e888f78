use config::{Config, ConfigError, Environment, File};
use derive_more::Display;
use dotenv::dotenv;
use serde::Deserialize;
use std::{env, fmt, str::FromStr};

#[derive(Debug, Display, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    #[display("development")]
    Development,
    #[display("production")]
    Production,
    #[display("testing")]
    Testing,
}

impl FromStr for AppEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(AppEnvironment::Development),
            "production" => Ok(AppEnvironment::Production),
            "testing" => Ok(AppEnvironment::Testing),
            _ => Err(ConfigError::Message(format!("Invalid environment: {}", s))),
        }
    }
}

#[derive(Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    #[serde(default = "default_env")]
    pub env: AppEnvironment,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_worker_count")]
    pub worker_count: usize,

    #[serde(default)]
    pub database_url: String,

    #[serde(default = "default_cors_origins")]
    pub cors_allowed_origins: Vec<String>,
}

fn default_env() -> AppEnvironment {
    AppEnvironment::Development
}
fn default_name() -> String {
    "Portfolio-API".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_worker_count() -> usize {
    num_cpus::get()
}
fn default_cors_origins() -> Vec<String> {
    // the frontend dev server
    vec!["http://localhost:3000".to_string()]
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok();

        let raw_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let env_name = AppEnvironment::from_str(&raw_env)
            .map_err(|_| ConfigError::Message(format!("Invalid APP_ENV value: {}", raw_env)))?;

        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(
                File::with_name(&format!("config/{}", env_name.to_string().to_lowercase()))
                    .required(false),
            )
            .add_source(
                Environment::with_prefix("APP")
                    .separator("_")
                    .ignore_empty(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;

        config.env = env_name;

        // Inject critical env values if missing
        config.database_url = fill_or_env(config.database_url, "APP_DATABASE_URL")?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.database_url.trim().is_empty() {
            errors.push("DATABASE_URL cannot be empty");
        }
        if self.is_production() && self.cors_origins().iter().any(|o| o == "*") {
            errors.push("Wildcard CORS (*) is not allowed in production");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Message(errors.join(", ")))
        }
    }

    pub fn is_production(&self) -> bool {
        self.env == AppEnvironment::Production
    }

    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_allowed_origins
            .iter()
            .flat_map(|origin| origin.split(','))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

fn fill_or_env(current: String, env_key: &str) -> Result<String, ConfigError> {
    if current.trim().is_empty() {
        env::var(env_key).map_err(|_| ConfigError::Message(format!("{env_key} must be set")))
    } else {
        Ok(current)
    }
}

trait Redact {
    fn redact(&self) -> &str;
}

impl Redact for str {
    fn redact(&self) -> &str {
        if self.is_empty() {
            "[MISSING]"
        } else {
            "[REDACTED]"
        }
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("name", &self.name)
            .field("port", &self.port)
            .field("host", &self.host)
            .field("worker_count", &self.worker_count)
            .field("database_url", &self.database_url.redact())
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> AppConfig {
        AppConfig {
            env: AppEnvironment::Testing,
            name: default_name(),
            port: default_port(),
            host: default_host(),
            worker_count: 1,
            database_url: "postgres://localhost/portfolio_test".into(),
            cors_allowed_origins: default_cors_origins(),
        }
    }

    #[test]
    fn cors_origins_splits_comma_separated_entries() {
        let mut config = base_config();
        config.cors_allowed_origins =
            vec!["http://localhost:3000, https://example.com".to_string()];

        assert_eq!(
            config.cors_origins(),
            vec!["http://localhost:3000", "https://example.com"]
        );
    }

    #[test]
    fn wildcard_cors_rejected_in_production() {
        let mut config = base_config();
        config.env = AppEnvironment::Production;
        config.cors_allowed_origins = vec!["*".to_string()];

        assert!(config.validate().is_err());
    }

    #[test]
    fn environment_round_trips_through_from_str() {
        for raw in ["development", "production", "testing"] {
            let env = AppEnvironment::from_str(raw).unwrap();
            assert_eq!(env.to_string(), raw);
        }
        assert!(AppEnvironment::from_str("staging").is_err());
    }

    #[test]
    fn database_url_is_redacted_in_debug_output() {
        let config = base_config();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("portfolio_test"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
