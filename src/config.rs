use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

/// The service always listens here; the port is not configurable.
pub const LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Runtime configuration, resolved from defaults and the process environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// sqlx connection URL, read from `DATABASE_URL`.
    pub database_url: String,
    /// Fallback tracing filter when `RUST_LOG` is not set, read from `LOGLEVEL`.
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://people.db".to_string(),
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    /// Defaults overlaid with `DATABASE_URL` / `LOGLEVEL` from the environment.
    pub fn from_env() -> Result<Self, figment::Error> {
        Self::from_figment(Figment::new().merge(Env::raw().only(&["DATABASE_URL", "LOGLEVEL"])))
    }

    pub fn from_figment(overrides: Figment) -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(overrides)
            .extract()
    }
}
