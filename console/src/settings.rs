use std::time::Duration;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Console settings, read from `JOBPOST_*` environment variables.
#[derive(Deserialize, Debug)]
pub struct Settings {
    /// `JOBPOST_API_URL`
    pub api_url: String,
    /// `JOBPOST_NOTIFICATION_SECS`
    pub notification_secs: u64,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_env(Environment::with_prefix("JOBPOST"))
    }

    fn from_env(env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("api_url", DEFAULT_API_URL)?
            .set_default("notification_secs", 5)?
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn notification_timeout(&self) -> Duration {
        Duration::from_secs(self.notification_secs)
    }
}
