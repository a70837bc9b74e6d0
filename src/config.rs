use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

use crate::alerting::AlertPolicy;

/// Application-level constants
pub const APP_NAME: &str = "SilverCare";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Port the original dashboard front end talks to.
pub const DEFAULT_PORT: u16 = 5001;

pub const ENV_BIND: &str = "SILVERCARE_BIND";
pub const ENV_PORT: &str = "SILVERCARE_PORT";
pub const ENV_DB: &str = "SILVERCARE_DB";
pub const ENV_ALERT_POLICY: &str = "SILVERCARE_ALERT_POLICY";

/// Log filter used when `RUST_LOG` is unset. Targets match by prefix,
/// so `silvercare` covers both the binary and `silvercare_lib`.
pub fn default_log_filter() -> &'static str {
    "silvercare=info,tower_http=info"
}

/// Get the application data directory
/// ~/SilverCare/ on all platforms, falling back to the working directory
/// when no home directory can be resolved.
pub fn app_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Default location of the SQLite database.
pub fn default_database_path() -> PathBuf {
    app_data_dir().join("silvercare.db")
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value}")]
    InvalidValue { var: &'static str, value: String },
}

/// Runtime configuration for the service.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub bind: IpAddr,
    pub port: u16,
    pub database_path: PathBuf,
    pub alert_policy: AlertPolicy,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            database_path: default_database_path(),
            alert_policy: AlertPolicy::default(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    /// Unset or blank variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = get(ENV_BIND) {
            config.bind = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                var: ENV_BIND,
                value,
            })?;
        }
        if let Some(value) = get(ENV_PORT) {
            config.port = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                var: ENV_PORT,
                value,
            })?;
        }
        if let Some(value) = get(ENV_DB) {
            config.database_path = PathBuf::from(value);
        }
        if let Some(value) = get(ENV_ALERT_POLICY) {
            config.alert_policy = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                var: ENV_ALERT_POLICY,
                value,
            })?;
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}
