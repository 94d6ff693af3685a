//! Process identity: the `host` and `service` written into every record.

use std::env::{self, VarError};

use crate::config::schema::ChillogConfig;
use crate::config::ConfigError;

/// Host and service identifiers, resolved once per process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    host: String,
    service: String,
}

/// Outcome of reading one environment variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvValue {
    Present(String),
    NotUnicode(String),
    Absent,
}

impl Identity {
    pub fn new(host: impl Into<String>, service: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            service: service.into(),
        }
    }

    /// Resolve the identity from the process environment and the OS hostname.
    pub fn from_env(config: &ChillogConfig) -> Result<Self, ConfigError> {
        Self::resolve(config, read_env, os_hostname)
    }

    /// Resolve the identity from injected lookups.
    ///
    /// Host: `host_var`, then `hostname()` when enabled, then `""`.
    /// Service: `service_var`, or [`ConfigError::MissingService`].
    pub fn resolve<E, H>(config: &ChillogConfig, env: E, hostname: H) -> Result<Self, ConfigError>
    where
        E: Fn(&str) -> EnvValue,
        H: FnOnce() -> Option<String>,
    {
        let service = match env(&config.service_var) {
            EnvValue::Present(service) => service,
            EnvValue::NotUnicode(_) => {
                return Err(ConfigError::NotUnicode {
                    var: config.service_var.clone(),
                })
            }
            EnvValue::Absent => {
                return Err(ConfigError::MissingService {
                    var: config.service_var.clone(),
                })
            }
        };

        let host = match env(&config.host_var) {
            EnvValue::Present(host) | EnvValue::NotUnicode(host) => host,
            EnvValue::Absent if config.resolve_hostname => hostname().unwrap_or_else(|| {
                tracing::debug!("Hostname could not be resolved, using empty host");
                String::new()
            }),
            EnvValue::Absent => String::new(),
        };

        tracing::debug!(host = %host, service = %service, "Process identity resolved");

        Ok(Self { host, service })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn service(&self) -> &str {
        &self.service
    }
}

fn read_env(name: &str) -> EnvValue {
    match env::var(name) {
        Ok(value) => EnvValue::Present(value),
        Err(VarError::NotPresent) => EnvValue::Absent,
        Err(VarError::NotUnicode(raw)) => EnvValue::NotUnicode(raw.to_string_lossy().into_owned()),
    }
}

fn os_hostname() -> Option<String> {
    let name = gethostname::gethostname();
    if name.is_empty() {
        return None;
    }
    Some(name.to_string_lossy().into_owned())
}
