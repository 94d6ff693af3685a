//! Configuration schema definitions.
//!
//! All types derive `Deserialize` for loading from config files.

use serde::Deserialize;

/// Conventional environment variable holding the hostname override.
pub const DEFAULT_HOST_VAR: &str = "HOSTNAME";

/// Conventional environment variable holding the service name.
pub const DEFAULT_SERVICE_VAR: &str = "SERVICE_NAME";

/// Root configuration: where the process identity comes from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChillogConfig {
    /// Environment variable checked first for the host name.
    pub host_var: String,

    /// Environment variable holding the service name (required at startup).
    pub service_var: String,

    /// Fall back to the OS hostname when `host_var` is unset.
    pub resolve_hostname: bool,
}

impl Default for ChillogConfig {
    fn default() -> Self {
        Self {
            host_var: DEFAULT_HOST_VAR.to_string(),
            service_var: DEFAULT_SERVICE_VAR.to_string(),
            resolve_hostname: true,
        }
    }
}
