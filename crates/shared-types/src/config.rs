use serde::{Deserialize, Serialize};

use crate::AppError;

/// Environment variable carrying the backend API base URL.
pub const API_URL_VAR: &str = "NEXT_PUBLIC_API_URL";
/// Environment variable carrying the listening port.
pub const PORT_VAR: &str = "PORT";
/// Environment variable carrying the bind address.
pub const HOST_VAR: &str = "HOST";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Settings for the web server process.
///
/// Read from the `[server]` table of `config.toml`, then overridden by the
/// `HOST`, `PORT` and `NEXT_PUBLIC_API_URL` environment variables. Every
/// field has a default so a missing file or table still yields a usable
/// configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            api_url: default_api_url(),
        }
    }
}

impl ServerSettings {
    /// Apply environment overrides using `lookup` to resolve variables.
    ///
    /// Empty values are ignored. A `PORT` that is not a valid `u16` is an error;
    /// the remaining overrides are still applied before it is returned.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(host) = non_empty(HOST_VAR) {
            self.host = host.trim().to_string();
        }
        if let Some(url) = non_empty(API_URL_VAR) {
            self.api_url = url.trim().to_string();
        }
        if let Some(port) = non_empty(PORT_VAR) {
            self.port = port.trim().parse().map_err(|_| {
                AppError::config(format!("{PORT_VAR} must be a port number, got {port:?}"))
            })?;
        }
        Ok(())
    }

    /// Check that the settings describe a process that can actually start.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.host.trim().is_empty() {
            return Err(AppError::config("host must not be empty"));
        }
        if self.port == 0 {
            return Err(AppError::config("port must be non-zero"));
        }
        let rest = self
            .api_url
            .strip_prefix("https://")
            .or_else(|| self.api_url.strip_prefix("http://"))
            .ok_or_else(|| {
                AppError::config(format!(
                    "api_url must start with http:// or https://, got {:?}",
                    self.api_url
                ))
            })?;
        let authority = rest.split('/').next().unwrap_or_default();
        if authority.is_empty() || authority.chars().any(char::is_whitespace) {
            return Err(AppError::config(format!(
                "api_url has no valid host: {:?}",
                self.api_url
            )));
        }
        Ok(())
    }

    /// The API base URL without trailing slashes.
    pub fn normalized_api_url(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }

    /// `host:port` bind address.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The subset of settings that is safe to hand to the client.
    pub fn public(&self) -> PublicConfig {
        PublicConfig {
            api_url: self.normalized_api_url().to_string(),
        }
    }
}

/// Runtime configuration exposed to the browser.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PublicConfig {
    pub api_url: String,
}

impl Default for PublicConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
}
