use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{ServerSettings, API_URL_VAR, HOST_VAR, PORT_VAR};

/// Launch and restart description for one supervised process.
///
/// This is declarative data for an external process supervisor. Field names
/// follow the supervisor's ecosystem file so the serialized form can be
/// handed to it unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProcessConfig {
    pub name: String,
    pub script: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<String>,
    #[serde(default = "default_instances")]
    pub instances: u32,
    #[serde(default = "default_autorestart")]
    pub autorestart: bool,
    #[serde(default = "default_max_restarts")]
    pub max_restarts: u32,
    #[serde(default = "default_restart_delay")]
    pub restart_delay: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_memory_restart: Option<String>,
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

fn default_instances() -> u32 {
    1
}

fn default_autorestart() -> bool {
    true
}

fn default_max_restarts() -> u32 {
    10
}

/// Milliseconds between restarts.
fn default_restart_delay() -> u64 {
    1000
}

impl ProcessConfig {
    /// Describe the web server process for the given settings.
    ///
    /// The listening port, bind address and API base URL are carried as
    /// environment variables so the launched binary reads the same values
    /// it was described with.
    pub fn for_server(
        name: impl Into<String>,
        script: impl Into<String>,
        settings: &ServerSettings,
    ) -> Self {
        let mut env = BTreeMap::new();
        env.insert(HOST_VAR.to_string(), settings.host.clone());
        env.insert(PORT_VAR.to_string(), settings.port.to_string());
        env.insert(
            API_URL_VAR.to_string(),
            settings.normalized_api_url().to_string(),
        );

        Self {
            name: name.into(),
            script: script.into(),
            args: Vec::new(),
            cwd: None,
            instances: default_instances(),
            autorestart: default_autorestart(),
            max_restarts: default_max_restarts(),
            restart_delay: default_restart_delay(),
            max_memory_restart: None,
            env,
        }
    }

    /// Port the process will listen on, if present in its environment.
    pub fn port(&self) -> Option<u16> {
        self.env.get(PORT_VAR).and_then(|p| p.parse().ok())
    }
}

/// A supervisor ecosystem file: the list of processes to run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Ecosystem {
    pub apps: Vec<ProcessConfig>,
}

impl Ecosystem {
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> ServerSettings {
        ServerSettings {
            host: "0.0.0.0".to_string(),
            port: 3100,
            api_url: "https://api.example.com/".to_string(),
        }
    }

    #[test]
    fn for_server_carries_port_and_api_url_in_env() {
        let proc = ProcessConfig::for_server("portal", "target/release/app", &settings());
        assert_eq!(proc.env.get("PORT").map(String::as_str), Some("3100"));
        assert_eq!(
            proc.env.get("NEXT_PUBLIC_API_URL").map(String::as_str),
            Some("https://api.example.com")
        );
        assert_eq!(proc.env.get("HOST").map(String::as_str), Some("0.0.0.0"));
        assert_eq!(proc.port(), Some(3100));
    }

    #[test]
    fn for_server_restart_policy_defaults() {
        let proc = ProcessConfig::for_server("portal", "app", &settings());
        assert!(proc.autorestart);
        assert_eq!(proc.instances, 1);
        assert_eq!(proc.max_restarts, 10);
        assert_eq!(proc.restart_delay, 1000);
    }

    #[test]
    fn ecosystem_json_has_apps_array() {
        let eco = Ecosystem {
            apps: vec![ProcessConfig::for_server("portal", "app", &settings())],
        };
        let value: serde_json::Value =
            serde_json::from_str(&eco.to_json_pretty().unwrap()).unwrap();
        assert_eq!(value["apps"][0]["name"], "portal");
        assert_eq!(value["apps"][0]["env"]["PORT"], "3100");
        // empty optional fields are omitted
        assert!(value["apps"][0].get("args").is_none());
        assert!(value["apps"][0].get("cwd").is_none());
    }

    #[test]
    fn deserialize_minimal_entry_fills_defaults() {
        let proc: ProcessConfig =
            serde_json::from_str(r#"{"name":"web","script":"npm"}"#).unwrap();
        assert_eq!(proc.instances, 1);
        assert!(proc.autorestart);
        assert!(proc.env.is_empty());
        assert_eq!(proc.port(), None);
    }
}
