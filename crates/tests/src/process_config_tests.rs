use pretty_assertions::assert_eq;
use server::config::{resolve_settings, try_resolve_settings};
use server::process::ecosystem;
use shared_types::{AppConfig, Ecosystem};

use crate::common;

#[test]
fn test_env_settings_flow_into_process_env() {
    let file: AppConfig = toml_file("[server]\nport = 4100\n");
    let lookup = common::env(&[("NEXT_PUBLIC_API_URL", "https://api.example.com/")]);
    let settings = try_resolve_settings(file, &lookup).unwrap();

    let eco = ecosystem(&settings, &lookup);
    let web = &eco.apps[0];
    assert_eq!(web.port(), Some(4100));
    assert_eq!(
        web.env.get("NEXT_PUBLIC_API_URL").map(String::as_str),
        Some("https://api.example.com")
    );
    assert!(web.autorestart);
}

#[test]
fn test_ecosystem_json_is_readable_back() {
    let settings = resolve_settings(Ok(AppConfig::default()), common::env(&[]));
    let eco = ecosystem(&settings, common::env(&[("PROCESS_NAME", "portal-green")]));

    let json = eco.to_json_pretty().unwrap();
    let parsed: Ecosystem = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, eco);
    assert_eq!(parsed.apps[0].name, "portal-green");
}

fn toml_file(src: &str) -> AppConfig {
    let dir = std::env::temp_dir().join(format!("portal-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    std::fs::write(&path, src).unwrap();
    server::config::read_config_file(path.to_str().unwrap()).unwrap()
}
