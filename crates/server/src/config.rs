use shared_types::{AppConfig, AppError, ServerSettings};
use std::sync::OnceLock;

static SETTINGS: OnceLock<ServerSettings> = OnceLock::new();

/// Path to the config file, relative to the project root.
pub const CONFIG_PATH: &str = "config.toml";

/// Read and parse a config file. A missing file is not an error and yields
/// the defaults; an unparseable one is.
pub fn read_config_file(path: &str) -> Result<AppConfig, AppError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents)
            .map_err(|e| AppError::config(format!("failed to parse {path}: {e}"))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!(path, "config file not found, using defaults");
            Ok(AppConfig::default())
        }
        Err(e) => Err(AppError::config(format!("failed to read {path}: {e}"))),
    }
}

/// Combine the file settings with environment overrides and validate them.
pub fn try_resolve_settings<F>(file: AppConfig, lookup: F) -> Result<ServerSettings, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = file.server;
    settings.apply_env(lookup)?;
    settings.validate()?;
    Ok(settings)
}

/// Like [`try_resolve_settings`], but never fails: each broken layer is
/// logged and skipped, ending at the built-in defaults.
pub fn resolve_settings<F>(file: Result<AppConfig, AppError>, lookup: F) -> ServerSettings
where
    F: Fn(&str) -> Option<String>,
{
    let file = file.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring config file");
        AppConfig::default()
    });

    match try_resolve_settings(file, &lookup) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!(error = %e, "invalid server settings, falling back to defaults");
            let mut defaults = ServerSettings::default();
            // a bad file value should not discard a good environment override
            match defaults.apply_env(&lookup).and_then(|_| defaults.validate()) {
                Ok(()) => defaults,
                Err(_) => ServerSettings::default(),
            }
        }
    }
}

/// Load `.env`, `config.toml` and the process environment once and store the
/// result. Safe to call multiple times; only the first call has effect.
pub fn load_settings() -> &'static ServerSettings {
    SETTINGS.get_or_init(|| {
        let _ = dotenvy::dotenv();
        let settings = resolve_settings(read_config_file(CONFIG_PATH), |name| {
            std::env::var(name).ok()
        });
        tracing::info!(
            bind = %settings.bind_addr(),
            api_url = %settings.normalized_api_url(),
            "server settings loaded"
        );
        settings
    })
}

/// Strict variant of [`load_settings`] for tooling: any problem is an error.
pub fn try_load_settings() -> Result<ServerSettings, AppError> {
    let _ = dotenvy::dotenv();
    try_resolve_settings(read_config_file(CONFIG_PATH)?, |name| {
        std::env::var(name).ok()
    })
}

/// The loaded settings, loading them on first use.
pub fn settings() -> &'static ServerSettings {
    load_settings()
}
