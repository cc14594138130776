use shared_types::{Ecosystem, ProcessConfig, ServerSettings};

pub const DEFAULT_PROCESS_NAME: &str = "portal-web";
/// Server binary as produced by a release bundle.
pub const DEFAULT_SCRIPT: &str = "./server";

/// Build the supervisor ecosystem for the web server.
///
/// `PROCESS_NAME`, `PROCESS_SCRIPT`, `PROCESS_CWD` and `MAX_MEMORY_RESTART`
/// are read through `lookup` to adjust the launch entry.
pub fn ecosystem<F>(settings: &ServerSettings, lookup: F) -> Ecosystem
where
    F: Fn(&str) -> Option<String>,
{
    let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    let name = var("PROCESS_NAME").unwrap_or_else(|| DEFAULT_PROCESS_NAME.to_string());
    let script = var("PROCESS_SCRIPT").unwrap_or_else(|| DEFAULT_SCRIPT.to_string());

    let mut web = ProcessConfig::for_server(name, script, settings);
    web.cwd = var("PROCESS_CWD");
    web.max_memory_restart = var("MAX_MEMORY_RESTART");

    Ecosystem { apps: vec![web] }
}
