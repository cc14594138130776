use dioxus::prelude::*;
use shared_types::PublicConfig;

/// Runtime configuration the client needs, such as the backend API base URL.
/// No auth required — these values are public by definition.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_public_config() -> Result<PublicConfig, ServerFnError> {
    Ok(crate::config::settings().public())
}
