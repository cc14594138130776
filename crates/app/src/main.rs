use dioxus::prelude::*;
use shared_types::{AppError, PublicConfig};

mod routes;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        let settings = server::config::load_settings();
        server::health::record_start_time();
        tracing::info!(bind = %settings.bind_addr(), "starting web server");

        let router = dioxus::server::router(App)
            .merge(server::health::health_router())
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

/// Public runtime configuration provided by `App` as context.
pub fn use_public_config() -> PublicConfig {
    use_context()
}

#[component]
fn App() -> Element {
    // Fetch the public config once; fall back to defaults so the UI still renders
    let config_resource =
        use_server_future(move || async move { server::api::get_public_config().await })?;

    let config = match config_resource.read().as_ref().cloned() {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            tracing::warn!(
                error = %AppError::friendly_message(&e.to_string()),
                "public config unavailable, using defaults"
            );
            PublicConfig::default()
        }
        None => PublicConfig::default(),
    };

    use_context_provider(|| config);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
