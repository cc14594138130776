use dioxus::prelude::*;
use shared_types::PageMetadata;

use crate::routes::Route;
use crate::use_public_config;

/// Full-viewport frame for the authentication views.
///
/// Applies `metadata` to the document head and renders `children` inside
/// the frame; it adds nothing else to the content.
#[component]
pub fn AuthShell(
    #[props(default = PageMetadata::auth())] metadata: PageMetadata,
    children: Element,
) -> Element {
    rsx! {
        document::Title { "{metadata.title}" }
        document::Meta { name: "description", content: metadata.description.clone() }
        document::Link { rel: "stylesheet", href: asset!("./auth_layout.css") }

        div { class: "auth-shell min-h-screen w-full",
            {children}
        }
    }
}

/// [`AuthShell`] wired to the public runtime config from context.
///
/// The API base URL is published both as a `<meta>` tag and as a data
/// attribute on the frame so client scripts can find the backend.
#[component]
pub fn AuthFrame(children: Element) -> Element {
    let config = use_public_config();

    rsx! {
        document::Meta { name: "api-base-url", content: config.api_url.clone() }
        div { class: "auth-frame", "data-api-base-url": config.api_url,
            AuthShell { metadata: PageMetadata::auth(),
                {children}
            }
        }
    }
}

/// Router layout wrapping every auth route in an [`AuthFrame`].
#[component]
pub fn AuthLayout() -> Element {
    rsx! {
        AuthFrame {
            Outlet::<Route> {}
        }
    }
}
