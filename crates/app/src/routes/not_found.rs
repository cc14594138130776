use dioxus::prelude::*;
use shared_types::PageMetadata;

use crate::routes::auth_layout::AuthShell;
use crate::routes::Route;

/// Document metadata for a path that matched no route.
fn missing_page_metadata(segments: &[String]) -> (String, PageMetadata) {
    let path = format!("/{}", segments.join("/"));
    let metadata = PageMetadata::new(
        "Page not found",
        format!("Nothing is served at {path}."),
    );
    (path, metadata)
}

/// Catch-all page, framed like the auth views so it has a title and description.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let (path, metadata) = missing_page_metadata(&route);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        AuthShell { metadata,
            section { class: "missing-page", role: "alert",
                p { class: "missing-page-status", "404" }
                p { class: "missing-page-path",
                    "No page at "
                    code { "{path}" }
                }
                Link { to: Route::AuthPending {}, class: "missing-page-link", "Go to sign in" }
            }
        }
    }
}
