use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdShield;
use dioxus_free_icons::Icon;
use shared_ui::{Skeleton, SkeletonLines, SkeletonShape};

/// Placeholder for the sign-in card while the authentication forms load.
#[component]
pub fn AuthPending() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth_pending.css") }

        div { class: "auth-pending-card", role: "status", "aria-live": "polite",
            div { class: "auth-pending-header",
                Icon { icon: LdShield, width: 28, height: 28 }
                Skeleton { class: "h-6 w-40" }
            }
            SkeletonLines { lines: 2 }
            div { class: "auth-pending-fields",
                Skeleton { class: "h-10 w-full" }
                Skeleton { class: "h-10 w-full" }
            }
            div { class: "auth-pending-footer",
                Skeleton { shape: SkeletonShape::Circle, class: "h-8 w-8" }
                Skeleton { class: "h-10 w-full rounded-lg" }
            }
            span { class: "sr-only", "Loading…" }
        }
    }
}
