use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use shared_ui::{cn, Skeleton, SkeletonShape};

#[test]
fn test_override_set_wins_per_key_and_keeps_the_rest() {
    let base = "skeleton animate-pulse bg-muted rounded-md";
    let merged = cn(base, "bg-card h-4");
    assert_eq!(merged, "skeleton animate-pulse rounded-md bg-card h-4");
}

#[test]
fn test_skeleton_passes_identifier_and_data_attributes_through() {
    let html = dioxus_ssr::render_element(rsx! {
        Skeleton {
            id: "card-loading",
            title: "Loading card",
            shape: SkeletonShape::Square,
            class: "h-32 w-full",
        }
    });
    assert!(html.contains(r#"id="card-loading""#), "{html}");
    assert!(html.contains(r#"title="Loading card""#), "{html}");
    assert!(
        html.contains(r#"class="skeleton animate-pulse bg-muted rounded-none h-32 w-full""#),
        "{html}"
    );
}

#[test]
fn test_skeletons_in_a_list_render_independently() {
    let html = dioxus_ssr::render_element(rsx! {
        div {
            Skeleton { class: "h-4" }
            Skeleton { class: "h-8 rounded-full" }
        }
    });
    assert!(html.contains("bg-muted rounded-md h-4"), "{html}");
    assert!(html.contains("bg-muted h-8 rounded-full"), "{html}");
}
