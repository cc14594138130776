use dioxus::prelude::*;
use dioxus::dioxus_core::AttributeValue;

use crate::class_merge::merge_classes;

/// Classes every skeleton carries before its shape and caller overrides.
pub const SKELETON_BASE: &[&str] = &["skeleton", "animate-pulse", "bg-muted"];

/// Outline of a loading placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SkeletonShape {
    #[default]
    Rounded,
    Circle,
    /// A single line of text.
    Text,
    Square,
}

impl SkeletonShape {
    fn as_str(&self) -> &'static str {
        match self {
            SkeletonShape::Rounded => "rounded",
            SkeletonShape::Circle => "circle",
            SkeletonShape::Text => "text",
            SkeletonShape::Square => "square",
        }
    }

    /// Rounding token contributed to the base class set.
    pub fn class(&self) -> &'static str {
        match self {
            SkeletonShape::Rounded => "rounded-md",
            SkeletonShape::Circle => "rounded-full",
            SkeletonShape::Text => "rounded-sm",
            SkeletonShape::Square => "rounded-none",
        }
    }
}

/// Effective class list for a skeleton of `shape` with caller `overrides`.
pub fn skeleton_class(shape: SkeletonShape, overrides: &str) -> String {
    let mut base = SKELETON_BASE.to_vec();
    base.push(shape.class());
    let overrides: Vec<&str> = overrides.split_whitespace().collect();
    merge_classes(&base, &overrides).join(" ")
}

/// Pull caller `class` attributes out of a spread, leaving the rest untouched.
pub(crate) fn split_class_attributes(attributes: Vec<Attribute>) -> (String, Vec<Attribute>) {
    let mut classes = Vec::new();
    let mut rest = Vec::with_capacity(attributes.len());
    for attr in attributes {
        if attr.name != "class" {
            rest.push(attr);
            continue;
        }
        if let AttributeValue::Text(value) = &attr.value {
            classes.push(value.clone());
        }
    }
    (classes.join(" "), rest)
}

/// A loading placeholder with an animated pulse.
///
/// `class` tokens given by the caller replace base tokens of the same
/// style group (`rounded-full` replaces the shape's rounding, `bg-*` the
/// fill). Every other attribute lands on the `div` unchanged.
#[component]
pub fn Skeleton(
    #[props(default)] shape: SkeletonShape,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let (overrides, pass_through) = split_class_attributes(attributes);
    let base = vec![
        Attribute::new("class", skeleton_class(shape, &overrides), None, false),
        Attribute::new("data-shape", shape.as_str(), None, false),
        Attribute::new("aria-busy", "true", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, pass_through]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
        }
    }
}

fn line_class(index: usize, lines: usize) -> &'static str {
    if lines > 1 && index + 1 == lines {
        "h-4 w-3/5"
    } else {
        "h-4 w-full"
    }
}

/// A paragraph-shaped stack of text skeletons; the last line is shortened.
#[component]
pub fn SkeletonLines(
    #[props(default = 3)] lines: usize,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let (overrides, pass_through) = split_class_attributes(attributes);
    let class = crate::class_merge::cn("skeleton-lines", &overrides);
    let base = vec![Attribute::new("class", class, None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, pass_through]);

    rsx! {
        div {
            ..merged,
            for i in 0..lines {
                Skeleton {
                    key: "{i}",
                    shape: SkeletonShape::Text,
                    class: line_class(i, lines),
                }
            }
        }
    }
}
