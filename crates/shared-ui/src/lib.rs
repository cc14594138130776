pub mod class_merge;
pub mod components;

pub use class_merge::{cn, merge_classes, style_key, StyleKey};
pub use components::*;
