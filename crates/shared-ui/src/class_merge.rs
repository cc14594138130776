//! Style-token merging for component class lists.
//!
//! Every class token belongs to a conflict group (its [`StyleKey`]). When a
//! base set and an override set both carry a token for the same key, the
//! override wins and the base token is dropped. Tokens without a recognised
//! group are their own key, so they only collide with identical tokens.

/// Utility prefixes that take a value after a dash, longest first so that
/// `rounded-tl-md` is keyed `rounded-tl`, not `rounded`.
const GROUPS: &[&str] = &[
    "rounded-tl",
    "rounded-tr",
    "rounded-bl",
    "rounded-br",
    "rounded-t",
    "rounded-b",
    "rounded-l",
    "rounded-r",
    "rounded",
    "animate",
    "opacity",
    "min-h",
    "min-w",
    "max-h",
    "max-w",
    "size",
    "bg",
    "gap",
    "px",
    "py",
    "pt",
    "pb",
    "pl",
    "pr",
    "mx",
    "my",
    "mt",
    "mb",
    "ml",
    "mr",
    "h",
    "w",
    "p",
    "m",
    "z",
];

const TEXT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];

const TEXT_OVERFLOW: &[&str] = &["ellipsis", "clip"];

const TEXT_WRAP: &[&str] = &["wrap", "nowrap", "balance", "pretty"];

const DISPLAY: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "contents",
    "hidden",
];

const POSITION: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];

/// The conflict group of a style token, including its variant prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleKey {
    /// Variant prefix such as `hover:` or `md:dark:`, empty when absent.
    pub variants: String,
    pub group: String,
}

/// Derive the key of a single token.
pub fn style_key(token: &str) -> StyleKey {
    let (variants, utility) = match variant_split(token) {
        Some(idx) => (&token[..=idx], &token[idx + 1..]),
        None => ("", token),
    };
    let utility = utility.strip_prefix('!').unwrap_or(utility);
    // negative values (`-mt-2`) share the group of their positive form
    let bare = utility.strip_prefix('-').unwrap_or(utility);

    StyleKey {
        variants: variants.to_string(),
        group: utility_group(bare).unwrap_or(utility).to_string(),
    }
}

/// Index of the last `:` outside `[...]`, so arbitrary values such as
/// `bg-[url(https://x)]` are not mistaken for variants.
fn variant_split(token: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut split = None;
    for (idx, ch) in token.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => split = Some(idx),
            _ => {}
        }
    }
    split
}

fn utility_group(utility: &str) -> Option<&str> {
    if DISPLAY.contains(&utility) {
        return Some("display");
    }
    if POSITION.contains(&utility) {
        return Some("position");
    }
    if let Some(value) = utility.strip_prefix("text-") {
        return Some(if TEXT_SIZES.contains(&value) {
            "text-size"
        } else if TEXT_ALIGN.contains(&value) {
            "text-align"
        } else if TEXT_OVERFLOW.contains(&value) {
            "text-overflow"
        } else if TEXT_WRAP.contains(&value) {
            "text-wrap"
        } else {
            "text-color"
        });
    }
    GROUPS.iter().copied().find(|group| {
        utility == *group
            || utility
                .strip_prefix(group)
                .is_some_and(|rest| rest.starts_with('-') && rest.len() > 1)
    })
}

/// Precedence-resolved union of two ordered token sequences.
///
/// Base tokens whose key is not overridden keep their order and come first,
/// followed by the override tokens. Within either sequence a later token
/// replaces an earlier one with the same key.
pub fn merge_classes<B, O>(base: &[B], overrides: &[O]) -> Vec<String>
where
    B: AsRef<str>,
    O: AsRef<str>,
{
    let overrides = dedup_last_wins(overrides.iter().map(|s| s.as_ref()));
    let override_keys: Vec<StyleKey> = overrides.iter().map(|t| style_key(t)).collect();

    let mut merged: Vec<String> = dedup_last_wins(base.iter().map(|s| s.as_ref()))
        .into_iter()
        .filter(|t| !override_keys.contains(&style_key(t)))
        .map(str::to_string)
        .collect();
    merged.extend(overrides.into_iter().map(str::to_string));
    merged
}

/// [`merge_classes`] over whitespace-separated class strings.
pub fn cn(base: &str, overrides: &str) -> String {
    let base: Vec<&str> = base.split_whitespace().collect();
    let overrides: Vec<&str> = overrides.split_whitespace().collect();
    merge_classes(&base, &overrides).join(" ")
}

/// Keep only the last token of each key, preserving the order of survivors.
fn dedup_last_wins<'a>(tokens: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let tokens: Vec<&str> = tokens.filter(|t| !t.is_empty()).collect();
    let keys: Vec<StyleKey> = tokens.iter().map(|t| style_key(t)).collect();
    tokens
        .iter()
        .enumerate()
        .filter(|(i, _)| !keys[i + 1..].contains(&keys[*i]))
        .map(|(_, t)| *t)
        .collect()
}
