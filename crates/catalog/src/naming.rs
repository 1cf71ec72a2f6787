//! Group keys and display titles.
//!
//! Category names coming from the admin panel are inconsistent about spaces and
//! hyphens ("Датчики и извещатели", "Датчики-и-извещатели", "Датчики - и извещатели"),
//! so groups are bucketed by a hyphenated key and only a few keys are turned
//! back into spaced titles for display.

use crate::product::{CatalogProduct, Subcategory};

/// Group for products without a category.
pub const FALLBACK_GROUP_NAME: &str = "Другие товары";

const SECURITY_HUB: &str = "Security Hub";
const PKP_ADDONS_KEY: &str = "Дополнения-к-ПКП";
const PKP_ADDONS_KEY_LOWER: &str = "Дополнения-к-пкп";
const PKP_ADDONS_TITLE: &str = "Дополнения к ПКП";

/// Trim and collapse every run of whitespace/hyphens into a single `-`.
pub fn normalize_group_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_separator = false;
    for c in name.trim().chars() {
        if c == '-' || c.is_whitespace() {
            if !in_separator {
                out.push('-');
                in_separator = true;
            }
        } else {
            out.push(c);
            in_separator = false;
        }
    }
    out
}

/// Bucketing key for one product.
///
/// A matching subcategory of the page wins over the product's own category;
/// products without a category, or with an empty category name, land in
/// [`FALLBACK_GROUP_NAME`].
pub fn group_key(product: &CatalogProduct, subcategories: &[Subcategory]) -> String {
    let category = product.category.as_ref();

    let from_subcategory = category
        .and_then(|c| c.id.as_ref())
        .and_then(|id| subcategories.iter().find(|s| &s.id == id));
    if let Some(sub) = from_subcategory {
        return normalize_group_name(&sub.name);
    }

    match category {
        Some(c) if !c.name.is_empty() => normalize_group_name(&c.name),
        _ => normalize_group_name(FALLBACK_GROUP_NAME),
    }
}

/// Title shown above a group. Most keys are shown as-is, hyphens included.
pub fn display_title(key: &str) -> String {
    if key == SECURITY_HUB || key == "Security-Hub" {
        return SECURITY_HUB.to_string();
    }
    if key.contains(PKP_ADDONS_KEY) || key.contains(PKP_ADDONS_KEY_LOWER) {
        return replace_ignore_case(key, PKP_ADDONS_KEY, PKP_ADDONS_TITLE);
    }
    key.to_string()
}

fn replace_ignore_case(haystack: &str, needle: &str, replacement: &str) -> String {
    let needle: Vec<char> = needle.chars().collect();
    let chars: Vec<(usize, char)> = haystack.char_indices().collect();

    let mut out = String::with_capacity(haystack.len());
    let mut i = 0;
    while i < chars.len() {
        let window = chars.get(i..i + needle.len());
        let hit = window.is_some_and(|w| {
            w.iter()
                .zip(&needle)
                .all(|((_, a), b)| a.to_lowercase().eq(b.to_lowercase()))
        });
        if hit {
            out.push_str(replacement);
            i += needle.len();
        } else {
            out.push(chars[i].1);
            i += 1;
        }
    }
    out
}
