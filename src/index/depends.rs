//! `Depends` field extraction
//!
//! Only the package names are kept: the first alternative of every
//! `|`-separated group wins, and version constraints such as `(>= 1.0)` or
//! architecture qualifiers such as `:any` are dropped.

use std::sync::LazyLock;

use regex::Regex;

static PACKAGE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9+\-.]*").expect("package token pattern is valid")
});

/// Extract the ordered list of dependency names from a `Depends` value.
///
/// Groups without a usable name (including `${misc:Depends}` style
/// substitution variables) are skipped. Duplicates across groups are kept.
pub fn extract_dependency_names(value: &str) -> Vec<String> {
    value
        .split(',')
        .filter_map(|group| {
            let first_alternative = group.trim().split('|').next()?.trim();
            let name = PACKAGE_TOKEN.find(first_alternative)?.as_str();

            if name.is_empty() || name.contains('$') {
                None
            } else {
                Some(name.to_string())
            }
        })
        .collect()
}
