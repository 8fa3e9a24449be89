//! String-case collaborator: the pure name transformations used by derivation.
//!
//! Kebab and word splitting are delegated to `heck`; the two forms `heck`
//! has no notion of (first-letter-only capitalization and the drop-last
//! singular trick) are implemented here.

use heck::{ToKebabCase, ToTitleCase};

/// Upper-case only the first character, leaving the rest untouched.
/// "mediaCollections" -> "MediaCollections"
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// camelCase -> kebab-case. "mediaCollections" -> "media-collections"
pub fn kebab_case(s: &str) -> String {
    s.to_kebab_case()
}

/// Kebab-case form minus its final character.
/// "mediaCollections" -> "media-collection"
///
/// The last character is dropped blindly; callers gate on the plural check
/// before treating the result as a singular form.
pub fn kebab_case_drop_last(s: &str) -> String {
    let mut kebab = kebab_case(s);
    kebab.pop();
    kebab
}

/// camelCase -> space-separated lower-case words.
/// "mediaCollections" -> "media collections"
pub fn human_words(s: &str) -> String {
    s.to_title_case().to_lowercase()
}
