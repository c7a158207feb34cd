//! String transformation utilities for identifiers
//!
//! These utilities belong in the generation domain as they are used
//! for deriving accessor names and casing identifiers.

use crate::generation::TargetLanguage;

/// Converts a string to snake_case.
///
/// Handles camelCase, PascalCase, kebab-case, and space-separated input.
///
/// # Examples
/// ```
/// use housestyle::generation::utils::to_snake_case;
///
/// assert_eq!(to_snake_case("currentPage"), "current_page");
/// assert_eq!(to_snake_case("page-size"), "page_size");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    let mut prev_is_lowercase = false;

    for ch in s.chars() {
        if ch.is_uppercase() {
            if prev_is_lowercase {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
            prev_is_lowercase = false;
        } else if ch.is_alphanumeric() {
            result.push(ch);
            prev_is_lowercase = ch.is_lowercase() || ch.is_ascii_digit();
        } else if (ch == '-' || ch == '_' || ch == ' ') && !result.is_empty() && !result.ends_with('_')
        {
            result.push('_');
            prev_is_lowercase = false;
        }
    }

    result.trim_matches('_').to_string()
}

/// Converts a string to PascalCase.
///
/// # Examples
/// ```
/// use housestyle::generation::utils::to_proper_case;
///
/// assert_eq!(to_proper_case("video_id"), "VideoId");
/// assert_eq!(to_proper_case("videoId"), "VideoId");
/// ```
pub fn to_proper_case(s: &str) -> String {
    to_snake_case(s)
        .split('_')
        .filter(|word| !word.is_empty())
        .map(titlecase_first)
        .collect()
}

/// Upper-cases the first character and leaves the rest untouched
pub fn titlecase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Lower-cases the first character and leaves the rest untouched
pub fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
    }
}

/// Accessor name reading a field back from a generated response type
pub fn to_getter(name: &str, target: TargetLanguage) -> String {
    match target {
        TargetLanguage::CSharp => to_proper_case(name),
        TargetLanguage::Java => format!("get{}", to_proper_case(name)),
    }
}
