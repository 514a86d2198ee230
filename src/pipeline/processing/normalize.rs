//! Text normalization shared by the record builder.
//!
//! Everything here is total: absent or empty input produces an empty result,
//! never an error.

use unicode_general_category::{get_general_category, GeneralCategory};

use crate::constants::COMMA_SEPARATOR;

/// Letters and numbers by general category (L* and N*).
///
/// Combining marks such as Devanagari vowel signs are not kept, even though
/// they carry the Alphabetic property.
fn is_slug_char(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
            | GeneralCategory::LetterNumber
            | GeneralCategory::OtherNumber
    )
}

/// Lowercase, hyphen-separated token built from the letter and number runs of `text`.
///
/// Spaces, hyphens and underscores become a single hyphen; every other
/// character is dropped. The result never starts or ends with a hyphen and
/// never contains two in a row.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for ch in text.trim().to_lowercase().chars() {
        if is_slug_char(ch) {
            slug.push(ch);
        } else if matches!(ch, ' ' | '-' | '_') && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_matches('-').to_string()
}

/// Split a multi-item cell on newlines first, then on `separator` within each line.
///
/// Authors may use either delimiter (or both) in one cell. Items are trimmed
/// and empty items are dropped.
pub fn split_list(value: Option<&str>, separator: char) -> Vec<String> {
    let Some(value) = value else {
        return Vec::new();
    };

    value
        .replace('\r', "\n")
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .flat_map(|line| {
            line.split(separator)
                .map(str::trim)
                .filter(|piece| !piece.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Comma-separated items, trimmed, empties dropped
pub fn split_commas(value: &str) -> Vec<String> {
    value
        .split(COMMA_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
