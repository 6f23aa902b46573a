//! Section label derivation from fixture keys.

/// Human-readable label for a snake_case fixture key: split on `_`,
/// capitalize each word's first letter, join with spaces.
#[must_use]
pub fn humanize_key(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
