// Validation utilities
// Author: Gabriel Demetrios Lafis

/// Match free-text input against a list of accepted lower-case entries.
///
/// Input is trimmed, lower-cased and has inner whitespace collapsed, so
/// `"  New   York City "` matches `"new york city"`.
pub fn normalize_choice(input: &str, valid: &[&str]) -> Option<String> {
    let normalized = input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    valid
        .iter()
        .any(|entry| *entry == normalized)
        .then(|| normalized)
}

/// Validate that a yes/no answer was given. Only the full words count.
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "yes" => Some(true),
        "no" => Some(false),
        _ => None,
    }
}

/// Validate that a numeric value is in range
pub fn validate_range<T: PartialOrd + std::fmt::Display>(
    value: T,
    min: T,
    max: T,
    name: &str,
) -> Result<(), String> {
    if value < min || value > max {
        Err(format!(
            "'{}' must be between {} and {}, got {}",
            name, min, max, value
        ))
    } else {
        Ok(())
    }
}
