//! Dominican phone number formatting helpers.
//!
//! Numbers are stored as bare digits and rendered as `809-456-8855`.

/// Formats a 10-digit phone number as `809-456-8855`.
///
/// Input that does not contain exactly 10 digits is returned unchanged,
/// so already-formatted or foreign values pass through untouched.
pub fn format_phone(phone: &str) -> String {
    let cleaned = unmask_phone(phone);

    if cleaned.len() != 10 {
        return phone.to_string();
    }

    format!(
        "{}-{}-{}",
        &cleaned[0..3],
        &cleaned[3..6],
        &cleaned[6..10]
    )
}

/// Applies the progressive input mask used while the user types.
///
/// Non-digits are stripped, input is capped at 10 digits, and dashes are
/// inserted as each group completes.
pub fn mask_phone(value: &str) -> String {
    let cleaned = unmask_phone(value);
    let limited = &cleaned[..cleaned.len().min(10)];

    match limited.len() {
        0..=3 => limited.to_string(),
        4..=6 => format!("{}-{}", &limited[0..3], &limited[3..]),
        _ => format!("{}-{}-{}", &limited[0..3], &limited[3..6], &limited[6..]),
    }
}

/// Strips everything except digits, the storage form of a phone number.
pub fn unmask_phone(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}
