//! Phone number utilities

/// Remove every ASCII space from a phone number
///
/// Only the space character is removed; dashes, brackets and other
/// punctuation are left for the gateway to reject or accept.
pub fn strip_spaces(phone: &str) -> String {
    phone.chars().filter(|c| *c != ' ').collect()
}

/// Mask a phone number for logging
///
/// Shows only the last 4 characters.
///
/// # Example
///
/// ```
/// use wl_shared::phone::mask_phone_number;
/// assert_eq!(mask_phone_number("255712345678"), "********5678");
/// assert_eq!(mask_phone_number("+255712345678"), "+********5678");
/// ```
pub fn mask_phone_number(phone: &str) -> String {
    let chars: Vec<char> = phone.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }

    let visible: String = chars[chars.len() - 4..].iter().collect();
    let masked_count = chars.len() - 4;

    if chars[0] == '+' {
        format!("+{}{}", "*".repeat(masked_count - 1), visible)
    } else {
        format!("{}{}", "*".repeat(masked_count), visible)
    }
}
