//! Email normalization rules.

/// Normalize an email address by lower-casing the domain part.
///
/// The local part is preserved as written. Only the final `@` separates
/// local part from domain; input without an `@` is returned unchanged.
pub fn normalize_email(email: &str) -> String {
    match email.trim().rsplit_once('@') {
        Some((local, domain)) => format!("{local}@{}", domain.to_lowercase()),
        None => email.to_string(),
    }
}

/// Returns `true` if the string has at least one cased character and
/// every cased character is uppercase.
pub fn is_upper(value: &str) -> bool {
    let mut cased = false;
    for c in value.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}
