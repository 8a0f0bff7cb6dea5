//! `Authorization: Token <key>` header parsing.

use jobboard_core::error::AppError;

/// Scheme keyword expected in the `Authorization` header.
pub const KEYWORD: &str = "Token";

/// Extract the key from an `Authorization` header value.
///
/// Returns `Ok(None)` when the header is absent or uses another scheme, so
/// the caller can report missing credentials. A `Token` header with no key
/// or with extra parts is an authentication error.
pub fn parse_authorization(header: Option<&str>) -> Result<Option<&str>, AppError> {
    let Some(header) = header else {
        return Ok(None);
    };

    let parts: Vec<&str> = header.split_whitespace().collect();
    match parts.as_slice() {
        [] => Ok(None),
        [scheme, ..] if !scheme.eq_ignore_ascii_case(KEYWORD) => Ok(None),
        [_] => Err(AppError::authentication(
            "Invalid token header. No credentials provided.",
        )),
        [_, key] => Ok(Some(*key)),
        _ => Err(AppError::authentication(
            "Invalid token header. Token string should not contain spaces.",
        )),
    }
}
