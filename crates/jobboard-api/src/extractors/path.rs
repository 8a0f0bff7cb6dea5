//! Typed path parameter helpers.

use jobboard_core::error::AppError;
use jobboard_service::validation::NOT_FOUND;

/// Parses a numeric row id from a path segment. Anything else matches no row.
pub fn parse_id(s: &str) -> Result<i64, AppError> {
    s.parse::<i64>()
        .map_err(|_| AppError::not_found(NOT_FOUND))
}
