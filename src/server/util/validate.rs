//! Request field checks shared by controllers.
//!
//! Every check returns `AppError::BadRequest` naming the offending field, so a handler
//! can chain them with `?` before calling into a service.

use std::{fmt::Display, ops::RangeInclusive};

use regex::Regex;

use crate::server::error::AppError;

/// Requires the character count of `value` to lie within `len`.
pub fn check_len(field: &str, value: &str, len: RangeInclusive<usize>) -> Result<(), AppError> {
    let count = value.chars().count();
    if !len.contains(&count) {
        return Err(AppError::BadRequest(format!(
            "{} must be between {} and {} characters",
            field,
            len.start(),
            len.end()
        )));
    }
    Ok(())
}

/// Requires `value` to match `pattern`.
pub fn check_pattern(field: &str, value: &str, pattern: &Regex) -> Result<(), AppError> {
    if !pattern.is_match(value) {
        return Err(AppError::BadRequest(format!(
            "{} contains invalid characters",
            field
        )));
    }
    Ok(())
}

/// Requires `value` to lie within `range`.
pub fn check_range<T>(field: &str, value: T, range: RangeInclusive<T>) -> Result<(), AppError>
where
    T: PartialOrd + Display,
{
    if !range.contains(&value) {
        return Err(AppError::BadRequest(format!(
            "{} must be between {} and {}",
            field,
            range.start(),
            range.end()
        )));
    }
    Ok(())
}

/// Requires `value` to be strictly positive.
pub fn check_positive(field: &str, value: i64) -> Result<(), AppError> {
    if value <= 0 {
        return Err(AppError::BadRequest(format!(
            "{} must be greater than 0",
            field
        )));
    }
    Ok(())
}
