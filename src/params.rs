//! Query parameter parsing shared by all endpoints.
//!
//! Parameters arrive as raw string pairs so that validation messages stay
//! under our control. A repeated parameter uses its first value, and an
//! absent or empty parameter always means "use the default".

use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use std::ops::RangeInclusive;

use crate::error::ApiError;

/// Raw query extraction as handlers receive it.
pub type RawQuery = Result<Query<Vec<(String, String)>>, QueryRejection>;

/// Decoded query string pairs in request order.
#[derive(Debug, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// Turn the extractor result into params; a rejection becomes a JSON 400.
    pub fn from_query(query: RawQuery) -> Result<Self, ApiError> {
        match query {
            Ok(Query(pairs)) => Ok(Self::new(pairs)),
            Err(rejection) => Err(ApiError::Validation(rejection.body_text())),
        }
    }

    /// First value of a parameter.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Parse an integer parameter constrained to an inclusive range.
///
/// Reads the leading integer of the value (`"12abc"` is 12, `"5.5"` is 5);
/// a value without leading digits is rejected.
pub fn bounded_count(
    raw: Option<&str>,
    name: &str,
    default: usize,
    range: RangeInclusive<usize>,
) -> Result<usize, ApiError> {
    let value = match non_empty(raw) {
        Some(value) => value,
        None => return Ok(default),
    };

    leading_integer(value)
        .and_then(|n| usize::try_from(n).ok())
        .filter(|n| range.contains(n))
        .ok_or_else(|| {
            ApiError::Validation(format!(
                "Invalid {} parameter. Must be between {} and {}.",
                name,
                range.start(),
                range.end()
            ))
        })
}

/// Parse a parameter that must be exactly one of a fixed set of values.
pub fn one_of<'a>(
    raw: Option<&'a str>,
    default: &'a str,
    allowed: &[&str],
    message: impl FnOnce() -> String,
) -> Result<&'a str, ApiError> {
    match non_empty(raw) {
        None => Ok(default),
        Some(value) if allowed.contains(&value) => Ok(value),
        Some(_) => Err(ApiError::Validation(message())),
    }
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.filter(|value| !value.is_empty())
}

/// Optional sign plus leading decimal digits, after leading whitespace.
/// Digit runs too long for `i64` saturate.
fn leading_integer(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let (negative, rest) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
