//! API handlers module

pub mod footnotes;
pub mod health;
pub mod index;
pub mod papers;

use publications_common::errors::{AppError, Result};

/// Parse a path id for the `integer` id columns
pub(crate) fn parse_id(raw: &str) -> Result<i32> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| AppError::invalid_integer(raw))
}
