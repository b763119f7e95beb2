//! Required-field validation for create requests
//!
//! A field is missing when it is absent, null, false, zero, or an empty
//! string. Only the first missing field in declaration order is reported.

use publications_common::errors::{AppError, Result};
use serde_json::{Map, Value};

/// Ordered required fields plus the human-readable shape they form
#[derive(Debug, Clone, Copy)]
pub struct RequiredFields {
    pub fields: &'static [&'static str],
    pub expected: &'static str,
}

/// Body contract for `POST /api/v1/papers`
pub const PAPER_FIELDS: RequiredFields = RequiredFields {
    fields: &["title", "author"],
    expected: "{ title: <String>, author: <String> }",
};

/// Body contract for `POST /api/v1/papers/footnotes`
pub const FOOTNOTE_FIELDS: RequiredFields = RequiredFields {
    fields: &["note", "paper_id"],
    expected: "{ note: <String>, paper_id: <Integer> }",
};

fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

impl RequiredFields {
    /// Fail on the first required field that is missing
    pub fn check(&self, body: &Map<String, Value>) -> Result<()> {
        match self.fields.iter().find(|field| !is_present(body.get(**field))) {
            Some(field) => Err(AppError::MissingField {
                field: field.to_string(),
                expected: self.expected.to_string(),
            }),
            None => Ok(()),
        }
    }

    fn invalid(&self, field: &str) -> AppError {
        AppError::InvalidFormat {
            field: field.to_string(),
            expected: self.expected.to_string(),
        }
    }

    /// Read a text field; numbers and booleans are stored as their text
    pub fn string(&self, body: &Map<String, Value>, field: &str) -> Result<String> {
        match body.get(field) {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(Value::Number(n)) => Ok(n.to_string()),
            Some(Value::Bool(b)) => Ok(b.to_string()),
            _ => Err(self.invalid(field)),
        }
    }

    /// Read an integer field; numeric strings are accepted for form bodies
    pub fn integer(&self, body: &Map<String, Value>, field: &str) -> Result<i32> {
        let parsed = match body.get(field) {
            Some(Value::Number(n)) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
            Some(Value::String(s)) => s.trim().parse::<i32>().ok(),
            _ => None,
        };

        parsed.ok_or_else(|| self.invalid(field))
    }
}
