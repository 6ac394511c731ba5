use chrono::{DateTime, NaiveDate};
use serde::{de::IgnoredAny, Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::fmt::Display;

use crate::error::ApiError;

/// Accumulates mandatory-field checks for one request payload
#[derive(Debug, Default)]
pub struct RequiredFields {
    missing: Vec<&'static str>,
}

impl RequiredFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a non-blank string
    pub fn text(self, name: &'static str, value: &Option<String>) -> Self {
        self.check(name, is_present(value))
    }

    /// Require an arbitrary condition, recording `name` when it fails
    pub fn check(mut self, name: &'static str, present: bool) -> Self {
        if !present {
            self.missing.push(name);
        }
        self
    }

    pub fn missing(&self) -> &[&'static str] {
        &self.missing
    }

    /// Fail with a validation error listing every missing field
    pub fn finish(self, message: &str) -> Result<(), ApiError> {
        if self.missing.is_empty() {
            return Ok(());
        }

        let field_errors: BTreeMap<String, String> = self
            .missing
            .into_iter()
            .map(|field| (field.to_string(), "This field is required".to_string()))
            .collect();

        Err(ApiError::validation_error(message, Some(field_errors)))
    }
}

pub fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.trim().is_empty())
}

/// Drop blank optional strings so they persist as NULL
pub fn non_blank(value: &Option<String>) -> Option<String> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}

/// Read an integer sent either as a JSON number or as a numeric string.
///
/// Any other value (including `null` and out-of-range numbers) becomes `None`
/// and is reported as a missing field instead of failing the whole body.
pub fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Number(i64),
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match Loose::deserialize(deserializer)? {
        Loose::Number(n) => i32::try_from(n).ok(),
        Loose::Text(s) => s.trim().parse().ok(),
        Loose::Other(_) => None,
    })
}

/// Parse a calendar date given as `YYYY-MM-DD` or a full RFC 3339 timestamp
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ApiError> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.date_naive()))
        .map_err(|_| {
            let mut field_errors = BTreeMap::new();
            field_errors.insert(field.to_string(), format!("Invalid date: {}", value));
            ApiError::validation_error("Invalid date format", Some(field_errors))
        })
}

/// Log an unexpected failure with its endpoint and hide it behind a generic 500
pub fn internal_error<E: Display>(endpoint: &'static str, message: &'static str) -> impl FnOnce(E) -> ApiError {
    move |err| {
        tracing::error!("{} error: {}", endpoint, err);
        ApiError::internal_server_error(message)
    }
}
