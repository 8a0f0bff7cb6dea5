//! Field-level validation helpers shared by the services.

use std::collections::BTreeMap;

use jobboard_core::error::AppError;
use jobboard_core::result::AppResult;

/// Message reported for a required field missing from a full write.
pub const REQUIRED: &str = "This field is required.";

/// Message reported for a row that is absent or owned by someone else.
pub const NOT_FOUND: &str = "Not found.";

/// Message reported for a reference to a missing row.
pub fn invalid_pk(id: i64) -> String {
    format!("Invalid pk \"{id}\" - object does not exist.")
}

/// Whether a write must supply every writable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Create or PUT: every required field must be present.
    Full,
    /// PATCH: any subset of fields.
    Partial,
}

/// Collects per-field messages and converts them into one validation error.
#[derive(Debug, Default)]
pub struct FieldErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message against `field`.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Records a missing-field message when a full write lacks `value`.
    pub fn require<T>(&mut self, field: &str, value: &Option<T>, mode: WriteMode) {
        if mode == WriteMode::Full && value.is_none() {
            self.add(field, REQUIRED);
        }
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// `Ok(())` if empty, otherwise a validation error carrying every message.
    pub fn into_result(self) -> AppResult<()> {
        if self.is_empty() {
            return Ok(());
        }
        let summary = self
            .fields
            .iter()
            .map(|(field, messages)| format!("{field}: {}", messages.join(" ")))
            .collect::<Vec<_>>()
            .join("; ");
        let details = serde_json::to_value(&self.fields).unwrap_or_default();
        Err(AppError::validation(summary).with_details(details))
    }
}

/// Require a field that the caller has already checked with [`FieldErrors::require`].
pub(crate) fn present<T>(field: &str, value: Option<T>) -> AppResult<T> {
    value.ok_or_else(|| AppError::field(field, REQUIRED))
}
