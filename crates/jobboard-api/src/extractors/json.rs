//! `ValidatedJson` extractor: JSON body plus `validator` checks.
//!
//! The body is parsed to a `serde_json::Value` first so that a field with
//! the wrong type is reported against that field.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::{Validate, ValidationErrors};

use jobboard_core::error::AppError;
use jobboard_service::validation::FieldErrors;

use crate::error::ApiError;

/// A deserialized body that passed its `Validate` rules.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(raw) = Json::<Value>::from_request(req, state)
            .await
            .map_err(body_error)?;
        let value = deserialize_fields::<T>(raw)?;
        value.validate().map_err(field_errors)?;
        Ok(Self(value))
    }
}

fn body_error(rejection: JsonRejection) -> AppError {
    AppError::validation(rejection.body_text())
}

/// Deserializes a JSON object into `T`, naming the field that failed.
fn deserialize_fields<T: DeserializeOwned>(raw: Value) -> Result<T, AppError> {
    if !raw.is_object() {
        return Err(AppError::field(
            "non_field_errors",
            format!(
                "Invalid data. Expected a dictionary, but got {}.",
                json_type_name(&raw)
            ),
        ));
    }

    serde_path_to_error::deserialize(raw).map_err(|err| {
        let path = err.path().to_string();
        let field = if path == "." {
            "non_field_errors".to_string()
        } else {
            path
        };
        AppError::field(&field, type_message(&err.into_inner().to_string()))
    })
}

fn type_message(serde_message: &str) -> &'static str {
    if serde_message.contains("expected i64") || serde_message.contains("expected u64") {
        "A valid integer is required."
    } else if serde_message.contains("expected a boolean") {
        "Must be a valid boolean."
    } else if serde_message.contains("expected a string") {
        "Not a valid string."
    } else if serde_message.contains("date and time") || serde_message.contains("input") {
        "Datetime has wrong format. Use one of these formats instead: YYYY-MM-DDThh:mm[:ss[.uuuuuu]][+HH:MM|-HH:MM|Z]."
    } else {
        "Invalid value."
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "NoneType",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

/// Converts `validator` output into the `{"field": ["message"]}` shape.
pub fn field_errors(errors: ValidationErrors) -> AppError {
    let mut fields = FieldErrors::new();
    for (field, errs) in errors.field_errors() {
        for err in errs.iter() {
            let message = match &err.message {
                Some(message) => message.to_string(),
                None => err.code.to_string(),
            };
            fields.add(field.to_string(), message);
        }
    }
    match fields.into_result() {
        Err(e) => e,
        Ok(()) => AppError::validation("Invalid input"),
    }
}
