//! Shared plumbing for request-body validation.
//!
//! Bodies are parsed as untyped JSON first so that every problem can be reported at
//! once: type mismatches are collected while picking fields out of the object, then the
//! `validator` rules run over the typed request, and both are merged into one
//! [`FieldErrors`] value.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use validator::ValidationErrors;

/// Field-scoped validation failures, shaped as
/// `{ "formErrors": [...], "fieldErrors": { "<field>": [...] } }`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrors {
    /// Problems with the body as a whole.
    pub form_errors: Vec<String>,
    /// Problems keyed by the camelCase JSON field name.
    pub field_errors: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    /// An error set with a single body-level message.
    pub fn form(message: impl Into<String>) -> Self {
        Self {
            form_errors: vec![message.into()],
            field_errors: BTreeMap::new(),
        }
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.field_errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.form_errors.is_empty() && self.field_errors.is_empty()
    }

    /// Folds `validator` output in. Fields that already carry an error are skipped,
    /// so a type mismatch is not followed by a "Required" for the same field.
    pub fn absorb(&mut self, errors: &ValidationErrors) {
        for (field, errs) in errors.field_errors() {
            let key = json_key(&field);
            if self.field_errors.contains_key(&key) {
                continue;
            }
            for err in errs.iter() {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                self.add(key.clone(), message);
            }
        }
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Parses a raw request body as JSON. No `Content-Type` check is made.
pub fn parse_json_body(bytes: &[u8]) -> Result<Value, FieldErrors> {
    serde_json::from_slice(bytes).map_err(|_| FieldErrors::form("Malformed JSON body"))
}

/// Copies the string-valued entries named in `fields` out of a JSON object.
///
/// Entries that are present but not strings are left out and reported as
/// `Expected string, received <type>`. Keys not in `fields` are dropped.
/// A body that is not an object is rejected outright.
pub fn pick_string_fields(
    body: &Value,
    fields: &[&str],
) -> Result<(Map<String, Value>, FieldErrors), FieldErrors> {
    let Value::Object(object) = body else {
        return Err(FieldErrors::form(format!(
            "Expected object, received {}",
            json_type(body)
        )));
    };

    let mut picked = Map::new();
    let mut errors = FieldErrors::default();

    for &field in fields {
        match object.get(field) {
            None => {}
            Some(value @ Value::String(_)) => {
                picked.insert(field.to_owned(), value.clone());
            }
            Some(other) => {
                errors.add(field, format!("Expected string, received {}", json_type(other)));
            }
        }
    }

    Ok((picked, errors))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// `birth_date` -> `birthDate`. Already camelCase names pass through unchanged.
fn json_key(field: &str) -> String {
    let mut key = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            key.extend(c.to_uppercase());
            upper_next = false;
        } else {
            key.push(c);
        }
    }
    key
}
