//! Input validation for untrusted request payloads.
//!
//! Pure functions from payload to normalized value or violation list. Every
//! violated constraint is collected in one pass so the caller can report
//! them all in a single response instead of failing on the first.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::character::{CharacterGender, CharacterStatus, NewCharacter};
use crate::types::DbId;

/// A single field-level constraint violation.
///
/// `field` is the dotted path of the offending field (flat here, no nesting).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Canonical decimal identifiers only: leading zeros, whitespace, and signs
/// do not match.
static ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^(0|[1-9][0-9]*)$").expect("valid regex"));

/// Validate a character creation payload.
///
/// Returns the normalized record with all five fields present, or the full
/// list of violations. `type` is optional and defaults to the empty string;
/// the other four fields are required.
pub fn validate_create(payload: &Value) -> Result<NewCharacter, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    let name = require_string(payload, "name", "Name is required", &mut violations);
    let status = match payload
        .get("status")
        .and_then(Value::as_str)
        .and_then(CharacterStatus::parse)
    {
        Some(status) => Some(status),
        None => {
            violations.push(FieldViolation::new(
                "status",
                format!(
                    "Status must be one of: {}",
                    CharacterStatus::ALLOWED.join(", ")
                ),
            ));
            None
        }
    };
    let species = require_string(payload, "species", "Species is required", &mut violations);
    let gender = match payload
        .get("gender")
        .and_then(Value::as_str)
        .and_then(CharacterGender::parse)
    {
        Some(gender) => Some(gender),
        None => {
            violations.push(FieldViolation::new(
                "gender",
                format!(
                    "Gender must be one of: {}",
                    CharacterGender::ALLOWED.join(", ")
                ),
            ));
            None
        }
    };
    let kind = match payload.get("type") {
        None => Some(String::new()),
        Some(Value::String(kind)) => Some(kind.clone()),
        Some(_) => {
            violations.push(FieldViolation::new("type", "Type must be a string"));
            None
        }
    };

    match (name, status, species, gender, kind) {
        (Some(name), Some(status), Some(species), Some(gender), Some(kind))
            if violations.is_empty() =>
        {
            Ok(NewCharacter {
                name,
                status,
                species,
                gender,
                kind,
            })
        }
        _ => Err(violations),
    }
}

/// Validate a path identifier.
///
/// The raw path segment must be a canonical decimal number; anything else
/// (including values too large for the id type) is a violation on `id`.
pub fn validate_id(raw: &str) -> Result<DbId, Vec<FieldViolation>> {
    if !ID_PATTERN.is_match(raw) {
        return Err(vec![FieldViolation::new("id", "ID must be a number")]);
    }
    raw.parse::<DbId>()
        .map_err(|_| vec![FieldViolation::new("id", "ID must be a number")])
}

/// Required non-empty string field; missing, null, non-string, and empty
/// values all produce the same violation.
fn require_string(
    payload: &Value,
    field: &str,
    message: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    match payload.get(field) {
        Some(Value::String(value)) if !value.is_empty() => Some(value.clone()),
        _ => {
            violations.push(FieldViolation::new(field, message));
            None
        }
    }
}
