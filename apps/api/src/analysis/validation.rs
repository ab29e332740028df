//! Schema validation of raw model output.
//!
//! Rules run in a fixed order and stop at the first violation:
//! presence → types → numeric clamping → enum membership → non-empty text.
//! Clamping is the only rule that rewrites a value; everything else rejects.

use serde_json::Value;
use tracing::warn;

use crate::analysis::error::AnalysisError;
use crate::analysis::models::{AnalysisResult, ReachStatus};
use crate::analysis::schema::{FieldKind, FieldSpec, FIELDS, SCORE_MAX, SCORE_MIN};
use crate::llm_client::strip_json_fences;

/// Parses a textual model answer into structured data.
pub fn parse_text(text: &str) -> Result<Value, AnalysisError> {
    let body = strip_json_fences(text);
    if body.is_empty() {
        return Err(AnalysisError::MalformedResponse(
            "model returned no content".to_string(),
        ));
    }
    serde_json::from_str(body).map_err(|e| AnalysisError::MalformedResponse(e.to_string()))
}

/// Validates structured model output and converts it into an `AnalysisResult`.
pub fn validate(mut raw: Value) -> Result<AnalysisResult, AnalysisError> {
    if !raw.is_object() {
        return Err(AnalysisError::violation(
            "$",
            format!("expected an object, got {}", type_name(&raw)),
        ));
    }

    for spec in FIELDS {
        lookup(&raw, spec.path)?;
    }

    for spec in FIELDS {
        check_type(lookup(&raw, spec.path)?, spec)?;
    }

    for spec in FIELDS.iter().filter(|s| s.kind == FieldKind::Score) {
        clamp_score(lookup_mut(&mut raw, spec.path)?, spec.path);
    }

    for spec in FIELDS.iter().filter(|s| s.kind == FieldKind::Reach) {
        let status = lookup(&raw, spec.path)?.as_str().unwrap_or_default();
        if ReachStatus::parse(status).is_none() {
            return Err(AnalysisError::violation(
                spec.path,
                format!(
                    "expected one of {}, got {status:?}",
                    ReachStatus::ALL.join(", ")
                ),
            ));
        }
    }

    for spec in FIELDS {
        check_non_empty(lookup(&raw, spec.path)?, spec)?;
    }

    serde_json::from_value(raw).map_err(|e| AnalysisError::violation("$", e.to_string()))
}

fn lookup<'a>(root: &'a Value, path: &str) -> Result<&'a Value, AnalysisError> {
    let mut node = root;
    let mut walked = String::new();
    for segment in path.split('.') {
        let parent = walked.clone();
        push_segment(&mut walked, segment);
        let object = node.as_object().ok_or_else(|| not_an_object(&parent, node))?;
        node = match object.get(segment) {
            Some(Value::Null) | None => return Err(missing(&walked)),
            Some(value) => value,
        };
    }
    Ok(node)
}

fn lookup_mut<'a>(root: &'a mut Value, path: &str) -> Result<&'a mut Value, AnalysisError> {
    let mut node = root;
    let mut walked = String::new();
    for segment in path.split('.') {
        let parent = walked.clone();
        push_segment(&mut walked, segment);
        if !node.is_object() {
            return Err(not_an_object(&parent, node));
        }
        node = match node.get_mut(segment) {
            Some(Value::Null) | None => return Err(missing(&walked)),
            Some(value) => value,
        };
    }
    Ok(node)
}

fn push_segment(walked: &mut String, segment: &str) {
    if !walked.is_empty() {
        walked.push('.');
    }
    walked.push_str(segment);
}

fn missing(path: &str) -> AnalysisError {
    AnalysisError::violation(path, "required field is missing")
}

fn not_an_object(path: &str, value: &Value) -> AnalysisError {
    let path = if path.is_empty() { "$" } else { path };
    AnalysisError::violation(path, format!("expected an object, got {}", type_name(value)))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Integral JSON numbers, including float spellings such as `82.0`.
fn as_integer(value: &Value) -> Option<f64> {
    let number = value.as_f64()?;
    (number.is_finite() && number.fract() == 0.0).then_some(number)
}

fn check_type(value: &Value, spec: &FieldSpec) -> Result<(), AnalysisError> {
    let ok = match spec.kind {
        FieldKind::Score => as_integer(value).is_some(),
        FieldKind::Text | FieldKind::Reach => value.is_string(),
        FieldKind::TextList { .. } => {
            let items = value.as_array().ok_or_else(|| {
                AnalysisError::violation(
                    spec.path,
                    format!("expected an array, got {}", type_name(value)),
                )
            })?;
            if let Some((i, item)) = items.iter().enumerate().find(|(_, v)| !v.is_string()) {
                return Err(AnalysisError::violation(
                    format!("{}[{i}]", spec.path),
                    format!("expected a string, got {}", type_name(item)),
                ));
            }
            true
        }
    };

    if ok {
        return Ok(());
    }

    let expected = match spec.kind {
        FieldKind::Score => "an integer",
        _ => "a string",
    };
    Err(AnalysisError::violation(
        spec.path,
        format!("expected {expected}, got {}", type_name(value)),
    ))
}

/// Pulls a score into `SCORE_MIN..=SCORE_MAX` and rewrites it as a plain integer.
fn clamp_score(value: &mut Value, path: &str) {
    let Some(original) = as_integer(value) else {
        return;
    };
    let clamped = original.clamp(SCORE_MIN as f64, SCORE_MAX as f64) as i64;
    if clamped as f64 != original {
        warn!(field = path, original, clamped, "Clamped out-of-range score");
    }
    *value = Value::from(clamped);
}

fn check_non_empty(value: &Value, spec: &FieldSpec) -> Result<(), AnalysisError> {
    match spec.kind {
        FieldKind::Text => {
            if value.as_str().map_or(true, |s| s.trim().is_empty()) {
                return Err(AnalysisError::violation(spec.path, "text must not be empty"));
            }
        }
        FieldKind::TextList { min_items } if min_items > 0 => {
            let items = value.as_array().map(Vec::as_slice).unwrap_or_default();
            if items.len() < min_items {
                return Err(AnalysisError::violation(
                    spec.path,
                    format!("expected at least {min_items} item(s), got {}", items.len()),
                ));
            }
            if let Some(i) = items
                .iter()
                .position(|v| v.as_str().map_or(true, |s| s.trim().is_empty()))
            {
                return Err(AnalysisError::violation(
                    format!("{}[{i}]", spec.path),
                    "text must not be empty",
                ));
            }
        }
        _ => {}
    }
    Ok(())
}
