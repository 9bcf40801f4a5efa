// src/catalog/conformance.rs
//
// Conformance of a raw JSON payload against a typed shape. A payload that
// deserializes is re-serialized, and any input field missing from the
// re-serialized form is one the shape does not document.

use serde_json::Value;

/// How undocumented fields are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CheckPolicy {
    /// Report undocumented fields but accept the payload.
    #[default]
    Lenient,
    /// Reject payloads carrying undocumented fields.
    Strict,
}

impl CheckPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            CheckPolicy::Strict
        } else {
            CheckPolicy::Lenient
        }
    }
}

/// Outcome of a successful check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conformance {
    pub shape: String,
    /// Field paths such as `ShippingAddress.Line4` or `Items[1].Extra`.
    pub undocumented_fields: Vec<String>,
}

impl Conformance {
    /// True when every input field is documented by the shape.
    pub fn is_exact(&self) -> bool {
        self.undocumented_fields.is_empty()
    }
}

/// Lists every field path present in `input` but absent from `documented`.
///
/// Explicit nulls in the input count as absent, since optional fields read
/// from `null` are dropped on re-serialization.
pub fn undocumented_fields(input: &Value, documented: &Value) -> Vec<String> {
    let mut fields = Vec::new();
    collect("", input, documented, &mut fields);
    fields
}

fn collect(path: &str, input: &Value, documented: &Value, out: &mut Vec<String>) {
    match (input, documented) {
        (Value::Object(given), Value::Object(kept)) => {
            for (key, value) in given {
                if value.is_null() {
                    continue;
                }
                let child = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", path, key)
                };
                match kept.get(key) {
                    Some(kept_value) => collect(&child, value, kept_value, out),
                    None => out.push(child),
                }
            }
        }
        (Value::Array(given), Value::Array(kept)) => {
            for (i, (value, kept_value)) in given.iter().zip(kept).enumerate() {
                collect(&format!("{}[{}]", path, i), value, kept_value, out);
            }
        }
        // Scalars, or a value the shape normalized (e.g. "true" -> true).
        _ => {}
    }
}

/// Joins at most `max` field paths, noting how many were left out.
pub fn summarize_fields(fields: &[String], max: usize) -> String {
    let shown: Vec<&str> = fields.iter().take(max).map(String::as_str).collect();
    let mut summary = shown.join(", ");
    let more = fields.len() - shown.len();
    if more > 0 {
        if !summary.is_empty() {
            summary.push(' ');
        }
        summary.push_str(&format!("(+{} more)", more));
    }
    summary
}
