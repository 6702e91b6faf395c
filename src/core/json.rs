//! The sequence helpers over dynamically typed JSON arrays.
//!
//! Arguments are `serde_json::Value`s that must hold arrays; anything else is
//! rejected with [`ArrayError::NotAnArray`]. Keys are selected with RFC 6901
//! JSON pointers (`/job`, `/address/city`), the empty pointer meaning the
//! whole element.

use super::{group, range, uniq};
use crate::domain::model::Groups;
use crate::utils::error::{ArrayError, Result};
use crate::utils::validation::is_json_pointer;
use serde_json::{Number, Value};

/// Group key used when the pointer selects nothing.
pub const MISSING_KEY: &str = "undefined";

/// Largest integer an f64 holds exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Rewrites integral floats as integers, at any depth, so `1.0` equals `1`.
pub fn canonical(value: &Value) -> Value {
    match value {
        Value::Number(n) if n.is_f64() => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER => {
                Value::Number(Number::from(f as i64))
            }
            _ => value.clone(),
        },
        Value::Array(items) => Value::Array(items.iter().map(canonical).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, item)| (key.clone(), canonical(item)))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Renders a JSON value as a group key.
///
/// Strings are used verbatim, every other value as the compact JSON text of
/// its [`canonical`] form, so `"1"`, `1` and `1.0` share the key `1`.
pub fn key_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => canonical(other).to_string(),
    }
}

fn as_array(value: &Value) -> Result<&[Value]> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| ArrayError::not_an_array(value))
}

fn check_pointer(pointer: &str) -> Result<()> {
    if is_json_pointer(pointer) {
        Ok(())
    } else {
        Err(ArrayError::InvalidPointer {
            pointer: pointer.to_string(),
        })
    }
}

fn select<'a>(element: &'a Value, pointer: Option<&str>) -> Option<&'a Value> {
    match pointer {
        Some(pointer) => element.pointer(pointer),
        None => Some(element),
    }
}

pub fn flatten_value(value: &Value) -> Result<Vec<Value>> {
    let sequence = as_array(value)?;
    let mut flat = Vec::with_capacity(sequence.len());
    let mut stack = vec![sequence.iter()];

    while let Some(level) = stack.last_mut() {
        match level.next() {
            Some(Value::Array(list)) => stack.push(list.iter()),
            Some(other) => flat.push(other.clone()),
            None => {
                stack.pop();
            }
        }
    }

    tracing::debug!("Flattened {} top-level elements into {}", sequence.len(), flat.len());
    Ok(flat)
}

pub fn group_values_by(value: &Value, pointer: Option<&str>) -> Result<Groups<String, Value>> {
    let sequence = as_array(value)?;
    if let Some(pointer) = pointer {
        check_pointer(pointer)?;
    }

    let groups = group::group_by_key(sequence, |element| {
        select(element, pointer)
            .map(key_string)
            .unwrap_or_else(|| MISSING_KEY.to_string())
    });

    tracing::debug!("Grouped {} elements into {} groups", sequence.len(), groups.len());
    Ok(groups)
}

/// Structural equality on the [`canonical`] element, or on the pointed-to
/// field when a pointer is given. Elements lacking the field all compare equal.
pub fn uniq_values(value: &Value, pointer: Option<&str>) -> Result<Vec<Value>> {
    let sequence = as_array(value)?;
    if let Some(pointer) = pointer {
        check_pointer(pointer)?;
    }

    // serde_json::Map is ordered by key, so the compact text is canonical.
    let unique = uniq::uniq_by(sequence, |element| {
        select(element, pointer).map(|selected| canonical(selected).to_string())
    });

    tracing::debug!("Kept {} of {} elements", unique.len(), sequence.len());
    Ok(unique)
}

/// Compares [`canonical`] forms, so excluding `1` also drops `1.0`.
pub fn without_values(value: &Value, excluded: &[Value]) -> Result<Vec<Value>> {
    let sequence = as_array(value)?;
    let excluded_forms: Vec<Value> = excluded.iter().map(canonical).collect();
    let kept: Vec<Value> = sequence
        .iter()
        .filter(|element| !excluded_forms.contains(&canonical(element)))
        .cloned()
        .collect();

    tracing::debug!(
        "Removed {} elements matching {} excluded values",
        sequence.len() - kept.len(),
        excluded.len()
    );
    Ok(kept)
}

/// `range_values(None, end)` counts from zero, like [`range::range`].
pub fn range_values(start: Option<i64>, end: i64) -> Vec<Value> {
    let sequence = match start {
        Some(start) => range::range_between(start, end),
        None => range::range(end),
    };
    sequence.into_iter().map(Value::from).collect()
}
