//! Structural walks over query fields.
//!
//! Each walk returns `None` when nothing changed so that callers can keep
//! the original value instead of a copy.

use serde_json::{Map, Value};

use crate::variable_resolver::{Interpolator, VariableFormat};

/// Interpolates every string leaf of a JSON value with the `Scalar` format.
///
/// Numbers, booleans and nulls are left alone.
pub(crate) fn interpolate_value(interpolator: &Interpolator<'_>, value: &Value) -> Option<Value> {
    match value {
        Value::String(text) => {
            let resolved = interpolator.resolve(text, VariableFormat::Scalar);
            (resolved != *text).then_some(Value::String(resolved))
        }
        Value::Array(items) => {
            let changed: Vec<Option<Value>> = items
                .iter()
                .map(|item| interpolate_value(interpolator, item))
                .collect();
            if changed.iter().all(Option::is_none) {
                return None;
            }
            Some(Value::Array(
                items
                    .iter()
                    .zip(changed)
                    .map(|(original, new)| new.unwrap_or_else(|| original.clone()))
                    .collect(),
            ))
        }
        Value::Object(map) => {
            let changed: Vec<Option<Value>> = map
                .values()
                .map(|item| interpolate_value(interpolator, item))
                .collect();
            if changed.iter().all(Option::is_none) {
                return None;
            }
            let mut resolved = Map::with_capacity(map.len());
            for ((key, original), new) in map.iter().zip(changed) {
                resolved.insert(key.clone(), new.unwrap_or_else(|| original.clone()));
            }
            Some(Value::Object(resolved))
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => None,
    }
}

/// Expands subscription entries.
///
/// Each entry is interpolated with the `ListJoin` format and split on commas,
/// so one multi-valued variable fills as many slots as it has values. Source
/// order is preserved and segments are kept verbatim.
pub(crate) fn expand_subscriptions(
    interpolator: &Interpolator<'_>,
    subscriptions: &[String],
) -> Option<Vec<String>> {
    let mut changed = false;
    let mut expanded = Vec::with_capacity(subscriptions.len());

    for entry in subscriptions {
        let resolved = interpolator.resolve(entry, VariableFormat::ListJoin);
        if resolved.contains(',') {
            changed = true;
            expanded.extend(resolved.split(',').map(str::to_string));
        } else {
            changed |= resolved != *entry;
            expanded.push(resolved);
        }
    }

    changed.then_some(expanded)
}
