use serde_json::{Map, Value};

use crate::core::YfError;

/* ---------------- quoteSummary result → module nodes ---------------- */

/// Looks up a module object in a quoteSummary result.
///
/// `Ok(None)` means the module is absent (missing key or `null`).
pub(crate) fn module_node<'a>(
    result: &'a Value,
    module: &str,
) -> Result<Option<&'a Map<String, Value>>, YfError> {
    let root = result
        .as_object()
        .ok_or_else(|| YfError::Data("quoteSummary result is not an object".into()))?;

    match root.get(module) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(node)) => Ok(Some(node)),
        Some(_) => Err(YfError::Data(format!("module {module} is not an object"))),
    }
}

/// Unwraps Yahoo's `{"raw": .., "fmt": ..}` number wrapper.
///
/// Plain values pass through. `null`, `{}` and wrappers without `raw` are absent.
pub(crate) fn raw_value(v: &Value) -> Option<Value> {
    match v {
        Value::Null => None,
        Value::Object(obj) => match obj.get("raw") {
            None | Some(Value::Null) => None,
            Some(raw) => Some(raw.clone()),
        },
        other => Some(other.clone()),
    }
}

/// Reads `field` from an optional module node, unwrapping raw numbers.
pub(crate) fn field_value(node: Option<&Map<String, Value>>, field: &str) -> Option<Value> {
    node.and_then(|n| n.get(field)).and_then(raw_value)
}
