//! Nested-JSON flattening.
//!
//! Raw records are arbitrary JSON objects, sometimes with nested objects
//! inside (`{"meta": {"source": "..."}}`). Column discovery works on a flat
//! key space, so nested objects are flattened with dotted keys
//! (`meta.source`) before anything else looks at a record.
//!
//! # Examples
//!
//! ```
//! use newsline::ingestion::flatten::flatten_record;
//! use serde_json::json;
//!
//! let record = json!({"headline": "x", "meta": {"source": "wire"}});
//! let flat = flatten_record(&record);
//! assert_eq!(flat["headline"], "x");
//! assert_eq!(flat["meta.source"], "wire");
//! ```

use std::collections::BTreeMap;

use serde_json::Value;

/// Flatten a JSON record into dotted-key/value pairs.
///
/// Nested objects are recursed into; arrays and scalars are kept as leaf
/// values. Non-object input produces a single entry under an empty key and
/// is rejected later by column discovery.
pub fn flatten_record(record: &Value) -> BTreeMap<String, Value> {
    let mut flat = BTreeMap::new();
    flatten_into(record, String::new(), &mut flat);
    flat
}

fn flatten_into(value: &Value, prefix: String, out: &mut BTreeMap<String, Value>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let child_key = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_into(child, child_key, out);
            }
        }
        other => {
            out.insert(prefix, other.clone());
        }
    }
}

/// Render a leaf value as cell text.
///
/// `null` is treated as a missing value. Strings are taken as-is; numbers,
/// booleans, and arrays are rendered with their JSON representation, which
/// matches how a tabular load would coerce them to strings.
pub fn value_to_cell(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
