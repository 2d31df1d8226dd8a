//! `Graph` over `serde_json` documents.
//!
//! - Object keys are members.
//! - Array elements are members named by their decimal index (`Units.0.Name`).
//! - `null` is an absent graph; scalars have no members.
//! - Objects and arrays render as compact JSON text.

use super::{Graph, IntoValue, Value};
use crate::AccessError;
use serde_json::{Map, Value as Json};
use std::borrow::Cow;

impl Graph for Json {
    fn member(&self, name: &str) -> Result<Option<Value<'_>>, AccessError> {
        match self {
            Json::Object(map) => map.member(name),
            Json::Array(items) => Ok(array_index(name).and_then(|idx| items.get(idx)).map(IntoValue::into_value)),
            _ => Ok(None),
        }
    }

    fn is_null(&self) -> bool {
        matches!(self, Json::Null)
    }

    fn render(&self) -> String {
        match self {
            Json::Null => String::new(),
            Json::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl Graph for Map<String, Json> {
    fn member(&self, name: &str) -> Result<Option<Value<'_>>, AccessError> {
        Ok(self.get(name).map(IntoValue::into_value))
    }

    fn render(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl<'a> IntoValue<'a> for &'a Json {
    fn into_value(self) -> Value<'a> {
        match self {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(*b),
            Json::Number(n) => {
                if let Some(v) = n.as_i64() {
                    Value::Int(v)
                } else if let Some(v) = n.as_u64() {
                    Value::UInt(v)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Json::String(s) => Value::Text(Cow::Borrowed(s.as_str())),
            Json::Array(_) | Json::Object(_) => Value::Object(self),
        }
    }
}

impl<'a> IntoValue<'a> for &'a Map<String, Json> {
    fn into_value(self) -> Value<'a> {
        Value::Object(self)
    }
}

/// Plain decimal digits only; `+1`, `-0` and empty names are not indexes.
fn array_index(name: &str) -> Option<usize> {
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    name.parse().ok()
}
