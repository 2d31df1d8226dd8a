//! Object graph access.
//!
//! The formatter never knows the concrete shape of the data it renders. It
//! only needs one capability: "read the member called `name` from this
//! object, or report that there is none". [`Graph`] is that capability.
//!
//! ```text
//! root: &dyn Graph ── member("Address") ──▶ Value::Object(&dyn Graph)
//!                                              └─ member("City") ──▶ Value::Text("Berlin")
//! ```
//!
//! Three answers are possible for a member read, and they stay distinct at
//! this layer:
//!
//! - `Ok(None)`: the object has no member with that name.
//! - `Ok(Some(Value::Null))`: the member exists but holds no value.
//! - `Err(AccessError)`: the member exists but could not be read.
//!
//! ## Implementations
//!
//! - Your own structs: use [`graph_object!`](crate::graph_object) to expose
//!   fields and zero-argument accessor methods under their member names, or
//!   implement [`Graph`] by hand.
//! - `serde_json::Value` / `serde_json::Map` (see `graph/json.rs`).
//! - `HashMap` / `BTreeMap` keyed by strings, `Option<T>`, and the usual
//!   smart pointers (see `graph/collections.rs`).
//!
//! Member values are produced through [`IntoValue`] (see `graph/convert.rs`).

#[path = "graph/collections.rs"]
mod collections;
#[path = "graph/convert.rs"]
mod convert;
#[path = "graph/json.rs"]
mod json;

pub use convert::IntoValue;

use crate::AccessError;
use std::borrow::Cow;
use std::fmt;

/// Read-only, by-name member access over an arbitrary object.
pub trait Graph {
    /// Read the member called `name` (case-sensitive).
    fn member(&self, name: &str) -> Result<Option<Value<'_>>, AccessError>;

    /// Whether this object is itself an absent value (`None`, JSON `null`).
    fn is_null(&self) -> bool {
        false
    }

    /// Natural string rendering used when a macro resolves to the object
    /// itself rather than to a scalar member.
    ///
    /// Defaults to the short type name.
    fn render(&self) -> String {
        short_type_name(std::any::type_name::<Self>()).to_string()
    }
}

/// A resolved member value.
#[derive(Clone)]
pub enum Value<'a> {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    Text(Cow<'a, str>),
    Object(&'a dyn Graph),
}

impl<'a> Value<'a> {
    /// `true` for [`Value::Null`] and for objects that report themselves null.
    pub fn is_null(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Object(graph) => graph.is_null(),
            _ => false,
        }
    }

    /// The object behind this value, if it has members to navigate.
    pub fn as_object(&self) -> Option<&'a dyn Graph> {
        match self {
            Value::Object(graph) => Some(*graph),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text.as_ref()),
            _ => None,
        }
    }

    /// Name of the variant, used in traces.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) | Value::UInt(_) => "integer",
            Value::Float(_) => "float",
            Value::Char(_) => "char",
            Value::Text(_) => "text",
            Value::Object(_) => "object",
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::UInt(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Char(c) => write!(f, "{c}"),
            Value::Text(text) => f.write_str(text),
            Value::Object(graph) => f.write_str(&graph.render()),
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Value::UInt(n) => f.debug_tuple("UInt").field(n).finish(),
            Value::Float(n) => f.debug_tuple("Float").field(n).finish(),
            Value::Char(c) => f.debug_tuple("Char").field(c).finish(),
            Value::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Value::Object(graph) => f.debug_tuple("Object").field(&graph.render()).finish(),
        }
    }
}

/// `a::b::Unit<c::D>` -> `Unit`
fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Opaque;

    impl Graph for Opaque {
        fn member(&self, _name: &str) -> Result<Option<Value<'_>>, AccessError> {
            Ok(None)
        }
    }

    #[test]
    fn default_render_is_short_type_name() {
        assert_eq!(Opaque.render(), "Opaque");
        assert_eq!(short_type_name("alloc::vec::Vec<core::option::Option<u8>>"), "Vec");
        assert_eq!(short_type_name("Plain"), "Plain");
    }

    #[test]
    fn display_uses_natural_rendering() {
        let opaque = Opaque;
        let cases: Vec<(Value<'_>, &str)> = vec![
            (Value::Null, ""),
            (Value::Bool(true), "true"),
            (Value::Int(-42), "-42"),
            (Value::UInt(7), "7"),
            (Value::Float(2.5), "2.5"),
            (Value::Float(3.0), "3"),
            (Value::Char('x'), "x"),
            (Value::Text(Cow::Borrowed("Engine1")), "Engine1"),
            (Value::Object(&opaque), "Opaque"),
        ];

        for (value, expected) in cases {
            assert_eq!(value.to_string(), expected, "rendering {value:?}");
        }
    }

    #[test]
    fn null_objects_count_as_null() {
        let missing: Option<Opaque> = None;
        assert!(Value::Null.is_null());
        assert!(Value::Object(&missing).is_null());
        assert!(!Value::Object(&Opaque).is_null());
        assert!(!Value::Text(Cow::Borrowed("")).is_null());
    }

    #[test]
    fn accessors_match_variants() {
        assert_eq!(Value::Text(Cow::Borrowed("a")).as_str(), Some("a"));
        assert!(Value::Int(1).as_str().is_none());
        assert!(Value::Object(&Opaque).as_object().is_some());
        assert_eq!(Value::UInt(1).kind(), "integer");
    }
}
