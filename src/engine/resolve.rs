//! Expression resolution.
//!
//! Evaluates a dotted path such as `Address.City` against a [`Graph`]:
//!
//! ```text
//! root ── member("Address") ──▶ current ── member("City") ──▶ current ──▶ Some(value)
//!            │                     │
//!            └─ missing ─▶ None    └─ null ─▶ None (later segments never read)
//! ```
//!
//! The result keeps "not found" (`None`) apart from "found but null"
//! (`Some(Value::Null)`); the formatter collapses the two, but tests and
//! `format_verbose_with` can tell them apart.
//!
//! Only structural problems with the expression itself are errors. A member
//! that fails to read ([`AccessError`](crate::AccessError)) is logged and
//! treated as missing so one stale path cannot abort a whole template.

use crate::{Error, Graph, Value};

pub(crate) fn resolve<'g>(root: &'g dyn Graph, expression: &str) -> Result<Option<Value<'g>>, Error> {
    if expression.is_empty() {
        return Err(Error::invalid_expression(expression, "expression is empty"));
    }
    if expression.split('.').any(str::is_empty) {
        return Err(Error::invalid_expression(expression, "expression contains an empty segment"));
    }

    let mut current = Value::Object(root);
    for segment in expression.split('.') {
        let graph = match current {
            Value::Object(graph) if !graph.is_null() => graph,
            Value::Null | Value::Object(_) => {
                log::trace!(target: "graphfmt", "[resolve] `{expression}`: null before `{segment}`");
                return Ok(None);
            }
            scalar => {
                log::trace!(
                    target: "graphfmt",
                    "[resolve] `{expression}`: {} value has no member `{segment}`",
                    scalar.kind()
                );
                return Ok(None);
            }
        };

        current = match graph.member(segment) {
            Ok(Some(value)) => value,
            Ok(None) => {
                log::debug!(target: "graphfmt", "[resolve] `{expression}`: no member `{segment}` on {}", graph.render());
                return Ok(None);
            }
            Err(err) => {
                log::debug!(target: "graphfmt", "[resolve] `{expression}`: {err}");
                return Ok(None);
            }
        };
    }

    if current.is_null() {
        return Ok(Some(Value::Null));
    }
    Ok(Some(current))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AccessError;
    use serde_json::json;
    use std::cell::Cell;

    /// Counts member reads; `Broken` always fails to read.
    struct Counter {
        reads: Cell<usize>,
    }

    impl Graph for Counter {
        fn member(&self, name: &str) -> Result<Option<Value<'_>>, AccessError> {
            self.reads.set(self.reads.get() + 1);
            match name {
                "Null" => Ok(Some(Value::Null)),
                "Self" => Ok(Some(Value::Object(self))),
                "Broken" => Err(AccessError::new(name, "accessor failed")),
                _ => Ok(None),
            }
        }
    }

    fn counter() -> Counter {
        Counter { reads: Cell::new(0) }
    }

    #[test]
    fn walks_nested_members() {
        let doc = json!({ "Address": { "City": "Berlin", "Zip": 10115 } });

        let city = resolve(&doc, "Address.City").unwrap().unwrap();
        assert_eq!(city.to_string(), "Berlin");
        let zip = resolve(&doc, "Address.Zip").unwrap().unwrap();
        assert_eq!(zip.to_string(), "10115");
    }

    #[test]
    fn missing_member_is_not_found() {
        let doc = json!({ "Address": { "City": "Berlin" } });

        assert!(resolve(&doc, "Street").unwrap().is_none());
        assert!(resolve(&doc, "Address.Street").unwrap().is_none());
    }

    #[test]
    fn member_names_are_case_sensitive() {
        let doc = json!({ "Name": "Engine1" });
        assert!(resolve(&doc, "name").unwrap().is_none());
    }

    #[test]
    fn null_leaf_is_found_but_null() {
        let doc = json!({ "Location": null });

        let value = resolve(&doc, "Location").unwrap();
        assert!(matches!(value, Some(Value::Null)));
    }

    #[test]
    fn null_intermediate_short_circuits() {
        let root = counter();

        assert!(resolve(&root, "Null.B.C").unwrap().is_none());
        assert_eq!(root.reads.get(), 1);
    }

    #[test]
    fn object_members_navigate_repeatedly() {
        let root = counter();

        assert!(matches!(resolve(&root, "Self.Self.Null").unwrap(), Some(Value::Null)));
        assert_eq!(root.reads.get(), 3);
    }

    #[test]
    fn access_errors_are_absorbed_as_not_found() {
        let root = counter();

        assert!(resolve(&root, "Broken").unwrap().is_none());
        assert!(resolve(&root, "Self.Broken.Deeper").unwrap().is_none());
    }

    #[test]
    fn scalars_have_no_members() {
        let doc = json!({ "Name": "Engine1" });
        assert!(resolve(&doc, "Name.Length").unwrap().is_none());
    }

    #[test]
    fn null_root_is_not_found() {
        let missing: Option<Counter> = None;
        assert!(resolve(&missing, "Anything").unwrap().is_none());
    }

    #[test]
    fn empty_expressions_are_rejected() {
        let doc = json!({});

        for expression in ["", ".", "A.", ".A", "A..B"] {
            let err = resolve(&doc, expression).unwrap_err();
            assert!(matches!(err, Error::InvalidExpression { .. }), "expected InvalidExpression for {expression:?}");
        }
    }

    #[test]
    fn resolving_is_repeatable() {
        let doc = json!({ "Unit": { "Name": "Engine1" } });

        let first = resolve(&doc, "Unit.Name").unwrap().map(|v| v.to_string());
        let second = resolve(&doc, "Unit.Name").unwrap().map(|v| v.to_string());
        assert_eq!(first, second);
    }
}
