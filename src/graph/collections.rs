//! `Graph` for standard containers and pointers.

use super::{Graph, IntoValue, Value};
use crate::AccessError;
use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};
use std::rc::Rc;
use std::sync::Arc;

impl<K, V, S> Graph for HashMap<K, V, S>
where
    K: Borrow<str> + Eq + Hash,
    S: BuildHasher,
    for<'v> &'v V: IntoValue<'v>,
{
    fn member(&self, name: &str) -> Result<Option<Value<'_>>, AccessError> {
        Ok(self.get(name).map(IntoValue::into_value))
    }

    fn render(&self) -> String {
        format!("map({})", self.len())
    }
}

impl<K, V> Graph for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    for<'v> &'v V: IntoValue<'v>,
{
    fn member(&self, name: &str) -> Result<Option<Value<'_>>, AccessError> {
        Ok(self.get(name).map(IntoValue::into_value))
    }

    fn render(&self) -> String {
        format!("map({})", self.len())
    }
}

impl<T: Graph> Graph for Option<T> {
    fn member(&self, name: &str) -> Result<Option<Value<'_>>, AccessError> {
        match self {
            Some(inner) => inner.member(name),
            None => Ok(None),
        }
    }

    fn is_null(&self) -> bool {
        self.as_ref().is_none_or(Graph::is_null)
    }

    fn render(&self) -> String {
        self.as_ref().map(Graph::render).unwrap_or_default()
    }
}

macro_rules! forward_graph {
    ($($ptr:ty),+) => {
        $(
            impl<T: Graph + ?Sized> Graph for $ptr {
                fn member(&self, name: &str) -> Result<Option<Value<'_>>, AccessError> {
                    (**self).member(name)
                }

                fn is_null(&self) -> bool {
                    (**self).is_null()
                }

                fn render(&self) -> String {
                    (**self).render()
                }
            }
        )+
    };
}

forward_graph!(&T, Box<T>, Rc<T>, Arc<T>);
