//! Conversions from Rust values into [`Value`].
//!
//! Member accessors return whatever type the field or method has; this trait
//! turns it into a `Value` that either borrows from the graph (`&'a String`,
//! `&'a serde_json::Value`, nested objects) or owns its rendering (a `String`
//! returned by an accessor method, a `chrono` timestamp).

use super::{Graph, Value};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use std::borrow::Cow;
use std::fmt::Display;
use std::rc::Rc;
use std::sync::Arc;

pub trait IntoValue<'a> {
    fn into_value(self) -> Value<'a>;
}

impl<'a> IntoValue<'a> for Value<'a> {
    fn into_value(self) -> Value<'a> {
        self
    }
}

impl<'a, 'b: 'a> IntoValue<'a> for &'a (dyn Graph + 'b) {
    fn into_value(self) -> Value<'a> {
        Value::Object(self)
    }
}

// --- Text --------------------------------------------------------------------

impl<'a> IntoValue<'a> for &'a str {
    fn into_value(self) -> Value<'a> {
        Value::Text(Cow::Borrowed(self))
    }
}

impl<'a> IntoValue<'a> for &'a String {
    fn into_value(self) -> Value<'a> {
        Value::Text(Cow::Borrowed(self.as_str()))
    }
}

impl<'a> IntoValue<'a> for String {
    fn into_value(self) -> Value<'a> {
        Value::Text(Cow::Owned(self))
    }
}

impl<'a> IntoValue<'a> for Cow<'a, str> {
    fn into_value(self) -> Value<'a> {
        Value::Text(self)
    }
}

// --- Scalars -----------------------------------------------------------------

macro_rules! scalar_into_value {
    ($variant:ident as $wide:ty: $($ty:ty),+) => {
        $(
            impl<'a> IntoValue<'a> for $ty {
                fn into_value(self) -> Value<'a> {
                    Value::$variant(self as $wide)
                }
            }

            impl<'a> IntoValue<'a> for &'a $ty {
                fn into_value(self) -> Value<'a> {
                    Value::$variant(*self as $wide)
                }
            }
        )+
    };
}

scalar_into_value!(Int as i64: i8, i16, i32, i64, isize);
scalar_into_value!(UInt as u64: u8, u16, u32, u64, usize);
scalar_into_value!(Float as f64: f32, f64);

impl<'a> IntoValue<'a> for bool {
    fn into_value(self) -> Value<'a> {
        Value::Bool(self)
    }
}

impl<'a> IntoValue<'a> for &'a bool {
    fn into_value(self) -> Value<'a> {
        Value::Bool(*self)
    }
}

impl<'a> IntoValue<'a> for char {
    fn into_value(self) -> Value<'a> {
        Value::Char(self)
    }
}

impl<'a> IntoValue<'a> for &'a char {
    fn into_value(self) -> Value<'a> {
        Value::Char(*self)
    }
}

// --- Wrappers ----------------------------------------------------------------

impl<'a, T> IntoValue<'a> for Option<T>
where
    T: IntoValue<'a>,
{
    fn into_value(self) -> Value<'a> {
        self.map_or(Value::Null, IntoValue::into_value)
    }
}

impl<'a, T> IntoValue<'a> for &'a Option<T>
where
    &'a T: IntoValue<'a>,
{
    fn into_value(self) -> Value<'a> {
        self.as_ref().map_or(Value::Null, IntoValue::into_value)
    }
}

impl<'a, T: ?Sized> IntoValue<'a> for &'a Box<T>
where
    &'a T: IntoValue<'a>,
{
    fn into_value(self) -> Value<'a> {
        (&**self).into_value()
    }
}

impl<'a, T: ?Sized> IntoValue<'a> for &'a Rc<T>
where
    &'a T: IntoValue<'a>,
{
    fn into_value(self) -> Value<'a> {
        (&**self).into_value()
    }
}

impl<'a, T: ?Sized> IntoValue<'a> for &'a Arc<T>
where
    &'a T: IntoValue<'a>,
{
    fn into_value(self) -> Value<'a> {
        (&**self).into_value()
    }
}

// --- chrono ------------------------------------------------------------------

fn display_text<'a>(value: impl Display) -> Value<'a> {
    Value::Text(Cow::Owned(value.to_string()))
}

macro_rules! display_into_value {
    ($($ty:ty),+) => {
        $(
            impl<'a> IntoValue<'a> for $ty {
                fn into_value(self) -> Value<'a> {
                    display_text(self)
                }
            }

            impl<'a> IntoValue<'a> for &'a $ty {
                fn into_value(self) -> Value<'a> {
                    display_text(self)
                }
            }
        )+
    };
}

display_into_value!(NaiveDate, NaiveTime, NaiveDateTime);

impl<'a, Tz> IntoValue<'a> for DateTime<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    fn into_value(self) -> Value<'a> {
        display_text(self)
    }
}

impl<'a, Tz> IntoValue<'a> for &'a DateTime<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    fn into_value(self) -> Value<'a> {
        display_text(self)
    }
}
