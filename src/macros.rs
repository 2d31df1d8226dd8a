macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Implement [`Graph`](crate::Graph) for a struct by listing its members.
///
/// Each entry maps a member name to an accessor expression over the object.
/// Fields and zero-argument methods are written the same way, so either can
/// back a path segment:
///
/// ```
/// use graphfmt::{FormatOptions, format_with, graph_object};
///
/// struct Address {
///     city: String,
/// }
///
/// struct Unit {
///     name: String,
///     location: Option<String>,
///     address: Address,
/// }
///
/// impl Unit {
///     fn call_sign(&self) -> String {
///         format!("{}/1", self.name)
///     }
/// }
///
/// graph_object! {
///     Address {
///         "City" => |a| &a.city,
///     }
/// }
///
/// graph_object! {
///     Unit {
///         "Name" => |u| &u.name,
///         "Location" => |u| &u.location,
///         "Address" => |u| &u.address,
///         "CallSign" => |u| u.call_sign(),
///     }
/// }
///
/// let unit = Unit {
///     name: "Engine1".into(),
///     location: None,
///     address: Address { city: "Berlin".into() },
/// };
/// let out = format_with(&unit, "{CallSign} in {Address.City} at {Location}", FormatOptions::empty()).unwrap();
/// assert_eq!(out, "Engine1/1 in Berlin at ");
/// ```
///
/// An entry written `=> try |x| expr` takes an accessor returning
/// `Result<T, AccessError>`. An `Err` is reported as a member read failure,
/// which the resolver treats as "not found":
///
/// ```
/// use graphfmt::{AccessError, FormatOptions, format_with, graph_object};
///
/// struct Sensor {
///     reading: Option<u32>,
/// }
///
/// impl Sensor {
///     fn level(&self) -> Result<u32, AccessError> {
///         self.reading.ok_or_else(|| AccessError::new("Level", "sensor offline"))
///     }
/// }
///
/// graph_object! {
///     Sensor {
///         "Level" => try |s| s.level(),
///     }
/// }
///
/// let marks = FormatOptions::INSERT_QUESTION_MARKS_FOR_NULL_VALUES;
/// assert_eq!(format_with(&Sensor { reading: Some(7) }, "{Level}", marks).unwrap(), "7");
/// assert_eq!(format_with(&Sensor { reading: None }, "{Level}", marks).unwrap(), "[?]");
/// ```
///
/// The macro also implements `IntoValue` for `&Type`, so the struct can be
/// used as a nested member of another `graph_object!`.
#[macro_export]
macro_rules! graph_object {
    (@member ; $access:expr) => {
        ::std::result::Result::Ok(::std::option::Option::Some($crate::IntoValue::into_value($access)))
    };
    (@member try ; $access:expr) => {
        ::std::result::Result::map($access, |value| {
            ::std::option::Option::Some($crate::IntoValue::into_value(value))
        })
    };
    (
        $ty:ident {
            $( $name:literal => $($fallible:ident)? |$this:ident| $access:expr ),* $(,)?
        }
    ) => {
        impl $crate::Graph for $ty {
            fn member(
                &self,
                name: &str,
            ) -> ::std::result::Result<::std::option::Option<$crate::Value<'_>>, $crate::AccessError> {
                match name {
                    $(
                        $name => {
                            #[allow(unused_variables)]
                            let $this = self;
                            $crate::graph_object!(@member $($fallible)? ; $access)
                        }
                    )*
                    _ => ::std::result::Result::Ok(::std::option::Option::None),
                }
            }

            fn render(&self) -> ::std::string::String {
                ::std::string::String::from(stringify!($ty))
            }
        }

        impl<'a> $crate::IntoValue<'a> for &'a $ty {
            fn into_value(self) -> $crate::Value<'a> {
                $crate::Value::Object(self)
            }
        }
    };
}
