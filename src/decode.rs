//! Turning raw JSON into resources, and resources back into JSON.
//!
//! Every resource implements [`Decode`], which walks a JSON object through an
//! [`Object`] accessor. Failures carry the key that broke and the type it
//! belonged to.

use log::{debug, trace};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// A resource decoded from a JSON object.
pub trait Decode: Sized {
    /// The name reported in [`Error::MissingField`]
    const TYPE_NAME: &'static str;

    fn decode(object: &Object<'_>) -> Result<Self>;
}

/// A value that can sit under a key of a JSON object.
pub trait Field: Sized {
    fn from_field(field: &'static str, value: &Value) -> Result<Self>;
}

/// Read-only view over the keys of a JSON object belonging to one resource.
///
/// A key holding `null` is treated the same as a missing key.
pub struct Object<'a> {
    type_name: &'static str,
    fields: &'a Map<String, Value>,
}

impl<'a> Object<'a> {
    pub fn new(type_name: &'static str, fields: &'a Map<String, Value>) -> Self {
        Self { type_name, fields }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields.get(key).filter(|value| !value.is_null())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn required<T: Field>(&self, key: &'static str) -> Result<T> {
        match self.get(key) {
            Some(value) => T::from_field(key, value),
            None => Err(Error::MissingField {
                field: key,
                type_name: self.type_name,
            }),
        }
    }

    pub fn optional<T: Field>(&self, key: &'static str) -> Result<Option<T>> {
        self.get(key)
            .map(|value| T::from_field(key, value))
            .transpose()
    }

    /// Like [`Object::optional`], but falls back to the proto3 zero value.
    pub fn or_default<T: Field + Default>(&self, key: &'static str) -> Result<T> {
        Ok(self.optional(key)?.unwrap_or_default())
    }
}

/// Decode the object held under `field` as resource `T`.
pub fn decode_object<T: Decode>(field: &'static str, value: &Value) -> Result<T> {
    let fields = value.as_object().ok_or(Error::TypeMismatch {
        field,
        expected: "object",
    })?;
    T::decode(&Object::new(T::TYPE_NAME, fields))
}

pub fn from_value<T: Decode>(value: &Value) -> Result<T> {
    trace!("decoding {}", T::TYPE_NAME);
    decode_object(T::TYPE_NAME, value).map_err(|e| {
        debug!("failed to decode {}: {}", T::TYPE_NAME, e);
        e
    })
}

pub fn from_slice<T: Decode>(bytes: &[u8]) -> Result<T> {
    let value: Value = serde_json::from_slice(bytes)?;
    from_value(&value)
}

pub fn from_str<T: Decode>(json: &str) -> Result<T> {
    let value: Value = serde_json::from_str(json)?;
    from_value(&value)
}

pub fn to_value<T: Serialize>(resource: &T) -> Result<Value> {
    Ok(serde_json::to_value(resource)?)
}

pub fn to_string<T: Serialize>(resource: &T) -> Result<String> {
    Ok(serde_json::to_string(resource)?)
}

impl Field for String {
    fn from_field(field: &'static str, value: &Value) -> Result<Self> {
        value.as_str().map(str::to_owned).ok_or(Error::TypeMismatch {
            field,
            expected: "string",
        })
    }
}

impl Field for bool {
    /// Accepts `true`/`false` and their string spellings.
    fn from_field(field: &'static str, value: &Value) -> Result<Self> {
        match value {
            Value::Bool(b) => Ok(*b),
            Value::String(s) if s == "true" => Ok(true),
            Value::String(s) if s == "false" => Ok(false),
            _ => Err(Error::TypeMismatch {
                field,
                expected: "boolean",
            }),
        }
    }
}

impl Field for f64 {
    fn from_field(field: &'static str, value: &Value) -> Result<Self> {
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
        .ok_or(Error::TypeMismatch {
            field,
            expected: "number",
        })
    }
}

impl<T: Field> Field for Vec<T> {
    fn from_field(field: &'static str, value: &Value) -> Result<Self> {
        value
            .as_array()
            .ok_or(Error::TypeMismatch {
                field,
                expected: "array",
            })?
            .iter()
            .map(|item| T::from_field(field, item))
            .collect()
    }
}

/// Wires a [`Decode`] resource into [`Field`] and `serde::Deserialize`, so it
/// can be nested in other resources or in caller-defined serde types.
macro_rules! impl_resource {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::decode::Field for $ty {
            fn from_field(
                field: &'static str,
                value: &::serde_json::Value,
            ) -> $crate::error::Result<Self> {
                $crate::decode::decode_object(field, value)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let value =
                    <::serde_json::Value as ::serde::Deserialize>::deserialize(deserializer)?;
                $crate::decode::from_value::<$ty>(&value).map_err(::serde::de::Error::custom)
            }
        }
    )+};
}

pub(crate) use impl_resource;

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Debug)]
    struct Pair {
        name: String,
        count: i64,
        tags: Vec<String>,
        hidden: bool,
    }

    impl Decode for Pair {
        const TYPE_NAME: &'static str = "Pair";

        fn decode(object: &Object<'_>) -> Result<Self> {
            Ok(Self {
                name: object.required("name")?,
                count: object.or_default("count")?,
                tags: object.or_default("tags")?,
                hidden: object.or_default("hidden")?,
            })
        }
    }

    #[test]
    fn test_missing_field_names_key_and_type() {
        let err = from_value::<Pair>(&json!({ "count": 1 })).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingField {
                field: "name",
                type_name: "Pair"
            }
        ));
    }

    #[test]
    fn test_null_is_missing() {
        let err = from_value::<Pair>(&json!({ "name": null })).unwrap_err();
        assert!(matches!(err, Error::MissingField { field: "name", .. }));
    }

    #[test]
    fn test_type_mismatch() {
        let err = from_value::<Pair>(&json!({ "name": 12 })).unwrap_err();
        assert!(matches!(
            err,
            Error::TypeMismatch {
                field: "name",
                expected: "string"
            }
        ));

        let err = from_value::<Pair>(&json!({ "name": "a", "tags": ["x", 1] })).unwrap_err();
        assert!(matches!(
            err,
            Error::TypeMismatch {
                field: "tags",
                expected: "string"
            }
        ));
    }

    #[test]
    fn test_unknown_keys_ignored_and_defaults_applied() {
        let pair: Pair = from_value(&json!({ "name": "a", "extra": {"deep": true} })).unwrap();
        assert_eq!(pair.name, "a");
        assert_eq!(pair.count, 0);
        assert!(pair.tags.is_empty());
        assert!(!pair.hidden);
    }

    #[test]
    fn test_bool_accepts_string_spelling() {
        let pair: Pair = from_value(&json!({ "name": "a", "hidden": "true" })).unwrap();
        assert!(pair.hidden);

        let err = from_value::<Pair>(&json!({ "name": "a", "hidden": "yes" })).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { field: "hidden", .. }));
    }

    #[test]
    fn test_top_level_must_be_object() {
        let err = from_value::<Pair>(&json!(["name"])).unwrap_err();
        assert!(matches!(
            err,
            Error::TypeMismatch {
                field: "Pair",
                expected: "object"
            }
        ));
    }

    #[test]
    fn test_invalid_json() {
        let err = from_str::<Pair>("{ not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
