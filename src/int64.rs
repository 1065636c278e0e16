//! int64 values travel as decimal strings in the API's JSON (`"width": "4032"`),
//! though plain JSON integers are accepted when decoding.

use serde::Serializer;
use serde_json::Value;

use crate::{
    decode::Field,
    error::{Error, Result},
};

impl Field for i64 {
    fn from_field(field: &'static str, value: &Value) -> Result<Self> {
        match value {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
        .ok_or(Error::TypeMismatch {
            field,
            expected: "int64",
        })
    }
}

/// `serialize_with` helper writing an int64 as its decimal string.
pub fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_number_and_string_forms() {
        assert_eq!(i64::from_field("width", &json!(4032)).unwrap(), 4032);
        assert_eq!(i64::from_field("width", &json!("4032")).unwrap(), 4032);
        assert_eq!(i64::from_field("width", &json!("-7")).unwrap(), -7);
    }

    #[test]
    fn test_rejects_non_integers() {
        for value in [json!(1.5), json!("1.5"), json!("wide"), json!(true)] {
            let err = i64::from_field("width", &value).unwrap_err();
            assert!(matches!(
                err,
                Error::TypeMismatch {
                    field: "width",
                    expected: "int64"
                }
            ));
        }
    }

    #[test]
    fn test_serializes_as_string() {
        let mut out = Vec::new();
        serialize(&3024, &mut serde_json::Serializer::new(&mut out)).unwrap();
        assert_eq!(out, br#""3024""#);
    }
}
