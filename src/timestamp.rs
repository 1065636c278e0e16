//! RFC3339 timestamps, e.g. `"2014-10-02T15:01:23.045123456Z"`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;
use serde_json::Value;

use crate::{
    decode::Field,
    error::{Error, Result},
};

pub type Timestamp = DateTime<Utc>;

/// Parse an RFC3339 timestamp, keeping nanosecond precision. Offsets other
/// than `Z` are accepted and normalised to UTC.
pub fn parse(raw: &str) -> Result<Timestamp> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|_| Error::MalformedTimestamp(raw.to_owned()))
}

/// Format with a `Z` suffix and only as many fractional digits (0, 3, 6 or 9)
/// as the value needs.
pub fn format(timestamp: &Timestamp) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

pub fn serialize<S: Serializer>(
    timestamp: &Timestamp,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format(timestamp))
}

impl Field for Timestamp {
    fn from_field(field: &'static str, value: &Value) -> Result<Self> {
        let raw = value.as_str().ok_or(Error::TypeMismatch {
            field,
            expected: "RFC3339 timestamp string",
        })?;
        parse(raw)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, TimeZone, Timelike};

    use super::*;

    #[test]
    fn test_parse_keeps_nanoseconds() {
        let t = parse("2014-10-02T15:01:23.045123456Z").unwrap();
        assert_eq!((t.year(), t.month(), t.day()), (2014, 10, 2));
        assert_eq!((t.hour(), t.minute(), t.second()), (15, 1, 23));
        assert_eq!(t.nanosecond(), 45_123_456);
        assert_eq!(t.timestamp(), 1_412_262_083);
    }

    #[test]
    fn test_parse_normalises_offset() {
        let t = parse("2014-10-02T17:01:23+02:00").unwrap();
        assert_eq!(t, Utc.with_ymd_and_hms(2014, 10, 2, 15, 1, 23).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for raw in [
            "",
            "yesterday",
            "2014-10-02",
            "2014-10-02T15:01:23",
            "2014-13-02T15:01:23Z",
        ] {
            match parse(raw) {
                Err(Error::MalformedTimestamp(got)) => assert_eq!(got, raw),
                other => panic!("expected MalformedTimestamp for {raw:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_format() {
        let t = parse("2014-10-02T15:01:23.045123456Z").unwrap();
        assert_eq!(format(&t), "2014-10-02T15:01:23.045123456Z");

        let t = parse("2014-10-02T15:01:23Z").unwrap();
        assert_eq!(format(&t), "2014-10-02T15:01:23Z");

        let t = parse("2014-10-02T15:01:23.5Z").unwrap();
        assert_eq!(format(&t), "2014-10-02T15:01:23.500Z");
    }

    #[test]
    fn test_field_requires_string() {
        let err =
            Timestamp::from_field("creationTime", &serde_json::json!(1412262083)).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { field: "creationTime", .. }));
    }
}
