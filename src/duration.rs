//! Signed, fixed-length span of time, as carried by the protobuf
//! `google.protobuf.Duration` type. On the wire it is a decimal number of
//! seconds followed by `s`, e.g. `"0.008s"` for an exposure time.

use std::{fmt, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::{
    decode::Field,
    error::{Error, Result},
};

/// Roughly 10,000 years, the largest span the protobuf type allows.
pub const MAX_SECONDS: i64 = 315_576_000_000;
pub const MAX_NANOS: i32 = 999_999_999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Duration {
    seconds: i64,
    nanos: i32,
}

impl Duration {
    /// Build a duration, checking the ranges and that a non-zero `seconds`
    /// and `nanos` agree in sign.
    pub fn new(seconds: i64, nanos: i32) -> Option<Self> {
        let in_range = (-MAX_SECONDS..=MAX_SECONDS).contains(&seconds)
            && (-MAX_NANOS..=MAX_NANOS).contains(&nanos);
        let same_sign = seconds == 0 || nanos == 0 || (seconds < 0) == (nanos < 0);

        (in_range && same_sign).then_some(Self { seconds, nanos })
    }

    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    pub fn nanos(&self) -> i32 {
        self.nanos
    }

    pub fn is_negative(&self) -> bool {
        self.seconds < 0 || self.nanos < 0
    }

    /// Convert into a [`std::time::Duration`], which cannot be negative.
    pub fn to_std(&self) -> Option<std::time::Duration> {
        if self.is_negative() {
            return None;
        }
        Some(std::time::Duration::new(self.seconds as u64, self.nanos as u32))
    }
}

impl FromStr for Duration {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        let invalid = || Error::InvalidDuration(raw.to_owned());

        let number = raw.strip_suffix('s').ok_or_else(invalid)?;
        let (negative, number) = match number.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, number.strip_prefix('+').unwrap_or(number)),
        };
        let (whole, fraction) = match number.split_once('.') {
            Some((whole, fraction)) if !fraction.is_empty() => (whole, fraction),
            Some(_) => return Err(invalid()),
            None => (number, ""),
        };

        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() || !all_digits(whole) || !all_digits(fraction) || fraction.len() > 9 {
            return Err(invalid());
        }

        let seconds: i64 = whole.parse().map_err(|_| invalid())?;
        let nanos: i32 = if fraction.is_empty() {
            0
        } else {
            let scale = 10_i32.pow(9 - fraction.len() as u32);
            fraction.parse::<i32>().map_err(|_| invalid())? * scale
        };

        let (seconds, nanos) = if negative {
            (-seconds, -nanos)
        } else {
            (seconds, nanos)
        };
        Self::new(seconds, nanos).ok_or_else(invalid)
    }
}

impl fmt::Display for Duration {
    /// Formats the way protobuf's JSON mapping does: no fraction for whole
    /// seconds, otherwise 3, 6 or 9 fractional digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let seconds = self.seconds.unsigned_abs();
        let nanos = self.nanos.unsigned_abs();

        if nanos == 0 {
            write!(f, "{sign}{seconds}s")
        } else if nanos % 1_000_000 == 0 {
            write!(f, "{sign}{seconds}.{:03}s", nanos / 1_000_000)
        } else if nanos % 1_000 == 0 {
            write!(f, "{sign}{seconds}.{:06}s", nanos / 1_000)
        } else {
            write!(f, "{sign}{seconds}.{:09}s", nanos)
        }
    }
}

impl Serialize for Duration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

impl Field for Duration {
    fn from_field(field: &'static str, value: &Value) -> Result<Self> {
        value
            .as_str()
            .ok_or(Error::TypeMismatch {
                field,
                expected: "duration string",
            })?
            .parse()
    }
}
