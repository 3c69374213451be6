//! NumericDate timestamps
//!
//! JWT time claims (`exp`, `nbf`, `iat`) are integer seconds since the Unix
//! epoch. [`Timestamp`] wraps a UTC instant at whole-second resolution and
//! (de)serializes as that integer. An unset claim is `Option::None`, never a
//! sentinel instant, so `"exp":0` is a real value.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{Error, Result};

/// Text form of an unset timestamp
const NULL_TEXT: &str = "null";

/// A point in time, serialized as Unix seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Current wall-clock time, truncated to whole seconds
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Timestamp from Unix seconds
    pub fn from_unix(seconds: i64) -> Result<Self> {
        DateTime::from_timestamp(seconds, 0)
            .map(Self)
            .ok_or(Error::TimestampOutOfRange(seconds))
    }

    /// Wrap a `chrono` instant, dropping sub-second precision
    pub fn from_datetime(datetime: DateTime<Utc>) -> Self {
        let seconds = datetime.timestamp();
        Self(DateTime::from_timestamp(seconds, 0).unwrap_or(datetime))
    }

    /// Unix seconds
    pub fn unix(&self) -> i64 {
        self.0.timestamp()
    }

    /// The wrapped instant
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Move the timestamp forward by `duration`
    pub fn add(self, duration: Duration) -> Result<Self> {
        let delta = TimeDelta::from_std(duration).map_err(|_| Error::TimestampOverflow)?;
        self.0
            .checked_add_signed(delta)
            .map(Self::from_datetime)
            .ok_or(Error::TimestampOverflow)
    }

    /// Move the timestamp back by `duration`
    pub fn sub(self, duration: Duration) -> Result<Self> {
        let delta = TimeDelta::from_std(duration).map_err(|_| Error::TimestampOverflow)?;
        self.0
            .checked_sub_signed(delta)
            .map(Self::from_datetime)
            .ok_or(Error::TimestampOverflow)
    }

    /// Text form of an optional timestamp: Unix seconds, or `null` when unset
    pub fn to_text(value: Option<&Timestamp>) -> String {
        match value {
            Some(timestamp) => timestamp.unix().to_string(),
            None => NULL_TEXT.to_string(),
        }
    }

    /// Inverse of [`Timestamp::to_text`]
    pub fn from_text(text: &str) -> Result<Option<Timestamp>> {
        if text == NULL_TEXT {
            return Ok(None);
        }
        text.parse().map(Some)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.unix())
    }
}

impl FromStr for Timestamp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let seconds = s
            .parse::<i64>()
            .map_err(|e| Error::FormatInvalidJson(format!("Invalid NumericDate '{s}': {e}")))?;
        Self::from_unix(seconds)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::from_datetime(datetime)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.unix())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct NumericDateVisitor;

        impl Visitor<'_> for NumericDateVisitor {
            type Value = Timestamp;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an integer number of seconds since the Unix epoch")
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<Timestamp, E> {
                Timestamp::from_unix(value).map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<Timestamp, E> {
                let seconds = i64::try_from(value).map_err(|_| E::custom(Error::TimestampOverflow))?;
                self.visit_i64(seconds)
            }
        }

        deserializer.deserialize_i64(NumericDateVisitor)
    }
}
